use vidaplus_core::{tour_steps, TourCursor};

#[test]
fn cursor_walks_all_steps_and_stops_at_last() {
    let steps = tour_steps();
    let mut cursor = TourCursor::new(steps.len());
    assert!(cursor.is_first());
    assert_eq!(cursor.progress_percent(), 25);

    while cursor.next() {}

    assert!(cursor.is_last());
    assert_eq!(cursor.index(), steps.len() - 1);
    assert_eq!(cursor.progress_percent(), 100);
    assert_eq!(steps[cursor.index()].title, "Tudo Pronto!");
}

#[test]
fn previous_saturates_at_first_step() {
    let mut cursor = TourCursor::new(4);
    cursor.previous();
    assert_eq!(cursor.index(), 0);

    cursor.next();
    cursor.previous();
    assert!(cursor.is_first());
}
