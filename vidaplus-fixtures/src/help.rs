use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture};

const FIXTURE: &str = include_str!("../data/faq.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqCategory {
    pub category: String,
    pub questions: Vec<FaqItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

pub fn load_faq() -> Result<Vec<FaqCategory>, ShellError> {
    parse_fixture("faq", FIXTURE)
}

/// Lọc câu hỏi theo nội dung câu hỏi hoặc câu trả lời; bỏ các nhóm không còn câu nào.
pub fn search_faq(categories: &[FaqCategory], query: &str) -> Vec<FaqCategory> {
    categories
        .iter()
        .filter_map(|group| {
            let questions: Vec<FaqItem> = group
                .questions
                .iter()
                .filter(|item| matches_query(query, &[item.question.as_str(), item.answer.as_str()]))
                .cloned()
                .collect();
            (!questions.is_empty()).then(|| FaqCategory {
                category: group.category.clone(),
                questions,
            })
        })
        .collect()
}
