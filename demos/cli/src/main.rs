mod store;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vidaplus_core::{
    authenticate, demo_accounts, quick_login, resolve_menu_tag, tour_steps, DashboardSummary,
    MenuEntry, NavigationOutcome, Role, Shell, ShellConfig, ShellState,
};

use crate::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(
    name = "vidaplus-cli",
    about = "Điều khiển shell VidaPlus SGHSS từ terminal, lưu phiên vào file JSON."
)]
struct Args {
    /// File JSON đóng vai kho phiên của trình duyệt.
    #[arg(long, default_value = ".vidaplus-state.json", global = true)]
    state: PathBuf,

    /// In log mức debug (mặc định chỉ cảnh báo, hoặc theo RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Đăng nhập bằng email hoặc bằng tài khoản demo của một vai trò.
    Login {
        #[arg(long, conflicts_with = "role", required_unless_present = "role")]
        email: Option<String>,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long = "as", value_enum)]
        role: Option<RoleArg>,
    },
    /// Xem các bước tour lần đầu, rồi hoàn tất hoặc bỏ qua.
    Tour {
        #[arg(value_enum)]
        action: Option<TourAction>,
    },
    /// Menu của phiên hiện tại, hoặc của một tag vai trò bất kỳ.
    Menu {
        #[arg(long)]
        role: Option<String>,
    },
    /// Thử điều hướng tới một màn hình.
    Navigate { view: String },
    /// Trạng thái shell và người dùng hiện tại.
    Status,
    /// Nội dung dashboard của người dùng hiện tại.
    Dashboard,
    /// Danh sách tài khoản demo.
    Accounts,
    Logout,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RoleArg {
    Patient,
    Professional,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => Role::Patient,
            RoleArg::Professional => Role::Professional,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TourAction {
    Complete,
    Skip,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn describe(state: ShellState) -> String {
    match state {
        ShellState::Unauthenticated => "unauthenticated".to_string(),
        ShellState::FirstRunTour => "first-run tour".to_string(),
        ShellState::Active(view) => format!("active ({view})"),
    }
}

fn print_menu(entries: &[MenuEntry]) {
    for entry in entries {
        println!("  {:<16} {}", entry.view.as_str(), entry.label);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let store = JsonFileStore::open(&args.state)?;
    let mut shell = Shell::launch(store, ShellConfig::default());

    match args.command {
        Command::Login {
            email,
            password,
            role,
        } => {
            let identity = match (email, role) {
                (_, Some(role)) => quick_login(role.into()),
                (Some(email), None) => authenticate(&email, &password)?,
                (None, None) => bail!("Cần --email hoặc --as"),
            };
            let name = identity.name.clone();
            let state = shell
                .on_login(identity)
                .with_context(|| format!("Không lưu được phiên vào {:?}", args.state))?;
            println!("Logged in as {name}: {}", describe(state));
        }
        Command::Tour { action } => {
            if shell.state() != ShellState::FirstRunTour {
                bail!("Không có tour đang chờ (trạng thái: {})", describe(shell.state()));
            }
            let steps = tour_steps();
            let total = steps.len();
            for (index, step) in steps.iter().enumerate() {
                println!("[{}/{total}] {}", index + 1, step.title);
                println!("    {}", step.description);
            }
            let state = match action {
                Some(TourAction::Complete) => shell.complete_tour()?,
                Some(TourAction::Skip) => shell.skip_tour()?,
                None => return Ok(()),
            };
            println!("Tour done: {}", describe(state));
        }
        Command::Menu { role } => {
            let entries = match role {
                Some(tag) => resolve_menu_tag(&tag),
                None => shell.menu(),
            };
            if entries.is_empty() {
                bail!("Chưa đăng nhập; dùng --role để xem menu của một vai trò");
            }
            print_menu(&entries);
        }
        Command::Navigate { view } => match shell.on_navigate_tag(&view) {
            NavigationOutcome::Moved(view) => println!("Moved to {view}"),
            NavigationOutcome::Refused(view) => {
                bail!("Vai trò hiện tại không có quyền mở {view}")
            }
            NavigationOutcome::Unknown => bail!("Màn hình không tồn tại: {view}"),
            NavigationOutcome::Ignored => {
                bail!("Shell chưa sẵn sàng (trạng thái: {})", describe(shell.state()))
            }
        },
        Command::Status => {
            println!("State file: {}", shell.session().store().path().display());
            println!("State: {}", describe(shell.state()));
            if let Some(identity) = shell.identity() {
                println!(
                    "User: {} <{}> ({})",
                    identity.name,
                    identity.email,
                    identity.role.display_name()
                );
            }
            println!("Tour seen: {}", shell.session().tour_seen());
        }
        Command::Dashboard => {
            let identity = shell.identity().context("Chưa đăng nhập")?;
            let summary = DashboardSummary::for_identity(identity);
            println!("{}\n{}", summary.greeting, summary.subtitle);
            for card in &summary.stats {
                println!("  {:<24} {}", card.title, card.value);
            }
            println!("{}", summary.agenda_title);
            for item in &summary.upcoming {
                println!("  {} {} ({})", item.time, item.title, item.detail);
            }
        }
        Command::Accounts => {
            for identity in demo_accounts() {
                println!(
                    "  {:<28} {}",
                    identity.email,
                    identity.role.display_name()
                );
            }
        }
        Command::Logout => {
            shell
                .on_logout()
                .with_context(|| format!("Không xóa được phiên trong {:?}", args.state))?;
            println!("Logged out");
        }
    }

    Ok(())
}
