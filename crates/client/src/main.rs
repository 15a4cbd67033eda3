//! `todo-cli` -- interactive terminal front end for the todo API.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description          |
//! |----------------|----------|-------------------------|----------------------|
//! | `TODO_API_URL` | no       | `http://localhost:3000` | Base URL of the API  |
//! | `RUST_LOG`     | no       | `todo_client=warn`      | Log filter (stderr)  |

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_client::api::TodoApi;
use todo_client::cli::{self, Command, HELP};
use todo_client::prompt::Prompt;
use todo_client::view::{ActionOutcome, TodoView};

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Stdin/stdout shared by the command loop and the view's prompts.
struct Terminal {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Print `prompt` and read one line. `None` on end of input.
    async fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = std::io::stdout().flush();

        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read from stdin");
                None
            }
        }
    }
}

#[async_trait]
impl Prompt for Terminal {
    async fn alert(&self, title: &str, message: &str) {
        println!("! {title}: {message}");
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        let question = format!("? {title}: {message} [y/N] ");
        matches!(
            self.read_line(&question).await.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "YES")
        )
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = TodoApi::new(
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
    );
    tracing::info!(api_url = %api.base_url(), "Starting todo-cli");

    let terminal = Arc::new(Terminal::new());
    let mut view = TodoView::new(api, terminal.clone());

    view.mount().await;
    print!("{}", render(&view));
    println!("Type 'help' for commands.");

    while let Some(line) = terminal.read_line("> ").await {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::List => print!("{}", render(&view)),
            Command::Add(text) => {
                view.set_input(text);
                if view.add().await == ActionOutcome::Done {
                    print!("{}", render(&view));
                }
            }
            Command::Category(category) => {
                view.select_category(category);
                println!("New tasks go to: {category}");
            }
            Command::Toggle(id) => {
                if view.toggle(id) {
                    print!("{}", render(&view));
                } else {
                    println!("No todo #{id} in the list");
                }
            }
            Command::Delete(id) => match view.delete(id).await {
                ActionOutcome::Done => print!("{}", render(&view)),
                ActionOutcome::Cancelled => println!("Cancelled"),
                ActionOutcome::Rejected | ActionOutcome::Failed => {}
            },
            Command::Refresh => {
                if view.refresh().await {
                    print!("{}", render(&view));
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
}

fn render(view: &TodoView) -> String {
    cli::render(view.todos(), view.pending_count(), view.selected_category())
}
