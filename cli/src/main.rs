use std::process::ExitCode;

use clap::{Parser, Subcommand};
use todo_sync::{HttpTodoRepository, Todo, TodoSynchronizer};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// Longest task text the add command accepts.
const MAX_TASK_LEN: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// URL of the remote todo collection
    #[arg(
        long,
        global = true,
        env = "TODO_API_URL",
        default_value = "http://127.0.0.1:3000/todos"
    )]
    base_url: String,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Show in-progress and completed todos
    List,
    /// Add a new todo
    Add {
        #[arg(value_parser = parse_task)]
        task: String,
    },
    /// Flip a todo between in progress and completed
    Toggle { id: String },
    /// Delete a todo
    Rm { id: String },
}

fn parse_task(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("task must not be blank".to_string());
    }
    if raw.chars().count() > MAX_TASK_LEN {
        return Err(format!("task must be at most {MAX_TASK_LEN} characters"));
    }
    Ok(raw.to_string())
}

/// Look a todo up by the textual form of its id.
fn find_todo(todos: &[Todo], id: &str) -> Option<Todo> {
    todos.iter().find(|t| t.id.to_string() == id).cloned()
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the rendered list.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("a global tracing subscriber was already installed");
    }

    let cli = Cli::parse();
    let sync = TodoSynchronizer::new(HttpTodoRepository::new(&cli.base_url));
    sync.refresh().await;

    match &cli.command {
        Command::List => {}
        Command::Add { task } => sync.add(task).await,
        Command::Toggle { id } => match find_todo(&sync.todos(), id) {
            Some(todo) => sync.toggle(&todo).await,
            None => {
                eprintln!("no todo with id {id}");
                return ExitCode::FAILURE;
            }
        },
        Command::Rm { id } => match find_todo(&sync.todos(), id) {
            Some(todo) => sync.remove(&todo.id).await,
            None => {
                eprintln!("no todo with id {id}");
                return ExitCode::FAILURE;
            }
        },
    }

    print!("{}", render::render(&sync.in_progress(), &sync.completed()));
    ExitCode::SUCCESS
}
