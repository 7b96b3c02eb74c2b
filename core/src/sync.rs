//! The in-memory todo list and its mutate-then-refetch operations.
//!
//! # Design
//! `TodoSynchronizer` owns the only copy of the list. Every write goes to the
//! repository first and is always followed by a `refresh`, which replaces the
//! list wholesale with whatever the server returns. Records are never patched
//! locally.
//!
//! Repository errors stop here. They are handed to an `ErrorReporter` and the
//! operation carries on, so callers only ever see "the list did not change".
//!
//! Overlapping refreshes are not sequenced: whichever response settles last
//! is what the list holds. The lock is only taken to swap or snapshot the
//! list and is never held across an await.

use std::fmt;

use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::error::NetworkError;
use crate::repository::TodoRepository;
use crate::types::{Todo, TodoId};

/// Which synchronizer operation a swallowed error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Add,
    Toggle,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Refresh => "refresh",
            Operation::Add => "add",
            Operation::Toggle => "toggle",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// Receives the errors the synchronizer swallows.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, operation: Operation, error: &NetworkError);
}

/// Default reporter: one `error!` event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: Operation, err: &NetworkError) {
        error!(%operation, error = %err, "todo request failed");
    }
}

pub struct TodoSynchronizer<R, E = TracingReporter> {
    repository: R,
    reporter: E,
    todos: RwLock<Vec<Todo>>,
}

impl<R: TodoRepository> TodoSynchronizer<R, TracingReporter> {
    pub fn new(repository: R) -> Self {
        Self::with_reporter(repository, TracingReporter)
    }
}

impl<R: TodoRepository, E: ErrorReporter> TodoSynchronizer<R, E> {
    /// Starts with an empty list; nothing is fetched until the first
    /// `refresh`.
    pub fn with_reporter(repository: R, reporter: E) -> Self {
        Self {
            repository,
            reporter,
            todos: RwLock::new(Vec::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Replace the list with the server's. On failure the list is kept.
    pub async fn refresh(&self) {
        match self.repository.list().await {
            Ok(todos) => {
                debug!(count = todos.len(), "replacing todo list");
                *self.todos.write() = todos;
            }
            Err(err) => self.reporter.report(Operation::Refresh, &err),
        }
    }

    /// Create a todo and refresh. Blank text is ignored entirely.
    pub async fn add(&self, task: &str) {
        if task.trim().is_empty() {
            warn!("ignoring blank task");
            return;
        }
        if let Err(err) = self.repository.create(task).await {
            self.reporter.report(Operation::Add, &err);
        }
        self.refresh().await;
    }

    /// Send `todo` back with `isDone` inverted, then refresh.
    pub async fn toggle(&self, todo: &Todo) {
        let record = todo.toggled();
        if let Err(err) = self.repository.update(&todo.id, &record).await {
            self.reporter.report(Operation::Toggle, &err);
        }
        self.refresh().await;
    }

    pub async fn remove(&self, id: &TodoId) {
        if let Err(err) = self.repository.delete(id).await {
            self.reporter.report(Operation::Remove, &err);
        }
        self.refresh().await;
    }

    /// Snapshot of the current list in server order.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.read().clone()
    }

    pub fn in_progress(&self) -> Vec<Todo> {
        in_progress(&self.todos.read())
    }

    pub fn completed(&self) -> Vec<Todo> {
        completed(&self.todos.read())
    }
}

/// Records not yet done, in list order.
pub fn in_progress(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| !t.is_done).cloned().collect()
}

/// Records marked done, in list order.
pub fn completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|t| t.is_done).cloned().collect()
}
