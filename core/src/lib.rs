//! Todo list synchronization against a remote REST collection.
//!
//! # Overview
//! A `TodoSynchronizer` holds the todo list a front end renders. Every
//! mutation (add, toggle, remove) is sent to the remote collection and then
//! the whole list is fetched again; the server is the only source of truth.
//!
//! # Design
//! - `TodoClient` is stateless and never touches the network: `build_*`
//!   produces an `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - A `Transport` executes requests; `UreqTransport` is the default.
//! - `TodoRepository` is one round trip per operation. `HttpTodoRepository`
//!   composes client and transport, tests substitute their own.
//! - Network errors never escape the synchronizer. They go to an
//!   `ErrorReporter` (tracing by default) and the list is refreshed anyway.

pub mod client;
pub mod error;
pub mod http;
pub mod repository;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use error::NetworkError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use repository::{HttpTodoRepository, TodoRepository};
pub use sync::{completed, in_progress, ErrorReporter, Operation, TodoSynchronizer, TracingReporter};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, Todo, TodoId};
