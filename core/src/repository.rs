//! The four network operations against the remote todo collection.
//!
//! # Design
//! `TodoRepository` is the seam the synchronizer is written against. The
//! HTTP implementation pairs a `TodoClient` (build/parse) with a `Transport`
//! (execute), so each operation is exactly one round trip: build, execute,
//! parse. Nothing is retried and nothing is returned from writes.

use async_trait::async_trait;

use crate::client::TodoClient;
use crate::error::NetworkError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateTodo, Todo, TodoId};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch the full collection in server order.
    async fn list(&self) -> Result<Vec<Todo>, NetworkError>;

    /// Submit a new, not-done record with the given task text.
    async fn create(&self, task: &str) -> Result<(), NetworkError>;

    /// Replace the record at `id` with `record`.
    async fn update(&self, id: &TodoId, record: &Todo) -> Result<(), NetworkError>;

    async fn delete(&self, id: &TodoId) -> Result<(), NetworkError>;
}

/// `TodoRepository` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoRepository<T = UreqTransport> {
    client: TodoClient,
    transport: T,
}

impl HttpTodoRepository<UreqTransport> {
    /// Repository for the collection at `base_url` using the ureq transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> HttpTodoRepository<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }
}

#[async_trait]
impl<T: Transport> TodoRepository for HttpTodoRepository<T> {
    async fn list(&self) -> Result<Vec<Todo>, NetworkError> {
        let req = self.client.build_list_todos();
        let resp = self.transport.execute(req).await?;
        self.client.parse_list_todos(resp)
    }

    async fn create(&self, task: &str) -> Result<(), NetworkError> {
        let req = self.client.build_create_todo(&CreateTodo::new(task))?;
        let resp = self.transport.execute(req).await?;
        self.client.parse_create_todo(resp)
    }

    async fn update(&self, id: &TodoId, record: &Todo) -> Result<(), NetworkError> {
        let req = self.client.build_update_todo(id, record)?;
        let resp = self.transport.execute(req).await?;
        self.client.parse_update_todo(resp)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), NetworkError> {
        let req = self.client.build_delete_todo(id);
        let resp = self.transport.execute(req).await?;
        self.client.parse_delete_todo(resp)
    }
}
