//! # Mock Framework
//!
//! Utilities for testing the resolver without a live backend.
//!
//! Use [`create_mock_backend`] to get a backend and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_create`] to assert behavior.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::backend::VendorBackend;
use crate::domain::VendorProductCreate;
use crate::error::BackendError;

pub type Response<T> = oneshot::Sender<Result<T, BackendError>>;

/// One backend call, waiting for the test to answer it.
#[derive(Debug)]
pub enum BackendRequest {
    FetchBaseProduct {
        id: u64,
        respond_to: Response<Value>,
    },
    ListVendorProducts {
        limit: usize,
        respond_to: Response<Value>,
    },
    CreateVendorProduct {
        payload: VendorProductCreate,
        respond_to: Response<Value>,
    },
}

/// Backend that forwards every call to the test over a channel.
#[derive(Clone)]
pub struct MockBackend {
    sender: mpsc::Sender<BackendRequest>,
}

impl MockBackend {
    async fn call(
        &self,
        request: impl FnOnce(Response<Value>) -> BackendRequest,
    ) -> Result<Value, BackendError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| BackendError::Transport("Mock backend closed".to_string()))?;
        response
            .await
            .map_err(|_| BackendError::Transport("Mock backend dropped".to_string()))?
    }
}

#[async_trait]
impl VendorBackend for MockBackend {
    async fn fetch_base_product(&self, id: u64) -> Result<Value, BackendError> {
        self.call(|respond_to| BackendRequest::FetchBaseProduct { id, respond_to }).await
    }

    async fn list_vendor_products(&self, limit: usize) -> Result<Value, BackendError> {
        self.call(|respond_to| BackendRequest::ListVendorProducts { limit, respond_to }).await
    }

    async fn create_vendor_product(&self, payload: &VendorProductCreate) -> Result<Value, BackendError> {
        let payload = payload.clone();
        self.call(|respond_to| BackendRequest::CreateVendorProduct { payload, respond_to }).await
    }
}

/// Creates a mock backend and a receiver for asserting requests.
///
/// # Testing Strategy
/// The test plays the remote service: it pulls each request off `receiver`,
/// checks it, and answers through the oneshot responder. Success, failure and
/// ordering are all under the test's control.
pub fn create_mock_backend(buffer_size: usize) -> (Arc<MockBackend>, mpsc::Receiver<BackendRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockBackend { sender }), receiver)
}

/// Helper to verify that the next message is a listing request
pub async fn expect_list(receiver: &mut mpsc::Receiver<BackendRequest>) -> Option<(usize, Response<Value>)> {
    match receiver.recv().await {
        Some(BackendRequest::ListVendorProducts { limit, respond_to }) => Some((limit, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a base product fetch
pub async fn expect_fetch(receiver: &mut mpsc::Receiver<BackendRequest>) -> Option<(u64, Response<Value>)> {
    match receiver.recv().await {
        Some(BackendRequest::FetchBaseProduct { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a creation request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<BackendRequest>,
) -> Option<(VendorProductCreate, Response<Value>)> {
    match receiver.recv().await {
        Some(BackendRequest::CreateVendorProduct { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that no request is waiting
pub async fn expect_idle(receiver: &mut mpsc::Receiver<BackendRequest>) {
    tokio::task::yield_now().await;
    if let Ok(request) = receiver.try_recv() {
        panic!("Unexpected request: {:?}", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_backend() {
        let (backend, mut receiver) = create_mock_backend(10);

        let fetch_task = tokio::spawn(async move { backend.fetch_base_product(4).await });

        let (id, responder) = expect_fetch(&mut receiver).await.expect("Expected Fetch request");
        assert_eq!(id, 4);
        responder.send(Ok(json!({ "id": 4 }))).unwrap();

        let result = fetch_task.await.unwrap();
        assert_eq!(result, Ok(json!({ "id": 4 })));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_transport_error() {
        let (backend, mut receiver) = create_mock_backend(10);

        let list_task = tokio::spawn(async move { backend.list_vendor_products(5).await });

        let (limit, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(limit, 5);
        drop(responder);

        let result = list_task.await.unwrap();
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
