//! Transport seam for snapshot retrieval.

use async_trait::async_trait;

use crate::client::FetchError;

/// Raw response from the transport: status plus body bytes.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The external retrieval capability: fetch raw bytes for a URL, surfacing
/// the status code. Implemented over Spin HTTP in production and by stubs in
/// tests.
#[async_trait(?Send)]
pub trait SnapshotTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}

/// Spin HTTP transport. Caching is disabled on every request.
pub struct SpinTransport;

#[async_trait(?Send)]
impl SnapshotTransport for SpinTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let req = spin_sdk::http::Request::builder()
            .method(spin_sdk::http::Method::Get)
            .uri(url)
            .header("cache-control", "no-store")
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(TransportResponse {
            status: *resp.status(),
            body: resp.body().to_vec(),
        })
    }
}
