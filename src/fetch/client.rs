use async_trait::async_trait;
use reqwest::{Request, Response};

/// The single seam between the fetchers and the network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
