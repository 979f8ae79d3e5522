//! Source endpoints.

use serde_json::Value;

use crate::clients::{resource_path, HttpError, Params, StripeClient};

impl StripeClient {
    /// Creates a new source.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_source(&self, params: Params) -> Result<Value, HttpError> {
        self.post(&resource_path("sources", &[]), params).await
    }

    /// Retrieves a source by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn retrieve_source(&self, source_id: &str) -> Result<Value, HttpError> {
        self.get(&resource_path("sources", &[source_id]), Params::new())
            .await
    }
}
