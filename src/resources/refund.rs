//! Refund endpoints.

use serde_json::Value;

use crate::clients::{resource_path, HttpError, Params, StripeClient};

impl StripeClient {
    /// Refunds all or part of a charge.
    ///
    /// Pass `amount` in `params` for a partial refund.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_refund(
        &self,
        charge_id: &str,
        params: Params,
    ) -> Result<Value, HttpError> {
        let mut body = Params::new();
        body.insert("charge".to_string(), charge_id.into());
        body.extend(params);
        self.post(&resource_path("refunds", &[]), body).await
    }

    /// Retrieves a refund by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn retrieve_refund(&self, refund_id: &str) -> Result<Value, HttpError> {
        self.get(&resource_path("refunds", &[refund_id]), Params::new())
            .await
    }

    /// Updates the metadata of a refund.
    ///
    /// A metadata key mapped to `null` is sent empty, which removes it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_refund(
        &self,
        refund_id: &str,
        metadata: Params,
    ) -> Result<Value, HttpError> {
        let mut params = Params::new();
        params.insert("metadata".to_string(), Value::Object(metadata));
        self.post(&resource_path("refunds", &[refund_id]), params)
            .await
    }

    /// Lists refunds matching `params`, returned as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_refunds(&self, params: Params) -> Result<Value, HttpError> {
        self.get(&resource_path("refunds", &[]), params).await
    }
}
