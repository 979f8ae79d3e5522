//! Customer endpoints.

use serde_json::Value;

use crate::clients::{resource_path, HttpError, Params, StripeClient};

impl StripeClient {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_customer(&self, params: Params) -> Result<Value, HttpError> {
        self.post(&resource_path("customers", &[]), params).await
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn retrieve_customer(&self, customer_id: &str) -> Result<Value, HttpError> {
        self.get(&resource_path("customers", &[customer_id]), Params::new())
            .await
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        params: Params,
    ) -> Result<Value, HttpError> {
        self.post(&resource_path("customers", &[customer_id]), params)
            .await
    }

    /// Permanently deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Deletion`] if Stripe does not confirm the
    /// deletion, or any other [`HttpError`] if the request fails.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<(), HttpError> {
        self.delete(&resource_path("customers", &[customer_id]))
            .await
    }

    /// Lists customers matching `params`, returned as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_customers(&self, params: Params) -> Result<Value, HttpError> {
        self.get(&resource_path("customers", &[]), params).await
    }
}
