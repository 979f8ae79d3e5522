//! Charge endpoints.
//!
//! See <https://stripe.com/docs/api/charges>.

use serde_json::Value;

use crate::clients::{resource_path, HttpError, Params, StripeClient};

impl StripeClient {
    /// Creates a new charge.
    ///
    /// `amount` is in the currency's smallest unit (e.g. cents). Any other
    /// documented charge argument can be passed through `params`; `amount`
    /// and `currency` take precedence over entries of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = json!({"source": "tok_visa", "metadata": {"order_id": "6735"}})
    ///     .as_object()
    ///     .cloned()
    ///     .unwrap();
    /// let charge = client.create_charge(2000, "usd", params).await?;
    /// ```
    pub async fn create_charge(
        &self,
        amount: i64,
        currency: &str,
        mut params: Params,
    ) -> Result<Value, HttpError> {
        params.insert("amount".to_string(), amount.into());
        params.insert("currency".to_string(), currency.into());
        self.post(&resource_path("charges", &[]), params).await
    }

    /// Retrieves a charge by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn retrieve_charge(&self, charge_id: &str) -> Result<Value, HttpError> {
        self.get(&resource_path("charges", &[charge_id]), Params::new())
            .await
    }

    /// Updates a charge.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_charge(&self, charge_id: &str, params: Params) -> Result<Value, HttpError> {
        self.post(&resource_path("charges", &[charge_id]), params)
            .await
    }

    /// Captures a charge created with `capture=false`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn capture_charge(
        &self,
        charge_id: &str,
        params: Params,
    ) -> Result<Value, HttpError> {
        self.post(&resource_path("charges", &[charge_id, "capture"]), params)
            .await
    }

    /// Lists charges matching `params`, returned as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_charges(&self, params: Params) -> Result<Value, HttpError> {
        self.get(&resource_path("charges", &[]), params).await
    }
}
