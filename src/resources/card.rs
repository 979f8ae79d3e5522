//! Card endpoints.
//!
//! Cards are attached to a customer and addressed through the customer's
//! `sources` collection.

use serde_json::Value;

use crate::clients::{resource_path, HttpError, Params, StripeClient};

impl StripeClient {
    /// Attaches a new card to a customer.
    ///
    /// `source` is either a token id (`"tok_visa"`) or a mapping of card
    /// details, which is sent as `source[number]`, `source[exp_month]`, ...
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let card = client
    ///     .create_card("cus_123", json!("tok_visa"), None)
    ///     .await?;
    /// ```
    pub async fn create_card(
        &self,
        customer_id: &str,
        source: Value,
        metadata: Option<Params>,
    ) -> Result<Value, HttpError> {
        let mut params = Params::new();
        params.insert("source".to_string(), source);
        if let Some(metadata) = metadata {
            params.insert("metadata".to_string(), Value::Object(metadata));
        }

        self.post(&resource_path("customers", &[customer_id, "sources"]), params)
            .await
    }

    /// Updates a customer's card.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_card(
        &self,
        customer_id: &str,
        card_id: &str,
        params: Params,
    ) -> Result<Value, HttpError> {
        self.post(
            &resource_path("customers", &[customer_id, "sources", card_id]),
            params,
        )
        .await
    }

    /// Removes a card from a customer.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Deletion`] if Stripe does not confirm the
    /// deletion, or any other [`HttpError`] if the request fails.
    pub async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<(), HttpError> {
        self.delete(&resource_path("customers", &[customer_id, "sources", card_id]))
            .await
    }
}
