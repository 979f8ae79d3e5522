//! Integration tests for the per-resource endpoints.
//!
//! Every endpoint is exercised against a mock server for each known API
//! version, checking method, path, parameters, and the returned value.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use stripe_api::{ApiVersion, BaseUrl, ObjectKind, Params, SecretKey, StripeClient, StripeConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_AUTH: &str = "Basic c2VjcmV0X2tleTo=";

struct Harness {
    server: MockServer,
    client: StripeClient,
    version: ApiVersion,
}

impl Harness {
    async fn start(version: ApiVersion) -> Self {
        let server = MockServer::start().await;
        let config = StripeConfig::builder()
            .secret_key(SecretKey::new("secret_key").unwrap())
            .api_version(version.clone())
            .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
            .build()
            .unwrap();
        let client = StripeClient::new(&config);
        Self {
            server,
            client,
            version,
        }
    }

    /// Mounts a mock expecting exactly one authenticated, versioned call.
    async fn expect(&self, verb: &str, route: &str, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("authorization", BASIC_AUTH))
            .and(header("stripe-version", self.version.as_str()))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    async fn sent_params(&self) -> BTreeMap<String, String> {
        let requests = self.server.received_requests().await.unwrap();
        let request = requests.last().expect("no request received");
        request.url.query_pairs().into_owned().collect()
    }
}

fn params(value: Value) -> Params {
    value.as_object().cloned().unwrap()
}

fn pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn list_of(url: &str, item: &Value) -> Value {
    json!({"object": "list", "url": url, "has_more": false, "data": [item]})
}

fn charge() -> Value {
    json!({
        "id": "ch_aabbcc",
        "object": "charge",
        "amount": 103,
        "amount_refunded": 0,
        "captured": true,
        "currency": "usd",
        "metadata": {},
        "paid": true,
        "refunded": false,
        "status": "succeeded"
    })
}

fn customer() -> Value {
    json!({
        "id": "cus_aabbcc",
        "object": "customer",
        "email": "jenny.rosen@example.com",
        "metadata": {},
        "sources": {
            "object": "list",
            "data": [],
            "has_more": false,
            "total_count": 0,
            "url": "/v1/customers/cus_aabbcc/sources"
        }
    })
}

fn card() -> Value {
    json!({
        "id": "card_aabbcc",
        "object": "card",
        "brand": "Visa",
        "customer": "cus_aabbcc",
        "exp_month": 8,
        "exp_year": 2030,
        "last4": "4242",
        "metadata": {}
    })
}

fn refund() -> Value {
    json!({
        "id": "re_aabbcc",
        "object": "refund",
        "amount": 1293,
        "charge": "ch_aabbcc",
        "currency": "usd",
        "metadata": {},
        "status": "succeeded"
    })
}

fn source() -> Value {
    json!({
        "id": "src_aabbcc",
        "object": "source",
        "currency": "usd",
        "flow": "receiver",
        "owner": {"email": "jenny.rosen@example.com", "name": null},
        "status": "pending",
        "type": "ach_credit_transfer",
        "usage": "reusable"
    })
}

// ============================================================================
// Charges
// ============================================================================

#[tokio::test]
async fn test_create_charge() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/charges", charge()).await;

        let result = h
            .client
            .create_charge(103, "usd", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, charge());
        assert_eq!(ObjectKind::of(&result), Some(ObjectKind::Charge));
        assert_eq!(
            h.sent_params().await,
            pairs(&[("amount", "103"), ("currency", "usd"), ("k", "1"), ("j", "2")])
        );
    }
}

#[tokio::test]
async fn test_create_charge_flattens_metadata_and_booleans() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/charges", charge()).await;

        h.client
            .create_charge(
                103,
                "usd",
                params(json!({
                    "k": "1",
                    "j": 2,
                    "metadata": {"md1": "hi", "md2": "other"},
                    "tf": true
                })),
            )
            .await
            .unwrap();

        assert_eq!(
            h.sent_params().await,
            pairs(&[
                ("amount", "103"),
                ("currency", "usd"),
                ("k", "1"),
                ("j", "2"),
                ("metadata[md1]", "hi"),
                ("metadata[md2]", "other"),
                ("tf", "true"),
            ])
        );
    }
}

#[tokio::test]
async fn test_retrieve_charge() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/charges/ch_aabbcc", charge()).await;

        let result = h.client.retrieve_charge("ch_aabbcc").await.unwrap();

        assert_eq!(result, charge());
        assert!(h.sent_params().await.is_empty());
    }
}

#[tokio::test]
async fn test_update_charge() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/charges/ch_aabbcc", charge()).await;

        let result = h
            .client
            .update_charge("ch_aabbcc", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, charge());
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

#[tokio::test]
async fn test_capture_charge() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/charges/ch_aabbcc/capture", charge())
            .await;

        let result = h
            .client
            .capture_charge("ch_aabbcc", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, charge());
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

#[tokio::test]
async fn test_list_charges() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/charges", list_of("/v1/charges", &charge()))
            .await;

        let result = h
            .client
            .list_charges(params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, json!([charge()]));
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_create_customer() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/customers", customer()).await;

        let result = h
            .client
            .create_customer(params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        // Nested list envelopes inside an object are left alone
        assert_eq!(result, customer());
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

#[tokio::test]
async fn test_retrieve_customer() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/customers/cus_aabbcc", customer()).await;

        let result = h.client.retrieve_customer("cus_aabbcc").await.unwrap();

        assert_eq!(result, customer());
        assert!(h.sent_params().await.is_empty());
    }
}

#[tokio::test]
async fn test_update_customer() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/customers/cus_aabbcc", customer()).await;

        let result = h
            .client
            .update_customer("cus_aabbcc", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, customer());
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

#[tokio::test]
async fn test_delete_customer() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect(
            "DELETE",
            "/v1/customers/cus_aabbcc",
            json!({"deleted": true, "id": "cus_aabbcc"}),
        )
        .await;

        h.client.delete_customer("cus_aabbcc").await.unwrap();
        assert!(h.sent_params().await.is_empty());
    }
}

#[tokio::test]
async fn test_list_customers() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/customers", list_of("/v1/customers", &customer()))
            .await;

        let result = h
            .client
            .list_customers(params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, json!([customer()]));
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

// ============================================================================
// Cards
// ============================================================================

#[tokio::test]
async fn test_create_card_from_token() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/customers/cus_aabbcc/sources", card())
            .await;

        let result = h
            .client
            .create_card("cus_aabbcc", json!("tok_visa"), None)
            .await
            .unwrap();

        assert_eq!(result, card());
        assert_eq!(h.sent_params().await, pairs(&[("source", "tok_visa")]));
    }
}

#[tokio::test]
async fn test_create_card_from_details_with_metadata() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/customers/cus_aabbcc/sources", card())
            .await;

        h.client
            .create_card(
                "cus_aabbcc",
                json!({"object": "card", "number": "4242424242424242", "exp_month": 8}),
                Some(params(json!({"k": "1"}))),
            )
            .await
            .unwrap();

        assert_eq!(
            h.sent_params().await,
            pairs(&[
                ("source[object]", "card"),
                ("source[number]", "4242424242424242"),
                ("source[exp_month]", "8"),
                ("metadata[k]", "1"),
            ])
        );
    }
}

#[tokio::test]
async fn test_update_card() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/customers/cus_aabbcc/sources/card_aabbcc", card())
            .await;

        let result = h
            .client
            .update_card("cus_aabbcc", "card_aabbcc", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, card());
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

#[tokio::test]
async fn test_delete_card() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect(
            "DELETE",
            "/v1/customers/cus_aabbcc/sources/card_aabbcc",
            json!({"deleted": true, "id": "card_aabbcc"}),
        )
        .await;

        h.client
            .delete_card("cus_aabbcc", "card_aabbcc")
            .await
            .unwrap();
    }
}

// ============================================================================
// Refunds
// ============================================================================

#[tokio::test]
async fn test_create_refund() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/refunds", refund()).await;

        let result = h
            .client
            .create_refund("ch_aabbcc", params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, refund());
        assert_eq!(
            h.sent_params().await,
            pairs(&[("charge", "ch_aabbcc"), ("k", "1"), ("j", "2")])
        );
    }
}

#[tokio::test]
async fn test_retrieve_refund() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/refunds/re_aabbcc", refund()).await;

        let result = h.client.retrieve_refund("re_aabbcc").await.unwrap();

        assert_eq!(result, refund());
        assert!(h.sent_params().await.is_empty());
    }
}

#[tokio::test]
async fn test_update_refund() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/refunds/re_aabbcc", refund()).await;

        let result = h
            .client
            .update_refund("re_aabbcc", params(json!({"k": "1", "gone": null})))
            .await
            .unwrap();

        assert_eq!(result, refund());
        assert_eq!(
            h.sent_params().await,
            pairs(&[("metadata[k]", "1"), ("metadata[gone]", "")])
        );
    }
}

#[tokio::test]
async fn test_list_refunds() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/refunds", list_of("/v1/refunds", &refund()))
            .await;

        let result = h
            .client
            .list_refunds(params(json!({"k": "1", "j": 2})))
            .await
            .unwrap();

        assert_eq!(result, json!([refund()]));
        assert_eq!(h.sent_params().await, pairs(&[("k", "1"), ("j", "2")]));
    }
}

// ============================================================================
// Sources
// ============================================================================

#[tokio::test]
async fn test_create_source() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("POST", "/v1/sources", source()).await;

        let result = h
            .client
            .create_source(params(json!({
                "type": "ach_credit_transfer",
                "currency": "usd",
                "owner": {"email": "jenny.rosen@example.com"}
            })))
            .await
            .unwrap();

        assert_eq!(result, source());
        assert_eq!(
            h.sent_params().await,
            pairs(&[
                ("type", "ach_credit_transfer"),
                ("currency", "usd"),
                ("owner[email]", "jenny.rosen@example.com"),
            ])
        );
    }
}

#[tokio::test]
async fn test_retrieve_source() {
    for version in ApiVersion::known_versions() {
        let h = Harness::start(version).await;
        h.expect("GET", "/v1/sources/src_aabbcc", source()).await;

        let result = h.client.retrieve_source("src_aabbcc").await.unwrap();

        assert_eq!(result, source());
        assert_eq!(ObjectKind::of(&result), Some(ObjectKind::Source));
    }
}

// ============================================================================
// Paths
// ============================================================================

#[tokio::test]
async fn test_ids_are_percent_encoded_in_paths() {
    let h = Harness::start(ApiVersion::default()).await;
    Mock::given(method("GET"))
        .and(path("/v1/charges/ch%2Fodd%20id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge()))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client.retrieve_charge("ch/odd id").await.unwrap();
}
