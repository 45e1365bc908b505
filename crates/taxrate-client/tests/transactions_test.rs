//! Contract tests for the transaction endpoints against a wiremock server.

use std::str::FromStr;

use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taxrate_client::{Credentials, TaxrateClient, TaxrateConfig};
use taxrate_core::{ModelInstance, WireValue};
use taxrate_models::{DocumentStatus, ErrorCode, VoidReasonCode};

async fn test_client(mock_server: &MockServer) -> TaxrateClient {
    let config = TaxrateConfig::local_mock(
        &mock_server.uri(),
        Credentials::basic("2001234567", "test-key"),
    )
    .unwrap();
    TaxrateClient::new(config).unwrap()
}

fn sample_create_model() -> ModelInstance {
    let line = ModelInstance::new("LineItemModel")
        .with("number", "1")
        .with("quantity", Decimal::from(2))
        .with("amount", Decimal::from_str("19.999999999").unwrap())
        .with("taxCode", "P0000000");
    let ship_to = ModelInstance::new("AddressInfo")
        .with("line1", "100 Ravine Lane NE")
        .with("city", "Bainbridge Island")
        .with("region", "WA")
        .with("postalCode", "98110")
        .with("country", "US");
    let mut addresses = std::collections::BTreeMap::new();
    addresses.insert("shipTo".to_string(), WireValue::Model(ship_to));

    ModelInstance::new("CreateTransactionModel")
        .with("code", "INV-2026-001")
        .with("companyCode", "DEFAULT")
        .with(
            "date",
            chrono::DateTime::parse_from_rfc3339("2026-03-15T00:00:00+00:00").unwrap(),
        )
        .with("customerCode", "CUST-7")
        .with("addresses", WireValue::Map(addresses))
        .with("lines", vec![WireValue::Model(line)])
}

// ── POST /api/v1/transactions/create ─────────────────────────────────

#[tokio::test]
async fn create_sends_sparse_camel_case_body_and_decodes_totals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/transactions/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 9001,
            "code": "INV-2026-001",
            "companyId": 42,
            "status": "Saved",
            "type": "SalesInvoice",
            "currencyCode": "USD",
            "totalAmount": 39.999999998,
            "totalTax": 3.9,
            "lines": [{
                "id": 1,
                "lineNumber": "1",
                "lineAmount": 39.999999998,
                "tax": 3.9,
                "details": [{
                    "jurisName": "WASHINGTON",
                    "jurisdictionType": "State",
                    "rate": 0.065,
                    "tax": 2.6
                }]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let transaction = client
        .transactions()
        .create(sample_create_model())
        .await
        .unwrap();

    assert_eq!(transaction.integer("id"), Some(9001));
    assert_eq!(
        transaction.enumeration("status").map(|s| s.as_wire()),
        Some("Saved")
    );
    // Decimals survive exactly, no float drift.
    assert_eq!(
        transaction.decimal("totalAmount"),
        Some(Decimal::from_str("39.999999998").unwrap())
    );
    let lines = transaction.sequence("lines").unwrap();
    let WireValue::Model(line) = &lines[0] else {
        panic!("expected a line model");
    };
    let details = line.sequence("details").unwrap();
    let WireValue::Model(detail) = &details[0] else {
        panic!("expected a detail model");
    };
    assert_eq!(
        detail.decimal("rate"),
        Some(Decimal::from_str("0.065").unwrap())
    );

    // Inspect what actually went over the wire.
    let requests = mock_server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    // The decimal literal is exact on the wire.
    assert!(body.contains("19.999999999"));
    // Absent nullable fields are omitted, not null.
    assert!(!body.contains("purchaseOrderNo"));
    assert!(!body.contains("null"));
    // Wire names are the camelCase contract.
    assert!(body.contains("\"customerCode\":\"CUST-7\""));
    assert!(body.contains("\"shipTo\""));
}

#[tokio::test]
async fn create_with_zero_amount_is_observably_different_from_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/transactions/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let mut model = sample_create_model();
    model.set("discount", Decimal::ZERO);
    client.transactions().create(model).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    assert!(body.contains("\"discount\":0"));
}

#[tokio::test]
async fn create_maps_validation_failure_with_field_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/transactions/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "code": "ValidationException",
                "message": "The transaction is invalid.",
                "details": [{
                    "field": "lines",
                    "description": "At least one line is required.",
                    "severity": "Error"
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let err = client
        .transactions()
        .create(sample_create_model())
        .await
        .unwrap_err();

    let descriptor = err.api_error().expect("expected an API error");
    assert_eq!(descriptor.code, ErrorCode::ValidationException);
    assert_eq!(descriptor.http_status, 400);
    assert_eq!(descriptor.details.len(), 1);
    assert_eq!(descriptor.details[0].field.as_deref(), Some("lines"));
}

// ── GET /api/v1/companies/{companyCode}/transactions/{transactionCode} ─

#[tokio::test]
async fn get_by_code_interpolates_path_and_forwards_include() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies/DEFAULT/transactions/INV-2026-001"))
        .and(query_param("$include", "Lines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9001,
            "code": "INV-2026-001",
            "status": "Committed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let transaction = client
        .transactions()
        .get_by_code("DEFAULT", "INV-2026-001", Some("Lines"))
        .await
        .unwrap();
    assert_eq!(
        transaction.enumeration("status").map(|s| s.as_wire()),
        Some(DocumentStatus::Committed.as_wire())
    );
}

#[tokio::test]
async fn get_by_code_tolerates_future_schema() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies/DEFAULT/transactions/T-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "code": "T-1",
            "status": "SomeFutureStatus",
            "brandNewField": {"deeply": ["nested", "stuff"]}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let transaction = client
        .transactions()
        .get_by_code("DEFAULT", "T-1", None)
        .await
        .unwrap();

    // Unknown key ignored, unknown enum symbol kept as sentinel.
    assert!(!transaction.is_set("brandNewField"));
    let status = transaction.enumeration("status").unwrap();
    assert!(!status.is_recognized());
    assert_eq!(status.as_wire(), "SomeFutureStatus");
}

// ── Commit and void ──────────────────────────────────────────────────

#[tokio::test]
async fn commit_posts_commit_true() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/companies/DEFAULT/transactions/INV-9/commit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "status": "Committed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let committed = client
        .transactions()
        .commit("DEFAULT", "INV-9")
        .await
        .unwrap();
    assert_eq!(
        committed.enumeration("status").map(|s| s.as_wire()),
        Some("Committed")
    );

    let requests = mock_server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    assert_eq!(body, r#"{"commit":true}"#);
}

#[tokio::test]
async fn void_posts_the_reason_code_symbol() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/companies/DEFAULT/transactions/INV-9/void"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "status": "Cancelled"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    client
        .transactions()
        .void("DEFAULT", "INV-9", VoidReasonCode::DocVoided)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    assert_eq!(body, r#"{"code":"DocVoided"}"#);
}

#[tokio::test]
async fn company_codes_with_reserved_characters_are_percent_encoded() {
    let mock_server = MockServer::start().await;

    // "A B#1" must stay one path segment, percent-encoded.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let transaction = client
        .transactions()
        .get_by_code("A B#1", "T-1", None)
        .await
        .unwrap();
    assert_eq!(transaction.integer("id"), Some(1));

    let requests = mock_server.received_requests().await.unwrap();
    let sent_path = requests[0].url.path();
    assert!(sent_path.contains("A%20B%231"), "path was {sent_path}");
    assert!(sent_path.ends_with("/transactions/T-1"));
}
