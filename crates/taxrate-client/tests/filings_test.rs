//! Contract tests for the filing calendar and filing request endpoints.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taxrate_client::{Credentials, TaxrateClient, TaxrateConfig};
use taxrate_core::{BagScalar, ModelInstance, WireValue};

async fn test_client(mock_server: &MockServer) -> TaxrateClient {
    let config = TaxrateConfig::local_mock(
        &mock_server.uri(),
        Credentials::basic("2001234567", "test-key"),
    )
    .unwrap();
    TaxrateClient::new(config).unwrap()
}

#[tokio::test]
async fn list_calendars_decodes_frequency_symbols() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies/42/filingcalendars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "value": [{
                "id": 301,
                "companyId": 42,
                "returnName": "WA Combined Excise Tax Return",
                "filingFrequencyId": "Quarterly",
                "months": 4,
                "effectiveDate": "2025-01-01T00:00:00+00:00",
                "country": "US",
                "region": "WA",
                "taxFormCode": "WACombined"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let calendars = client.filings().list_calendars(42).await.unwrap();

    let value = calendars.sequence("value").unwrap();
    let WireValue::Model(calendar) = &value[0] else {
        panic!("expected a calendar model");
    };
    assert_eq!(
        calendar.enumeration("filingFrequencyId").map(|f| f.as_wire()),
        Some("Quarterly")
    );
    assert_eq!(
        calendar.string("returnName"),
        Some("WA Combined Excise Tax Return")
    );
}

#[tokio::test]
async fn create_request_carries_old_and_new_value_bags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/companies/42/filingrequests"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 88,
            "companyId": 42,
            "filingRequestStatusId": "New",
            "data": {
                "companyReturnId": 301,
                "returnName": "WA Combined Excise Tax Return",
                "filingFrequencyId": "Monthly"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;

    let mut old_value = std::collections::BTreeMap::new();
    old_value.insert(
        "filingFrequencyId".to_string(),
        BagScalar::String("Quarterly".to_string()),
    );
    let mut new_value = std::collections::BTreeMap::new();
    new_value.insert(
        "filingFrequencyId".to_string(),
        BagScalar::String("Monthly".to_string()),
    );
    let edit = ModelInstance::new("FilingCalendarEditModel")
        .with("fieldName", "filingFrequencyId")
        .with("oldValue", WireValue::Bag(old_value))
        .with("newValue", WireValue::Bag(new_value));
    let data = ModelInstance::new("FilingRequestDataModel")
        .with("companyReturnId", 301i64)
        .with("returnName", "WA Combined Excise Tax Return")
        .with("edits", vec![WireValue::Model(edit)]);
    let request = ModelInstance::new("FilingRequestModel")
        .with("companyId", 42i64)
        .with("data", data);

    let created = client.filings().create_request(42, request).await.unwrap();
    assert_eq!(created.integer("id"), Some(88));
    assert_eq!(
        created
            .enumeration("filingRequestStatusId")
            .map(|s| s.as_wire()),
        Some("New")
    );

    let requests = mock_server.received_requests().await.unwrap();
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    assert!(body.contains("\"oldValue\":{\"filingFrequencyId\":\"Quarterly\"}"));
    assert!(body.contains("\"newValue\":{\"filingFrequencyId\":\"Monthly\"}"));
}

#[tokio::test]
async fn get_calendar_and_request_interpolate_both_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies/42/filingcalendars/301"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 301,
            "returnName": "WA Combined Excise Tax Return"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/companies/42/filingrequests/88"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 88,
            "companyId": 42,
            "filingRequestStatusId": "Pending"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let calendar = client.filings().get_calendar(42, 301).await.unwrap();
    assert_eq!(calendar.integer("id"), Some(301));
    let request = client.filings().get_request(42, 88).await.unwrap();
    assert_eq!(
        request
            .enumeration("filingRequestStatusId")
            .map(|s| s.as_wire()),
        Some("Pending")
    );
}
