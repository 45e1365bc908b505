//! Contract tests for the company endpoints.

use wiremock::matchers::{method, path, query_param};
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
async fn get_returns_company_with_nested_locations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies/42"))
        .and(query_param("$include", "Locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "accountId": 2001234567i64,
            "companyCode": "DEFAULT",
            "name": "Acme Trading Co",
            "isActive": true,
            "locations": [{
                "id": 501,
                "companyId": 42,
                "locationCode": "MAIN",
                "addressTypeId": "Location",
                "addressCategoryId": "MainOffice",
                "line1": "100 Ravine Lane NE",
                "city": "Bainbridge Island",
                "region": "WA",
                "postalCode": "98110",
                "country": "US",
                "isDefault": true,
                "settings": {"storefront": true, "squareFootage": 1200}
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let company = client.companies().get(42, Some("Locations")).await.unwrap();

    assert_eq!(company.string("companyCode"), Some("DEFAULT"));
    assert_eq!(company.boolean("isActive"), Some(true));
    let locations = company.sequence("locations").unwrap();
    let WireValue::Model(location) = &locations[0] else {
        panic!("expected a location model");
    };
    assert_eq!(
        location.enumeration("addressCategoryId").map(|c| c.as_wire()),
        Some("MainOffice")
    );
    // The settings bag passes scalars through untyped.
    let settings = location.bag("settings").unwrap();
    assert_eq!(settings.get("storefront"), Some(&BagScalar::Bool(true)));
    assert!(matches!(
        settings.get("squareFootage"),
        Some(BagScalar::Number(_))
    ));
}

#[tokio::test]
async fn list_forwards_paging_parameters_and_omits_absent_ones() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/companies"))
        .and(query_param("$top", "10"))
        .and(query_param("$skip", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 0,
            "value": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    client
        .companies()
        .list(None, Some(10), Some(20))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("filter"));
}

#[tokio::test]
async fn initialize_creates_a_company_from_the_bootstrap_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/companies/initialize"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 43,
            "companyCode": "ACME2",
            "name": "Acme Two LLC",
            "isActive": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).await;
    let model = ModelInstance::new("CompanyInitializationModel")
        .with("name", "Acme Two LLC")
        .with("companyCode", "ACME2")
        .with("line1", "200 First Ave")
        .with("city", "Seattle")
        .with("region", "WA")
        .with("postalCode", "98101")
        .with("country", "US")
        .with("firstName", "Jo")
        .with("lastName", "Nakamura")
        .with("email", "jo@acme.example")
        .with("phoneNumber", "206-555-0100");
    let company = client.companies().initialize(model).await.unwrap();
    assert_eq!(company.integer("id"), Some(43));
    assert_eq!(company.string("companyCode"), Some("ACME2"));
}
