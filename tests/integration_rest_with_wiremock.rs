//! Integration tests for the reqwest transport using wiremock
//!
//! These exercise the full path from resource call to wire: URL resolution
//! against the versioned base URL, Basic authentication, header state, and
//! error mapping.

mod common;

use assert_matches::assert_matches;
use elorest::{
    Client, ContactSubscription, Creatable, CustomObjectData, Depth, Error, FieldValue,
    SearchOptions, Searchable,
};
use http::{HeaderMap, HeaderValue};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_requests_carry_basic_credentials_after_authenticate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contacts"))
        .and(header("authorization", common::expected_basic_auth().as_str()))
        .and(query_param("search", ""))
        .and(query_param("count", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"id": "1", "emailAddress": "first@example.com"},
                {"id": "2", "emailAddress": "second@example.com", "firstName": "Two"}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let contacts = client
        .contacts()
        .search("", &SearchOptions::default())
        .await
        .expect("search failed");

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].email_address, "first@example.com");
    assert_eq!(contacts[1].first_name.as_deref(), Some("Two"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_contact_search_merges_term_and_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contacts"))
        .and(query_param("search", "name=acme*"))
        .and(query_param("page", "2"))
        .and(query_param("count", "25"))
        .and(query_param("depth", "complete"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"elements": [], "total": 0})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = SearchOptions {
        page: Some(2),
        count: Some(25),
        depth: Some(Depth::Complete),
        order_by: None,
    };

    let client = common::authed_client_for(&mock_server);
    let contacts = client
        .contacts()
        .search("name=acme*", &options)
        .await
        .unwrap();
    assert!(contacts.is_empty());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_custom_object_search_hits_empty_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/customObject/"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [{"fieldValues": [{"id": "100", "value": "x"}]}],
            "total": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let records = client
        .custom_objects()
        .search("", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field_values[0].value.as_deref(), Some("x"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_custom_object_create_posts_serialized_record() {
    let mock_server = MockServer::start().await;

    let expected_body = json!({"fieldValues": [{"id": "100", "value": "a value"}]});

    Mock::given(method("POST"))
        .and(path("/1.0/data/customObject/55"))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "9", "fieldValues": expected_body["fieldValues"]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let mut api = client.custom_objects();
    api.identify("55");

    let record = CustomObjectData::new(vec![FieldValue::new("100", "a value")]);
    let response = api.create(&record).await.unwrap();
    assert_eq!(response["id"], "9");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_subscription_update_puts_to_contact_scoped_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/1.0/data/contact/12/email/subscription/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7",
            "isSubscribed": false,
            "emailGroup": {"id": "7", "name": "Newsletter"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let mut api = client.contact_subscriptions();
    api.identify("12");

    let update = ContactSubscription {
        is_subscribed: false,
        ..ContactSubscription::default()
    };
    let result = api.update("7", &update).await.unwrap();

    assert!(!result.is_subscribed);
    assert_eq!(result.email_group.unwrap().name.as_deref(), Some("Newsletter"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_contact_show_update_remove() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contact/42"))
        .and(query_param("depth", "partial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "emailAddress": "shown@example.com"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/1.0/data/contact/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "emailAddress": "updated@example.com"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/1.0/data/contact/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let contacts = client.contacts();

    let shown = contacts.show("42", Some(Depth::Partial)).await.unwrap();
    assert_eq!(shown.email_address, "shown@example.com");

    let mut edited = shown.clone();
    edited.email_address = "updated@example.com".into();
    let updated = contacts.update("42", &edited).await.unwrap();
    assert_eq!(updated.email_address, "updated@example.com");

    contacts.remove("42").await.unwrap();
}

#[tokio::test]
async fn test_custom_headers_are_observable_on_next_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/assets/customObject/3"))
        .and(header("x-http-method-override", "SEARCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3",
            "name": "Orders"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);

    let mut headers = HeaderMap::new();
    headers.insert("x-http-method-override", HeaderValue::from_static("SEARCH"));
    client.set_headers(headers).unwrap();

    let meta = client.custom_object_meta().show("3").await.unwrap();
    assert_eq!(meta.name, "Orders");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contacts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Not authenticated."})),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client
        .contacts()
        .search("", &SearchOptions::default())
        .await
        .unwrap_err();

    assert_matches!(err, Error::Authentication(msg) if msg == "Not authenticated.");
}

#[tokio::test]
async fn test_not_found_and_server_errors_propagate_unwrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contact/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string(""))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contact/500"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);

    let missing = client.contacts().show("404", None).await.unwrap_err();
    assert_matches!(missing, Error::NotFound(_));

    let broken = client.contacts().show("500", None).await.unwrap_err();
    assert_matches!(
        broken,
        Error::Api { status: 500, message } if message == "upstream exploded"
    );
}

#[tokio::test]
async fn test_custom_api_version_changes_request_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.0/data/contacts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"elements": [], "total": 0})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_options(
        elorest::ClientOptions::builder()
            .base_url(mock_server.uri())
            .version("2.0")
            .build(),
    );
    client
        .authenticate(common::TEST_SITE, common::TEST_LOGIN, common::TEST_PASSWORD)
        .unwrap();

    client
        .contacts()
        .search("", &SearchOptions::default())
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_malformed_json_body_is_a_response_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/data/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = common::authed_client_for(&mock_server);
    let err = client
        .contacts()
        .search("", &SearchOptions::default())
        .await
        .unwrap_err();

    assert_matches!(err, Error::ResponseValidation(_));
}
