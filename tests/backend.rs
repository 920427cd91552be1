//! Integration tests for the HTTP lead backend client.
//!
//! Uses wiremock to stand in for the `/api/leads` endpoints.

use crystalclean_site::domain::lead::{LeadDraft, LeadField, LeadId};
use crystalclean_site::repository::http::HttpLeadRepository;
use crystalclean_site::repository::{LeadReader, LeadWriter, RepositoryError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer) -> HttpLeadRepository {
    HttpLeadRepository::new(&server.uri()).expect("failed to create repository")
}

#[tokio::test]
async fn create_lead_posts_coerced_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/leads"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "email": "jane@email.com",
            "phone": "(555) 555-1234",
            "address": "123 Main St",
            "city": "",
            "service_type": "Deep Cleaning",
            "bedrooms": null,
            "bathrooms": 3,
            "preferred_date": "",
            "message": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let draft = LeadDraft::default()
        .with_field(LeadField::Name, "Jane Doe")
        .and_then(|d| d.with_field(LeadField::Email, "jane@email.com"))
        .and_then(|d| d.with_field(LeadField::Phone, "(555) 555-1234"))
        .and_then(|d| d.with_field(LeadField::Address, "123 Main St"))
        .and_then(|d| d.with_field(LeadField::ServiceType, "Deep Cleaning"))
        .and_then(|d| d.with_field(LeadField::Bathrooms, "3"))
        .unwrap();

    repository(&server)
        .create_lead(&draft.to_payload())
        .await
        .expect("create failed");
}

#[tokio::test]
async fn create_lead_maps_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/leads"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let result = repository(&server)
        .create_lead(&LeadDraft::default().to_payload())
        .await;

    assert!(matches!(result, Err(RepositoryError::Status(422))));
}

#[tokio::test]
async fn create_lead_reports_unreachable_backend() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let repo = HttpLeadRepository::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let result = repo.create_lead(&LeadDraft::default().to_payload()).await;

    match result {
        Err(RepositoryError::Transport(message)) => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_recent_leads_requests_limit_and_parses_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leads"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": 9, "name": "Ann", "service_type": "Office Cleaning", "city": "Reno"},
                {"id": "x-1", "name": "Bo", "service_type": "Carpet Cleaning", "message": "Stairs too"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let leads = repository(&server).list_recent_leads(5).await.unwrap();

    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id, LeadId::Number(9));
    assert_eq!(leads[1].message.as_deref(), Some("Stairs too"));
}

#[tokio::test]
async fn list_recent_leads_without_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;

    let leads = repository(&server).list_recent_leads(5).await.unwrap();

    assert!(leads.is_empty());
}

#[tokio::test]
async fn list_recent_leads_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leads"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = repository(&server).list_recent_leads(5).await;

    assert!(matches!(result, Err(RepositoryError::Decode(_))));
}

#[tokio::test]
async fn list_recent_leads_maps_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/leads"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = repository(&server).list_recent_leads(5).await;

    assert!(matches!(result, Err(RepositoryError::Status(503))));
}
