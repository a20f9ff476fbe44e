//! Contact form submissions against a mock record store.

use std::time::Duration;

use folio_engine::{App, ContactField, FolioConfig, FormStatus, RawInput, SUCCESS_CLOSE_DELAY};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    DESKTOP, INSERT_PATH, TEST_KEY, fill_contact_form, mount_insert, open_contact_form,
    store_config, type_text, wait_for_submission,
};

fn app_with_store(server: &MockServer) -> App {
    App::new(&store_config(server), DESKTOP.0, DESKTOP.1)
}

#[tokio::test]
async fn accepted_submission_clears_the_form_and_closes_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INSERT_PATH))
        .and(header("apikey", TEST_KEY))
        .and(header("Authorization", format!("Bearer {TEST_KEY}").as_str()))
        .and(header("Prefer", "return=minimal"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "field": "Engines",
            "phone": "555 0100",
            "email": "ada@example.org",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_with_store(&server);
    assert!(app.store_configured());
    open_contact_form(&mut app);
    fill_contact_form(&mut app);

    app.submit_contact();
    assert_eq!(app.contact().status(), FormStatus::Submitting);
    wait_for_submission(&mut app).await;

    assert_eq!(app.contact().status(), FormStatus::Sent);
    assert!(app.contact().draft().is_blank());

    app.advance(SUCCESS_CLOSE_DELAY - Duration::from_millis(1));
    assert!(app.contact().is_open());
    app.advance(Duration::from_millis(1));
    assert_eq!(app.contact().status(), FormStatus::Closed);
}

#[tokio::test]
async fn rejected_submission_shows_the_store_message() {
    let server = MockServer::start().await;
    mount_insert(
        &server,
        409,
        r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
    )
    .await;

    let mut app = app_with_store(&server);
    open_contact_form(&mut app);
    fill_contact_form(&mut app);
    app.submit_contact();
    wait_for_submission(&mut app).await;

    match app.contact().status() {
        FormStatus::Editing { error: Some(error) } => {
            assert!(error.contains("duplicate key"), "unexpected error: {error}");
        }
        other => panic!("expected an inline error, got {other:?}"),
    }
    assert_eq!(app.contact().draft().name, "Ada Lovelace");
    assert_eq!(app.contact().draft().email, "ada@example.org");
}

#[tokio::test]
async fn failed_submission_can_be_retried_by_hand() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INSERT_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_insert(&server, 201, "").await;

    let mut app = app_with_store(&server);
    open_contact_form(&mut app);
    fill_contact_form(&mut app);

    app.submit_contact();
    wait_for_submission(&mut app).await;
    assert!(matches!(
        app.contact().status(),
        FormStatus::Editing { error: Some(_) }
    ));

    app.submit_contact();
    wait_for_submission(&mut app).await;
    assert_eq!(app.contact().status(), FormStatus::Sent);

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_store() {
    let server = MockServer::start().await;
    mount_insert(&server, 201, "").await;

    let mut app = app_with_store(&server);
    open_contact_form(&mut app);
    type_text(&mut app, "Ada Lovelace");
    app.submit_contact();

    assert!(matches!(
        app.contact().status(),
        FormStatus::Editing { error: Some(_) }
    ));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn unconfigured_store_reports_inline() {
    let config = FolioConfig {
        store: Some(folio_engine::StoreSection {
            url: Some("https://placeholder.supabase.co".to_string()),
            anon_key: Some("placeholder".to_string()),
            table: None,
        }),
        ..FolioConfig::default()
    };
    let mut app = App::new(&config, DESKTOP.0, DESKTOP.1);
    assert!(!app.store_configured());

    open_contact_form(&mut app);
    fill_contact_form(&mut app);
    app.submit_contact();

    match app.contact().status() {
        FormStatus::Editing { error: Some(error) } => assert!(error.contains("not configured")),
        other => panic!("expected an inline error, got {other:?}"),
    }
}

#[test]
fn scroll_gesture_closes_the_form_and_keeps_the_draft() {
    let mut app = App::new(&FolioConfig::default(), DESKTOP.0, DESKTOP.1);
    open_contact_form(&mut app);
    type_text(&mut app, "Grace");
    app.contact_mut().focus_next();
    assert_eq!(app.contact().focus(), ContactField::Field);

    let last = app.deck().last_section();
    app.handle_input(RawInput::Wheel { delta_y: -48.0 });
    assert!(!app.contact().is_open());
    assert_eq!(app.active_section(), last - 1);

    app.navigate_to_section(last);
    crate::common::settle(&mut app);
    app.open_contact();
    assert_eq!(app.contact().draft().name, "Grace");
    assert_eq!(app.contact().focus(), ContactField::Name);
}

#[test]
fn form_only_opens_on_the_contact_section() {
    let mut app = App::new(&FolioConfig::default(), DESKTOP.0, DESKTOP.1);
    app.open_contact();
    assert!(!app.contact().is_open());
    assert!(!app.can_open_contact());
}
