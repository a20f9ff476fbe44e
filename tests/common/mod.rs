//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use folio_engine::{App, AppConfig, FolioConfig, StoreSection};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DESKTOP: (u16, u16) = (120, 30);
pub const MOBILE: (u16, u16) = (60, 30);
pub const TEST_KEY: &str = "anon-test-key";
pub const INSERT_PATH: &str = "/rest/v1/contact_requests";

pub fn desktop_app() -> App {
    App::new(&FolioConfig::default(), DESKTOP.0, DESKTOP.1)
}

pub fn mobile_app() -> App {
    App::new(&FolioConfig::default(), MOBILE.0, MOBILE.1)
}

pub fn reduced_motion_config() -> FolioConfig {
    FolioConfig {
        app: Some(AppConfig {
            reduced_motion: true,
            ..AppConfig::default()
        }),
        ..FolioConfig::default()
    }
}

/// Config whose `[store]` section points at `server`.
pub fn store_config(server: &MockServer) -> FolioConfig {
    FolioConfig {
        store: Some(StoreSection {
            url: Some(server.uri()),
            anon_key: Some(TEST_KEY.to_string()),
            table: None,
        }),
        ..FolioConfig::default()
    }
}

/// Let the running slide animation finish.
pub fn settle(app: &mut App) {
    let transition = app.settings().transition;
    app.advance(transition);
}

/// Mount an insert endpoint answering every authenticated POST with `status`.
pub async fn mount_insert(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(INSERT_PATH))
        .and(header("apikey", TEST_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Poll the app until the in-flight submission resolves.
pub async fn wait_for_submission(app: &mut App) {
    for _ in 0..300 {
        app.advance(Duration::ZERO);
        if !app.contact().is_submitting() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("contact submission did not finish");
}

/// Type `text` into the focused contact field.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.contact_mut().insert_char(c);
    }
}

/// Walk to the contact section and open the form.
pub fn open_contact_form(app: &mut App) {
    let last = app.deck().last_section();
    app.navigate_to_section(last);
    settle(app);
    app.open_contact();
    assert!(app.contact().is_open(), "contact form should open");
}

/// Fill all four fields with a valid request.
pub fn fill_contact_form(app: &mut App) {
    for value in ["Ada Lovelace", "Engines", "555 0100", "ada@example.org"] {
        type_text(app, value);
        app.contact_mut().focus_next();
    }
}
