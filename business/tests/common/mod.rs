//! Shared setup for controller tests against a mock auth service.

#![allow(dead_code)]

use std::sync::Arc;

use authwindow_business::{BusinessConfig, Field, FormConfig, FormController, MemorySink, Mode};
use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// A mock server plus a controller pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub sink: Arc<MemorySink>,
    pub controller: FormController,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_form_config(FormConfig::default()).await
    }

    pub async fn with_form_config(form: FormConfig) -> Self {
        let mock_server = MockServer::start().await;
        let sink = Arc::new(MemorySink::new());
        let controller = FormController::new(BusinessConfig::new(mock_server.uri()), sink.clone())
            .with_form_config(form);

        Self {
            mock_server,
            sink,
            controller,
        }
    }

    pub fn fill_login(&self, email: &str, password: &str) {
        self.controller.set_mode(Mode::Login);
        self.controller
            .set_field(Field::Email, email)
            .expect("email is a login field");
        self.controller
            .set_field(Field::Password, password)
            .expect("password is a login field");
    }

    pub fn fill_register(&self, username: &str, email: &str, password: &str, confirm: &str) {
        self.controller.set_mode(Mode::Register);
        for (field, value) in [
            (Field::Username, username),
            (Field::Email, email),
            (Field::Password, password),
            (Field::ConfirmPassword, confirm),
        ] {
            self.controller
                .set_field(field, value)
                .expect("register field");
        }
    }

    /// Answers any POST to `endpoint` with `status` and a JSON body.
    pub async fn mock_json(&self, endpoint: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Answers any POST to `endpoint` with `status` and a raw text body.
    pub async fn mock_text(&self, endpoint: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Fails the test on drop if anything is posted to `endpoint`.
    pub async fn expect_no_request(&self, endpoint: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}
