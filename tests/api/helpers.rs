//! tests/api/helpers.rs
use once_cell::sync::Lazy;
use portfolio_mail::configuration::{get_configuration, ProviderKind, Settings};
use portfolio_mail::outcome::Outcome;
use portfolio_mail::startup::build;
use portfolio_mail::telemetry::{get_subscriber, init_subscriber};
use secrecy::Secret;
use wiremock::{MockServer, Request};

pub const OWNER: &str = "owner@example.com";
pub const VISITOR: &str = "ursula_le_guin@gmail.com";

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.request(reqwest::Method::GET, path).await
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::Response {
        self.client
            .request(method, &format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: String) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", self.address, path))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, body: &str) -> reqwest::Response {
        self.post_raw(path, "application/x-www-form-urlencoded", body.to_string())
            .await
    }

    pub async fn received_emails(&self) -> Vec<Email> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Failed to parse email"))
            .collect()
    }
}

pub async fn outcome(response: reqwest::Response) -> Outcome {
    response
        .json()
        .await
        .expect("Response body is not an outcome")
}

pub async fn setup() -> TestApp {
    setup_with(|_| {}).await
}

pub async fn setup_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.email.provider = ProviderKind::Resend;
    config.email.api_url = email_server.uri();
    config.email.owner_email = OWNER.into();
    config.email.credentials.resend_api_key = Some(Secret::new("re_test_key".into()));
    customize(&mut config);

    let app = build(config).expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", app.port());
    let _ = tokio::spawn(app.run());

    TestApp {
        address,
        email_server,
        client: reqwest::Client::new(),
    }
}

/// Body of a request received by the fake Resend API.
#[derive(Debug, serde::Deserialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub reply_to: Option<String>,
}

/// Matches sends addressed to one recipient.
pub struct RecipientMatcher(pub &'static str);

impl wiremock::Match for RecipientMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Email>(&request.body)
            .map(|email| email.to.iter().any(|to| to == self.0))
            .unwrap_or(false)
    }
}
