//! tests/api/newsletter.rs
use crate::helpers::{outcome, setup, setup_with, VISITOR};
use portfolio_mail::outcome::{DELIVERY_FAILED, NEWSLETTER_REJECTED, SERVICE_UNAVAILABLE};
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn newsletter_returns_a_200_and_sends_a_welcome() {
    // Arrange
    let test = setup().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test
        .post_json("/api/newsletter", &json!({ "email": VISITOR }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let outcome = outcome(response).await;
    assert!(outcome.success);
    assert_eq!(outcome.error, "");

    let emails = test.received_emails().await;
    assert_eq!(emails[0].to, vec![VISITOR.to_string()]);
    assert_eq!(emails[0].subject, "Welcome to My Portfolio!");
    assert!(emails[0].from.ends_with("<onboarding@resend.dev>"));
}

#[tokio::test]
async fn newsletter_returns_a_400_for_a_missing_or_invalid_email() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.email_server)
        .await;

    let test_cases = vec![
        (json!({}), "missing email"),
        (json!({ "email": "" }), "empty email"),
        (json!({ "email": "ursula_le_guin" }), "no domain"),
        (json!({ "email": ["a@b.com"] }), "a list instead of a string"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post_json("/api/newsletter", &body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        assert_eq!(outcome(response).await.error, NEWSLETTER_REJECTED);
    }
}

#[tokio::test]
async fn newsletter_rejection_details_do_not_echo_the_input() {
    // Arrange
    let test = setup().await;
    let submitted = "<b>x</b>@nope";

    // Act
    let response = test
        .post_json("/api/newsletter", &json!({ "email": submitted }))
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let details = outcome(response).await.details.expect("No details returned");
    assert_eq!(details[0]["field"], "email");
    let message = details[0]["message"].as_str().unwrap();
    assert_eq!(message, "Not a valid email address");
    assert!(!message.contains(submitted));
}

#[tokio::test]
async fn newsletter_fails_when_the_welcome_cannot_be_sent() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test
        .post_json("/api/newsletter", &json!({ "email": VISITOR }))
        .await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let outcome = outcome(response).await;
    assert!(!outcome.success);
    assert_eq!(outcome.error, DELIVERY_FAILED);
}

#[tokio::test]
async fn newsletter_without_a_credential_reports_service_unavailable() {
    // Arrange
    let test = setup_with(|config| config.email.credentials.resend_api_key = None).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test
        .post_json("/api/newsletter", &json!({ "email": VISITOR }))
        .await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    assert_eq!(outcome(response).await.error, SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn newsletter_rejects_get_with_a_405() {
    let test = setup().await;

    let response = test.get("/api/newsletter").await;

    assert_eq!(405, response.status().as_u16());
}
