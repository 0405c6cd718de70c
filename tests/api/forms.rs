//! tests/api/forms.rs
//!
//! The form surface always answers 200; the outcome body says what happened.
use crate::helpers::{outcome, setup, setup_with, RecipientMatcher, OWNER, VISITOR};
use portfolio_mail::outcome::{
    Outcome, CONTACT_REJECTED, DELIVERY_FAILED, NEWSLETTER_REJECTED, SERVICE_UNAVAILABLE, TOO_LARGE,
};
use wiremock::{matchers::any, Mock, ResponseTemplate};

const CONTACT: &str = "name=le%20guin&email=ursula_le_guin%40gmail.com&message=hello%0Athere";

#[tokio::test]
async fn contact_form_reports_success() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test.post_form("/forms/contact", CONTACT).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(outcome(response).await, Outcome::success());
}

#[tokio::test]
async fn contact_form_reports_invalid_fields_without_sending() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.email_server)
        .await;

    let test_cases = vec![
        ("email=ursula_le_guin%40gmail.com&message=hi", "missing the name"),
        ("name=le%20guin&message=hi", "missing the email"),
        ("name=le%20guin&email=ursula_le_guin%40gmail.com", "missing the message"),
        ("name=le%20guin&email=ursula_le_guin&message=hi", "an invalid email"),
        ("", "missing everything"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post_form("/forms/contact", body).await;

        // Assert
        assert_eq!(200, response.status().as_u16());
        assert_eq!(
            outcome(response).await,
            Outcome::failure(CONTACT_REJECTED),
            "Unexpected outcome when the form was {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn contact_form_tolerates_a_failed_auto_reply() {
    // Arrange
    let test = setup().await;
    Mock::given(RecipientMatcher(OWNER))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.email_server)
        .await;
    Mock::given(RecipientMatcher(VISITOR))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test.post_form("/forms/contact", CONTACT).await;

    // Assert
    assert_eq!(outcome(response).await, Outcome::success());
}

#[tokio::test]
async fn contact_form_reports_a_failed_notification() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.email_server)
        .await;

    // Act
    let response = test.post_form("/forms/contact", CONTACT).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(outcome(response).await, Outcome::failure(DELIVERY_FAILED));
}

#[tokio::test]
async fn newsletter_form_reports_success_and_rejections() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.email_server)
        .await;

    // Act
    let accepted = test
        .post_form("/forms/newsletter", "email=ursula_le_guin%40gmail.com")
        .await;
    let rejected = test
        .post_form("/forms/newsletter", "email=ursula_le_guin")
        .await;

    // Assert
    assert_eq!(outcome(accepted).await, Outcome::success());
    assert_eq!(
        outcome(rejected).await,
        Outcome::failure(NEWSLETTER_REJECTED)
    );
}

#[tokio::test]
async fn forms_without_a_credential_report_service_unavailable() {
    // Arrange
    let test = setup_with(|config| config.email.credentials.resend_api_key = None).await;

    // Act
    let contact = test.post_form("/forms/contact", CONTACT).await;
    let newsletter = test
        .post_form("/forms/newsletter", "email=ursula_le_guin%40gmail.com")
        .await;

    // Assert
    assert_eq!(outcome(contact).await, Outcome::failure(SERVICE_UNAVAILABLE));
    assert_eq!(
        outcome(newsletter).await,
        Outcome::failure(SERVICE_UNAVAILABLE)
    );
}

#[tokio::test]
async fn contact_form_reports_an_oversized_body() {
    // Arrange
    let test = setup_with(|config| config.application.body_limit = 64).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.email_server)
        .await;
    let body = format!(
        "name=Ursula&email=ursula_le_guin%40gmail.com&message={}",
        "a".repeat(500)
    );

    // Act
    let response = test.post_form("/forms/contact", &body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(outcome(response).await, Outcome::failure(TOO_LARGE));
}
