//! src/routes/newsletter.rs
use crate::dispatch::Dispatcher;
use crate::forms::{respond, subscribe_newsletter, FormError};
use crate::outcome::Outcome;
use actix_web::{web, HttpResponse};

#[derive(Debug, serde::Deserialize)]
pub struct NewsletterForm {
    pub email: Option<String>,
}

/// `POST /api/newsletter`
pub async fn newsletter(
    body: web::Json<NewsletterForm>,
    dispatcher: web::Data<Dispatcher>,
) -> Result<HttpResponse, FormError> {
    subscribe_newsletter(&dispatcher, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(
        Outcome::success()
            .with_message("Successfully subscribed! Check your email for a welcome message."),
    ))
}

/// `POST /forms/newsletter`
pub async fn newsletter_form(
    form: web::Form<NewsletterForm>,
    dispatcher: web::Data<Dispatcher>,
) -> HttpResponse {
    let outcome = respond(subscribe_newsletter(&dispatcher, form.into_inner()).await);
    HttpResponse::Ok().json(outcome)
}
