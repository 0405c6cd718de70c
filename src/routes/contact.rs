//! src/routes/contact.rs
use crate::dispatch::Dispatcher;
use crate::forms::{respond, submit_contact, FormError};
use crate::outcome::Outcome;
use actix_web::{web, HttpResponse};

/// Raw contact fields. Any of them may be absent.
#[derive(Debug, serde::Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// `POST /api/contact`
pub async fn contact(
    body: web::Json<ContactForm>,
    dispatcher: web::Data<Dispatcher>,
) -> Result<HttpResponse, FormError> {
    submit_contact(&dispatcher, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Outcome::success().with_message("Email sent successfully!")))
}

/// `POST /forms/contact`
pub async fn contact_form(
    form: web::Form<ContactForm>,
    dispatcher: web::Data<Dispatcher>,
) -> HttpResponse {
    let outcome = respond(submit_contact(&dispatcher, form.into_inner()).await);
    HttpResponse::Ok().json(outcome)
}
