//! src/routes/mod.rs
use crate::outcome::Outcome;
use actix_web::http::header::ALLOW;
use actix_web::HttpResponse;

mod health_check;
pub use health_check::*;

mod contact;
pub use contact::*;

mod newsletter;
pub use newsletter::*;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((ALLOW, "POST, OPTIONS"))
        .json(Outcome::failure("Method not allowed"))
}

/// CORS preflight; the headers themselves are added on the `/api` scope.
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
