//! src/startup.rs
use crate::configuration::{ApplicationSettings, Settings};
use crate::dispatch::{Dispatcher, Mailboxes};
use crate::email::provider_from_settings;
use crate::outcome::{self, Outcome};
use crate::routes::{
    contact, contact_form, health_check, method_not_allowed, newsletter, newsletter_form,
    preflight,
};
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{error, web, App, HttpResponse, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let mailboxes = Mailboxes::try_from(&config.email)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let dispatcher = Dispatcher::new(provider_from_settings(&config.email), mailboxes);

    let server = run(tcp_listener, dispatcher, config.application)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    dispatcher: Dispatcher,
    settings: ApplicationSettings,
) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);

    let server = HttpServer::new(move || {
        let limit = settings.body_limit;

        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .wrap(cors_headers(&settings.allowed_origin))
                    .service(
                        web::resource("/contact")
                            .app_data(json_config(limit, outcome::CONTACT_REJECTED))
                            .route(web::post().to(contact))
                            .route(web::method(Method::OPTIONS).to(preflight))
                            .default_service(web::to(method_not_allowed)),
                    )
                    .service(
                        web::resource("/newsletter")
                            .app_data(json_config(limit, outcome::NEWSLETTER_REJECTED))
                            .route(web::post().to(newsletter))
                            .route(web::method(Method::OPTIONS).to(preflight))
                            .default_service(web::to(method_not_allowed)),
                    ),
            )
            .service(
                web::scope("/forms")
                    .service(
                        web::resource("/contact")
                            .app_data(form_config(limit, outcome::CONTACT_REJECTED))
                            .route(web::post().to(contact_form)),
                    )
                    .service(
                        web::resource("/newsletter")
                            .app_data(form_config(limit, outcome::NEWSLETTER_REJECTED))
                            .route(web::post().to(newsletter_form)),
                    ),
            )
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn cors_headers(allowed_origin: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Credentials", "true"))
        .add(("Access-Control-Allow-Origin", allowed_origin.to_string()))
        .add(("Access-Control-Allow-Methods", "GET,DELETE,PATCH,POST,PUT"))
        .add((
            "Access-Control-Allow-Headers",
            "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, \
             Content-MD5, Content-Type, Date, X-Api-Version",
        ))
}

/// A body that is not JSON, or whose fields have the wrong type, is a
/// validation failure like any other. An oversized body gets its own 413.
fn json_config(limit: usize, rejection: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(move |err, _req| {
            let response = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    tracing::info!(error = %err, "Rejected an oversized JSON body");
                    HttpResponse::PayloadTooLarge().json(Outcome::failure(outcome::TOO_LARGE))
                }
                _ => {
                    tracing::info!(error = %err, "Rejected an unreadable JSON body");
                    HttpResponse::BadRequest().json(Outcome::failure(rejection))
                }
            };
            error::InternalError::from_response(err, response).into()
        })
}

/// Forms always answer 200 with an outcome body.
fn form_config(limit: usize, rejection: &'static str) -> web::FormConfig {
    web::FormConfig::default()
        .limit(limit)
        .error_handler(move |err, _req| {
            let outcome = match &err {
                UrlencodedError::Overflow { .. } => {
                    tracing::info!(error = %err, "Rejected an oversized form body");
                    Outcome::failure(outcome::TOO_LARGE)
                }
                _ => {
                    tracing::info!(error = %err, "Rejected an unreadable form body");
                    Outcome::failure(rejection)
                }
            };
            let response = HttpResponse::Ok().json(outcome);
            error::InternalError::from_response(err, response).into()
        })
}
