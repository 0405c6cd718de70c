pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod email;
pub mod forms;
pub mod outcome;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
