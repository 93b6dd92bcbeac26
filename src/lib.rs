pub mod configuration;
pub mod content;
pub mod domain;
pub mod forwarder;
pub mod gate;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templating;
