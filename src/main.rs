use std::net::TcpListener;

use anyhow::Context;
use biginterview_site::{
    configuration::get_configuration,
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the logger
    let subscriber = get_subscriber("biginterview-site".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let forwarder = configuration.form_backend.forwarder();

    let addr_to_bind = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener =
        TcpListener::bind(&addr_to_bind).with_context(|| format!("Failed to bind {addr_to_bind}."))?;

    run(listener, forwarder)?.await?;
    Ok(())
}
