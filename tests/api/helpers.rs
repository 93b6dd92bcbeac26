use biginterview_site::configuration::get_configuration;
use biginterview_site::startup::run;
use biginterview_site::telemetry::get_subscriber;
use biginterview_site::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use std::net::TcpListener;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    /// Stand-in for the hosted form backend.
    pub form_server: MockServer,
    pub http_client: reqwest::Client,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "biginterview_site_test".to_string();
    // set up logging for test app
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        // use std::io::sink to consume the log data silently
        // ie. send them into void
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let form_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("Failed to read configuration");
    configuration.form_backend.base_url = form_server.uri();

    let forwarder = configuration.form_backend.forwarder();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port.");
    let addr = listener.local_addr().unwrap();

    let server = run(listener, forwarder).expect("Failed to fireup server for test.");
    tokio::spawn(server);

    // Redirects stay visible so honeypot behaviour can be asserted.
    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://{addr}"),
        form_server,
        http_client,
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.http_client
            .post(format!("{}/contact", self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
