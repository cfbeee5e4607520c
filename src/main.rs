use std::net::TcpListener;

use portfolio_api::configuration::get_configuration;
use portfolio_api::startup::run;
use portfolio_api::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_telemetry();

    tracing::info!("Starting portfolio API");

    let configuration = match get_configuration() {
        Ok(config) => {
            tracing::info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            tracing::error!("Failed to read configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Configuration error",
            ));
        }
    };

    let address = configuration.application.address();
    tracing::info!("Binding server to address: {}", address);

    let listener = TcpListener::bind(&address)?;
    tracing::info!(
        static_root = %configuration.application.static_root,
        messages_path = %configuration.storage.messages_path,
        "Server listening on: {}",
        address
    );

    let server = run(listener, configuration)?;

    server.await
}
