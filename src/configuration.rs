use std::time::Duration;

use config::ConfigError;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub rate_limit: RateLimitSettings,
    pub storage: StorageSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Directory the static site is served from.
    pub static_root: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Sliding-window rate limit applied to the contact endpoint.
#[derive(serde::Deserialize, Clone)]
pub struct RateLimitSettings {
    pub max_requests: usize,
    pub window_seconds: u64,
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    /// Flat JSON file contact messages are appended to.
    pub messages_path: String,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let default_messages_path = std::env::temp_dir().join("messages.json");

    let settings = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8080_i64)?
        .set_default("application.static_root", "./public")?
        .set_default("rate_limit.max_requests", 5_i64)?
        .set_default("rate_limit.window_seconds", 600_i64)?
        .set_default(
            "storage.messages_path",
            default_messages_path.to_string_lossy().to_string(),
        )?
        .add_source(config::File::with_name("configuration").required(false))
        .build()?;
    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contact_endpoint_policy() {
        let settings = get_configuration().expect("Failed to load configuration");

        assert_eq!(settings.rate_limit.max_requests, 5);
        assert_eq!(settings.rate_limit.window(), Duration::from_secs(600));
        assert!(settings.storage.messages_path.ends_with("messages.json"));
    }

    #[test]
    fn address_joins_host_and_port() {
        let settings = ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 9000,
            static_root: "./public".to_string(),
        };

        assert_eq!(settings.address(), "127.0.0.1:9000");
    }
}
