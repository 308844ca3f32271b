use std::fmt;
use std::time::Duration;

/// Production Open API endpoint.
pub const LIVE_ENDPOINT: &str = "live.ctraderapi.com:5035";
/// Demo Open API endpoint.
pub const DEMO_ENDPOINT: &str = "demo.ctraderapi.com:5035";

/// Application credentials used once per connection to authorize the app.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    /// Never logged.
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &format_args!("<redacted:{} bytes>", self.client_secret.len()),
            )
            .finish()
    }
}

/// Client behavior and connection settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connect to the live endpoint instead of demo.
    pub live: bool,
    /// Overrides the well-known endpoint selected by `live`.
    pub endpoint: Option<String>,
    pub credentials: Credentials,
    /// Deadline for the application authorization exchange.
    pub handshake_timeout: Duration,
    /// Pause between heartbeats.
    pub keepalive_interval: Duration,
    /// Pause between failed reconnect attempts.
    pub reconnect_backoff: Duration,
}

impl ClientConfig {
    pub fn new(live: bool, credentials: Credentials) -> Self {
        Self {
            live,
            credentials,
            ..Self::default()
        }
    }

    /// Address the transport connects to.
    pub fn endpoint(&self) -> &str {
        match &self.endpoint {
            Some(endpoint) => endpoint,
            None if self.live => LIVE_ENDPOINT,
            None => DEMO_ENDPOINT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            live: false,
            endpoint: None,
            credentials: Credentials::default(),
            handshake_timeout: Duration::from_secs(1),
            keepalive_interval: Duration::from_secs(10),
            reconnect_backoff: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_follows_live_flag() {
        assert_eq!(ClientConfig::default().endpoint(), DEMO_ENDPOINT);
        let live = ClientConfig::new(true, Credentials::default());
        assert_eq!(live.endpoint(), LIVE_ENDPOINT);
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = ClientConfig {
            live: true,
            endpoint: Some("127.0.0.1:5035".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(config.endpoint(), "127.0.0.1:5035");
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ClientConfig::new(false, Credentials::new("app-id", "s3cr3t"));
        let rendered = format!("{config:?}");
        assert!(rendered.contains("app-id"));
        assert!(rendered.contains("<redacted:6 bytes>"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
