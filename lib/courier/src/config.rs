//! Transport settings for [`HyperClient`](crate::HyperClient).

use std::time::Duration;

/// Connection and timeout settings.
///
/// Built through [`HyperClient::builder`](crate::HyperClient::builder) or
/// filled in directly and passed to
/// [`HyperClient::with_config`](crate::HyperClient::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bound on one whole exchange, from sending the request to reading the
    /// last byte of the body. Expiry is a "no data" timeout.
    pub timeout: Duration,
    /// Bound on establishing a connection.
    pub connect_timeout: Duration,
    /// Idle connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection is kept.
    pub pool_idle_timeout: Duration,
}

impl ClientConfig {
    const TIMEOUT: Duration = Duration::from_secs(30);
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    const POOL_IDLE_PER_HOST: usize = 32;
    const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Self::TIMEOUT,
            connect_timeout: Self::CONNECT_TIMEOUT,
            pool_idle_per_host: Self::POOL_IDLE_PER_HOST,
            pool_idle_timeout: Self::POOL_IDLE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.pool_idle_per_host, 32);
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(90));
    }

    #[test]
    fn struct_update_keeps_other_defaults() {
        let config = ClientConfig {
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        };
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
