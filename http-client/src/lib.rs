//! Private HTTP transport for Roku ECP device communication
//!
//! This crate provides the minimal blocking transport used by `roku-api`:
//! a GET that returns the response body and a POST with an empty body.
//! Connection handling and timeouts live here; nothing above this layer
//! retries or pools.

mod error;

pub use error::TransportError;

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Timeout configuration for [`UreqTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Maximum time to establish the TCP connection
    pub connect_timeout: Duration,
    /// Maximum time to wait on each read from the socket
    pub read_timeout: Duration,
}

impl TransportConfig {
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
        }
    }
}

/// The two HTTP verbs the device control API needs
///
/// Implementations own connection handling, TLS and timeouts. Callers issue
/// exactly one request per method call and never retry.
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and return the response body as text
    fn get(&self, url: &str) -> Result<String, TransportError>;

    /// Issue a POST with an empty body, discarding the response
    fn post(&self, url: &str) -> Result<(), TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str) -> Result<(), TransportError> {
        (**self).post(url)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str) -> Result<(), TransportError> {
        (**self).post(url)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str) -> Result<(), TransportError> {
        (**self).post(url)
    }
}

/// Blocking transport backed by a `ureq` agent
///
/// Cloning is cheap: clones share the agent's connection pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport with the default timeouts (5s connect, 10s read)
    pub fn new() -> Self {
        Self::with_config(&TransportConfig::default())
    }

    /// Create a transport with explicit timeouts
    pub fn with_config(config: &TransportConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(config.connect_timeout)
                .timeout_read(config.read_timeout)
                .build(),
        }
    }

    /// Wrap an agent the caller has already configured
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        debug!(%url, "GET");

        let response = self.agent.get(url).call()?;
        let body = response
            .into_string()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        trace!(%url, bytes = body.len(), "GET response");
        Ok(body)
    }

    fn post(&self, url: &str) -> Result<(), TransportError> {
        debug!(%url, "POST");

        // The device expects an explicit zero-length body on commands
        let response = self.agent.post(url).send_string("")?;

        trace!(%url, status = response.status(), "POST response");
        Ok(())
    }
}
