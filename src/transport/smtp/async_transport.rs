use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    transport::smtp::{response::Response, AsyncSmtpTransportBuilder},
    Tokio1Executor,
};

use super::{build_message, credentials, error, Error, DEFAULT_TIMEOUT};
use crate::{AsyncTransport, Credential, Endpoint, Envelope, Security};

type Client = lettre::AsyncSmtpTransport<Tokio1Executor>;

/// Asynchronously sends envelopes using the SMTP protocol, on tokio 1.x
#[cfg_attr(docsrs, doc(cfg(all(feature = "smtp-transport", feature = "tokio1"))))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsyncSmtpTransport {
    timeout: Option<Duration>,
}

impl AsyncSmtpTransport {
    /// Creates a transport using [`DEFAULT_TIMEOUT`]
    pub fn new() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Sets the timeout of every SMTP command
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Waits forever on a silent relay
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    fn client(&self, endpoint: &Endpoint, credential: &Credential) -> Result<Client, Error> {
        let builder: AsyncSmtpTransportBuilder = match endpoint.security {
            Security::Wrapper => Client::relay(&endpoint.host),
            Security::StartTls => Client::starttls_relay(&endpoint.host),
        }
        .map_err(error::connection)?;

        Ok(builder
            .port(endpoint.port)
            .credentials(credentials(credential))
            .timeout(self.timeout)
            .build())
    }
}

impl Default for AsyncSmtpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncTransport for AsyncSmtpTransport {
    type Ok = Response;
    type Error = Error;

    async fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error> {
        let message = build_message(envelope)?;
        let client = self.client(endpoint, credential)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(relay = %endpoint, "submitting message");

        lettre::AsyncTransport::send(&client, message)
            .await
            .map_err(error::transport)
    }
}
