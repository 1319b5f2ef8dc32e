use std::time::Duration;

use lettre::transport::smtp::{response::Response, SmtpTransportBuilder};

use super::{build_message, credentials, error, Error, DEFAULT_TIMEOUT};
use crate::{Credential, Endpoint, Envelope, Security, Transport};

/// Sends envelopes using the SMTP protocol
///
/// The relay is only known when sending, so a new client is set up for every
/// envelope.
#[cfg_attr(docsrs, doc(cfg(feature = "smtp-transport")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmtpTransport {
    timeout: Option<Duration>,
}

impl SmtpTransport {
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

    fn client(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
    ) -> Result<lettre::SmtpTransport, Error> {
        let builder: SmtpTransportBuilder = match endpoint.security {
            Security::Wrapper => lettre::SmtpTransport::relay(&endpoint.host),
            Security::StartTls => lettre::SmtpTransport::starttls_relay(&endpoint.host),
        }
        .map_err(error::connection)?;

        Ok(builder
            .port(endpoint.port)
            .credentials(credentials(credential))
            .timeout(self.timeout)
            .build())
    }
}

impl Default for SmtpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SmtpTransport {
    type Ok = Response;
    type Error = Error;

    fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error> {
        let message = build_message(envelope)?;
        let client = self.client(endpoint, credential)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(relay = %endpoint, "submitting message");

        lettre::Transport::send(&client, &message).map_err(error::transport)
    }
}
