//! ### Sending Messages
//!
//! A transport performs the actual submission of an [`Envelope`] to a relay
//! [`Endpoint`], authenticating with a [`Credential`]. The mailer never talks to the
//! network itself.
//!
//! The following transports are available:
//!
//! * The `SmtpTransport` submits the message over SMTP, using the lettre client. It is
//!   the one to use in production. `AsyncSmtpTransport` is its tokio 1.x counterpart.
//! * The `StubTransport` records what it was asked to deliver and answers with a
//!   configured result. It is useful for tests and debugging.

#[cfg(feature = "tokio1")]
use async_trait::async_trait;

use crate::{Credential, Endpoint, Envelope};

#[cfg(all(
    feature = "smtp-transport",
    any(feature = "native-tls", feature = "rustls-tls")
))]
#[cfg_attr(docsrs, doc(cfg(feature = "smtp-transport")))]
pub mod smtp;
pub mod stub;

/// Blocking Transport method for emails
pub trait Transport {
    /// Response produced by the Transport
    type Ok;
    /// Error produced by the Transport
    type Error;

    /// Submits the envelope to the relay at `endpoint`
    fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error>;
}

/// tokio 1.x based Transport method for emails
#[cfg(feature = "tokio1")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio1")))]
#[async_trait]
pub trait AsyncTransport {
    /// Response produced by the Transport
    type Ok;
    /// Error produced by the Transport
    type Error;

    /// Submits the envelope to the relay at `endpoint`
    async fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error>;
}
