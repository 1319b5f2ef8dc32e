//! The stub transport records the deliveries it is asked for and answers with a fixed
//! result. Nothing leaves the process, which makes it useful for testing.
//!
//! ```rust
//! use relaymail::{Credential, Mailer, Outcome, SendOptions, StubTransport};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let transport = StubTransport::new_ok();
//! let mailer = Mailer::new(transport.clone());
//!
//! let outcome = mailer.send_mail(
//!     &Credential::new("nobody@gmail.com", "secret"),
//!     "hei@domain.tld",
//!     "Happy new year",
//!     "<p>Be happy!</p>",
//!     &SendOptions::new(),
//! )?;
//!
//! assert_eq!(outcome, Outcome::Successful);
//! assert_eq!(transport.deliveries().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::{
    error::Error as StdError,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

#[cfg(feature = "tokio1")]
use async_trait::async_trait;

#[cfg(feature = "tokio1")]
use crate::AsyncTransport;
use crate::{Credential, Endpoint, Envelope, Transport};

/// Failure returned by a [`StubTransport`] built with [`StubTransport::new_error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stub error")
    }
}

impl StdError for Error {}

/// A delivery recorded by a [`StubTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Relay the message was addressed to
    pub endpoint: Endpoint,
    /// Email address of the account used
    pub account: String,
    /// The message
    pub envelope: Envelope,
}

/// This transport records deliveries and returns the given response
///
/// Clones share the same delivery log.
#[derive(Debug, Clone)]
pub struct StubTransport {
    response: Result<(), Error>,
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl StubTransport {
    /// Creates a new transport that always returns the given response
    pub fn new(response: Result<(), Error>) -> StubTransport {
        StubTransport {
            response,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a new transport that always returns a success response
    pub fn new_ok() -> StubTransport {
        Self::new(Ok(()))
    }

    /// Creates a new transport that always returns an error
    pub fn new_error() -> StubTransport {
        Self::new(Err(Error))
    }

    /// Deliveries attempted so far, oldest first
    ///
    /// Failed attempts are recorded too.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, endpoint: &Endpoint, credential: &Credential, envelope: &Envelope) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            relay = %endpoint,
            from = %envelope.from(),
            recipients = envelope.recipients().count(),
            "stub delivery"
        );

        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Delivery {
                endpoint: endpoint.clone(),
                account: credential.email().to_owned(),
                envelope: envelope.clone(),
            });
    }
}

impl Transport for StubTransport {
    type Ok = ();
    type Error = Error;

    fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error> {
        self.record(endpoint, credential, envelope);
        self.response
    }
}

#[cfg(feature = "tokio1")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio1")))]
#[async_trait]
impl AsyncTransport for StubTransport {
    type Ok = ();
    type Error = Error;

    async fn send(
        &self,
        endpoint: &Endpoint,
        credential: &Credential,
        envelope: &Envelope,
    ) -> Result<Self::Ok, Self::Error> {
        self.record(endpoint, credential, envelope);
        self.response
    }
}
