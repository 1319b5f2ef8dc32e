//! relaymail validates, composes and dispatches emails through the SMTP relay of the
//! sender's mail provider.
//!
//! A send goes through a fixed pipeline:
//!
//! * every address (credential, recipients, copies, reply-to, sender) is checked with
//!   [`address::is_valid`]
//! * an [`Envelope`] is built from the validated addresses, subject, HTML body and
//!   attachments
//! * the relay [`Endpoint`] is resolved from the domain of the credential address
//! * the envelope is handed to a [`Transport`], and the result is reported as an
//!   [`Outcome`]
//!
//! Validation problems and transport failures are reported as [`Outcome`] values; the
//! only hard error is a credential whose provider has no known relay
//! ([`Error::UnsupportedProvider`]).
//!
//! ## Features
//!
//! * **smtp-transport** (default): [`SmtpTransport`], backed by the lettre SMTP client
//! * **native-tls** (default) / **rustls-tls**: TLS backend used by the SMTP transport
//! * **tokio1** (default): [`AsyncTransport`], [`AsyncMailer`] and the tokio 1.x SMTP
//!   transport
//! * **serde**: serialization of credentials, options, endpoints and outcomes
//! * **tracing**: logging through `tracing`
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # #[cfg(all(feature = "smtp-transport", feature = "native-tls"))]
//! # {
//! use relaymail::{Credential, Mailer, Outcome, SendOptions, SmtpTransport};
//!
//! let mailer = Mailer::new(SmtpTransport::new());
//! let credential = Credential::new("nobody@gmail.com", "app-password");
//!
//! let outcome = mailer.send_mail(
//!     &credential,
//!     "hei@domain.tld",
//!     "Happy new year",
//!     "<p>Be happy!</p>",
//!     &SendOptions::new().cc("yuin@domain.tld"),
//! )?;
//! assert_eq!(outcome, Outcome::Successful);
//! # }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/crate/relaymail/0.1.0")]
#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod address;
mod credential;
mod error;
pub mod mailer;
pub mod message;
mod options;
mod outcome;
pub mod provider;
pub mod transport;

#[cfg(feature = "tokio1")]
pub use crate::mailer::AsyncMailer;
#[cfg(feature = "tokio1")]
pub use crate::transport::AsyncTransport;
#[cfg(all(
    feature = "smtp-transport",
    feature = "tokio1",
    any(feature = "native-tls", feature = "rustls-tls")
))]
pub use crate::transport::smtp::AsyncSmtpTransport;
#[cfg(all(
    feature = "smtp-transport",
    any(feature = "native-tls", feature = "rustls-tls")
))]
pub use crate::transport::smtp::SmtpTransport;
pub use crate::{
    address::Address,
    credential::Credential,
    error::Error,
    mailer::Mailer,
    message::{Attachment, Envelope, Priority},
    options::SendOptions,
    outcome::{Locale, Outcome},
    provider::{Endpoint, Provider, Providers, Security},
    transport::{stub::StubTransport, Transport},
};

#[cfg(feature = "smtp-transport")]
pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
