//! The SMTP transport submits envelopes to the provider relay using the lettre SMTP
//! client.
//!
//! Each send opens its own connection, authenticates with the credential, submits the
//! message and closes the connection. `Security::StartTls` relays must accept the
//! STARTTLS upgrade, nothing is ever sent in clear text.
//!
//! The MIME message built for an envelope is:
//!
//! * a `multipart/mixed` body made of the `text/html` part followed by one part per
//!   attachment, in order, or a single `text/html` part when there is no attachment
//! * the `From`, `To`, `Cc`, `Reply-To`, `Sender` and `Subject` headers
//! * an `X-Priority` header reflecting the envelope priority
//!
//! Blind copies only appear in the SMTP envelope, never in the headers.
//!
//! ```rust,no_run
//! # #[cfg(feature = "native-tls")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//!
//! use relaymail::{Credential, Mailer, SendOptions, SmtpTransport};
//!
//! let mailer = Mailer::new(SmtpTransport::new().timeout(Duration::from_secs(10)));
//! let outcome = mailer.send_mail(
//!     &Credential::new("nobody@yahoo.com", "app-password"),
//!     "hei@domain.tld",
//!     "Happy new year",
//!     "<p>Be happy!</p>",
//!     &SendOptions::new(),
//! )?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native-tls"))]
//! # fn main() {}
//! ```

use std::time::Duration;

use lettre::{
    message::{
        header::{ContentType, Header, HeaderName, HeaderValue},
        Attachment as MimeAttachment, Mailbox, Message, MultiPart, SinglePart,
    },
    transport::smtp::authentication::Credentials,
};

#[cfg(feature = "tokio1")]
pub use self::async_transport::AsyncSmtpTransport;
pub use self::{error::Error, transport::SmtpTransport};
use crate::{Address, BoxError, Credential, Envelope, Priority};

#[cfg(feature = "tokio1")]
mod async_transport;
mod error;
mod transport;

/// Default timeout of every SMTP command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds the MIME message submitted for an envelope
///
/// ```rust
/// use relaymail::{transport::smtp::build_message, Envelope};
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let envelope = Envelope::builder("nobody@gmail.com".parse()?)
///     .to("hei@domain.tld".parse()?)
///     .subject("Hello")
///     .body("<p>Hi!</p>")
///     .build()?;
///
/// let message = build_message(&envelope)?;
/// let formatted = String::from_utf8(message.formatted())?;
/// assert!(formatted.contains("X-Priority: 1"));
/// # Ok(())
/// # }
/// ```
pub fn build_message(envelope: &Envelope) -> Result<Message, Error> {
    let mut builder = Message::builder()
        .from(mailbox(envelope.from())?)
        .subject(envelope.subject())
        .header(XPriority(envelope.priority()));

    for address in envelope.to() {
        builder = builder.to(mailbox(address)?);
    }
    for address in envelope.cc() {
        builder = builder.cc(mailbox(address)?);
    }
    for address in envelope.bcc() {
        builder = builder.bcc(mailbox(address)?);
    }
    if let Some(address) = envelope.reply_to() {
        builder = builder.reply_to(mailbox(address)?);
    }
    if let Some(address) = envelope.sender() {
        builder = builder.sender(mailbox(address)?);
    }

    let html = SinglePart::html(envelope.body().to_owned());
    let message = if envelope.attachments().is_empty() {
        builder.singlepart(html)
    } else {
        let mut multipart = MultiPart::mixed().singlepart(html);
        for attachment in envelope.attachments() {
            let content_type =
                ContentType::parse(attachment.content_type().as_ref()).map_err(error::message)?;
            multipart = multipart.singlepart(
                MimeAttachment::new(attachment.filename())
                    .body(attachment.content().to_vec(), content_type),
            );
        }
        builder.multipart(multipart)
    };

    message.map_err(error::message)
}

fn mailbox(address: &Address) -> Result<Mailbox, Error> {
    let address = address
        .as_ref()
        .parse::<lettre::Address>()
        .map_err(error::message)?;
    Ok(Mailbox::new(None, address))
}

fn credentials(credential: &Credential) -> Credentials {
    Credentials::new(
        credential.email().to_owned(),
        credential.password().to_owned(),
    )
}

/// `X-Priority` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XPriority(Priority);

impl Header for XPriority {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-Priority")
    }

    fn parse(s: &str) -> Result<Self, BoxError> {
        let priority = match s.trim() {
            "1" | "2" => Priority::High,
            "3" => Priority::Normal,
            "4" | "5" => Priority::Low,
            other => return Err(format!("invalid X-Priority `{other}`").into()),
        };
        Ok(Self(priority))
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), self.0.x_priority().to_owned())
    }
}
