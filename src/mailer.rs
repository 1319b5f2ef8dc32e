//! The send pipeline
//!
//! A send is a single shot, with no retry and no state kept between calls:
//!
//! 1. the credential address must be present (`EmailMissing`) and valid (`WrongEmail`)
//! 2. there must be at least one primary recipient (`EmailMissing`), and every primary
//!    recipient, copy, reply-to and sender address must be valid
//!    (`WrongDestinationEmail`)
//! 3. the [`Envelope`] is built, attachments kept in order
//! 4. the relay is resolved from the credential domain, failing with
//!    [`Error::UnsupportedProvider`] for unknown providers
//! 5. the transport submits the envelope; any failure becomes `ErrorSendingMessage`
//!
//! The transport is never called when validation fails.

use std::fmt::Display;

use crate::{
    Address, Credential, Endpoint, Envelope, Error, Outcome, Providers, SendOptions, Transport,
};
#[cfg(feature = "tokio1")]
use crate::AsyncTransport;

/// Sends messages through a blocking [`Transport`]
#[derive(Debug, Clone)]
pub struct Mailer<T> {
    transport: T,
    providers: Providers,
}

impl<T> Mailer<T> {
    /// Creates a mailer using the built-in provider table
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            providers: Providers::default(),
        }
    }

    /// Replaces the table used to resolve relays
    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The table used to resolve relays
    pub fn providers(&self) -> &Providers {
        &self.providers
    }
}

impl<T> Mailer<T>
where
    T: Transport,
    T::Error: Display,
{
    /// Sends a message to a single recipient
    ///
    /// An empty `to` is reported as [`Outcome::EmailMissing`].
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedProvider`] if no relay is known for the credential domain.
    pub fn send_mail(
        &self,
        credential: &Credential,
        to: &str,
        subject: &str,
        body: &str,
        options: &SendOptions,
    ) -> Result<Outcome, Error> {
        let recipients = [to];
        let to: &[&str] = if to.is_empty() { &[] } else { &recipients };
        self.send_bulk_email(credential, to, subject, body, options)
    }

    /// Sends one message to several primary recipients
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedProvider`] if no relay is known for the credential domain.
    pub fn send_bulk_email<S: AsRef<str>>(
        &self,
        credential: &Credential,
        to: &[S],
        subject: &str,
        body: &str,
        options: &SendOptions,
    ) -> Result<Outcome, Error> {
        let (endpoint, envelope) =
            match prepare(&self.providers, credential, to, subject, body, options)? {
                Prepared::Ready { endpoint, envelope } => (endpoint, envelope),
                Prepared::Rejected(outcome) => return Ok(outcome),
            };

        let result = self.transport.send(&endpoint, credential, &envelope);
        Ok(conclude(&endpoint, result))
    }
}

/// Sends messages through an [`AsyncTransport`]
///
/// Validation and envelope construction happen inline, only the submission is awaited.
#[cfg(feature = "tokio1")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio1")))]
#[derive(Debug, Clone)]
pub struct AsyncMailer<T> {
    transport: T,
    providers: Providers,
}

#[cfg(feature = "tokio1")]
impl<T> AsyncMailer<T> {
    /// Creates a mailer using the built-in provider table
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            providers: Providers::default(),
        }
    }

    /// Replaces the table used to resolve relays
    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The table used to resolve relays
    pub fn providers(&self) -> &Providers {
        &self.providers
    }
}

#[cfg(feature = "tokio1")]
impl<T> AsyncMailer<T>
where
    T: AsyncTransport + Sync,
    T::Error: Display,
{
    /// Sends a message to a single recipient
    ///
    /// See [`Mailer::send_mail`].
    pub async fn send_mail(
        &self,
        credential: &Credential,
        to: &str,
        subject: &str,
        body: &str,
        options: &SendOptions,
    ) -> Result<Outcome, Error> {
        let recipients = [to];
        let to: &[&str] = if to.is_empty() { &[] } else { &recipients };
        self.send_bulk_email(credential, to, subject, body, options)
            .await
    }

    /// Sends one message to several primary recipients
    ///
    /// See [`Mailer::send_bulk_email`].
    pub async fn send_bulk_email<S: AsRef<str>>(
        &self,
        credential: &Credential,
        to: &[S],
        subject: &str,
        body: &str,
        options: &SendOptions,
    ) -> Result<Outcome, Error> {
        let (endpoint, envelope) =
            match prepare(&self.providers, credential, to, subject, body, options)? {
                Prepared::Ready { endpoint, envelope } => (endpoint, envelope),
                Prepared::Rejected(outcome) => return Ok(outcome),
            };

        let result = self.transport.send(&endpoint, credential, &envelope).await;
        Ok(conclude(&endpoint, result))
    }
}

enum Prepared {
    Rejected(Outcome),
    Ready {
        endpoint: Endpoint,
        envelope: Envelope,
    },
}

fn prepare<S: AsRef<str>>(
    providers: &Providers,
    credential: &Credential,
    to: &[S],
    subject: &str,
    body: &str,
    options: &SendOptions,
) -> Result<Prepared, Error> {
    if credential.email().trim().is_empty() {
        return Ok(reject(Outcome::EmailMissing));
    }
    let Ok(from) = credential.email().parse::<Address>() else {
        return Ok(reject(Outcome::WrongEmail));
    };

    if to.is_empty() {
        return Ok(reject(Outcome::EmailMissing));
    }
    let (Some(to), Some(cc), Some(bcc), Some(reply_to), Some(sender)) = (
        parse_all(to),
        parse_all(&options.cc),
        parse_all(&options.bcc),
        parse_optional(options.reply_to.as_deref()),
        parse_optional(options.sender.as_deref()),
    ) else {
        return Ok(reject(Outcome::WrongDestinationEmail));
    };

    let mut builder = Envelope::builder(from).subject(subject).body(body);
    for address in to {
        builder = builder.to(address);
    }
    for address in cc {
        builder = builder.cc(address);
    }
    for address in bcc {
        builder = builder.bcc(address);
    }
    if let Some(address) = reply_to {
        builder = builder.reply_to(address);
    }
    if let Some(address) = sender {
        builder = builder.sender(address);
    }
    for attachment in &options.attachments {
        builder = builder.attachment(attachment.clone());
    }
    let Ok(envelope) = builder.build() else {
        return Ok(reject(Outcome::EmailMissing));
    };

    let endpoint = providers.resolve(envelope.from().domain())?;

    Ok(Prepared::Ready { endpoint, envelope })
}

fn reject(outcome: Outcome) -> Prepared {
    #[cfg(feature = "tracing")]
    tracing::warn!(%outcome, "message rejected before sending");

    Prepared::Rejected(outcome)
}

/// Parses every address, `None` as soon as one is invalid
fn parse_all<S: AsRef<str>>(addresses: &[S]) -> Option<Vec<Address>> {
    addresses
        .iter()
        .map(|address| address.as_ref().parse().ok())
        .collect()
}

/// `Some(None)` when absent, `None` when present but invalid
fn parse_optional(address: Option<&str>) -> Option<Option<Address>> {
    match address {
        Some(address) => address.parse().ok().map(Some),
        None => Some(None),
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn conclude<O, E: Display>(endpoint: &Endpoint, result: Result<O, E>) -> Outcome {
    match result {
        Ok(_) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(relay = %endpoint, "message sent");

            Outcome::Successful
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(relay = %endpoint, error = %err, "failed to send message");

            Outcome::ErrorSendingMessage
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StubTransport;

    fn credential() -> Credential {
        Credential::new("nobody@gmail.com", "secret")
    }

    fn mailer() -> (Mailer<StubTransport>, StubTransport) {
        let transport = StubTransport::new_ok();
        (Mailer::new(transport.clone()), transport)
    }

    #[test]
    fn missing_credential() {
        let (mailer, transport) = mailer();
        for email in ["", "   "] {
            let outcome = mailer
                .send_mail(
                    &Credential::new(email, "secret"),
                    "hei@domain.tld",
                    "s",
                    "b",
                    &SendOptions::new(),
                )
                .unwrap();
            assert_eq!(outcome, Outcome::EmailMissing);
        }
        assert!(transport.deliveries().is_empty());
    }

    #[test]
    fn invalid_credential() {
        let (mailer, transport) = mailer();
        let outcome = mailer
            .send_mail(
                &Credential::new("nobody@@gmail.com", "secret"),
                "hei@domain.tld",
                "s",
                "b",
                &SendOptions::new(),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::WrongEmail);
        assert!(transport.deliveries().is_empty());
    }

    #[test]
    fn credential_checked_before_recipients() {
        let (mailer, _) = mailer();
        let outcome = mailer
            .send_mail(
                &Credential::new("broken", "secret"),
                "also broken",
                "s",
                "b",
                &SendOptions::new(),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::WrongEmail);
    }

    #[test]
    fn empty_recipient() {
        let (mailer, transport) = mailer();
        let outcome = mailer
            .send_mail(&credential(), "", "s", "b", &SendOptions::new())
            .unwrap();
        assert_eq!(outcome, Outcome::EmailMissing);

        let none: [&str; 0] = [];
        let outcome = mailer
            .send_bulk_email(&credential(), &none, "s", "b", &SendOptions::new())
            .unwrap();
        assert_eq!(outcome, Outcome::EmailMissing);
        assert!(transport.deliveries().is_empty());
    }

    #[test]
    fn invalid_optional_addresses() {
        let (mailer, transport) = mailer();
        let cases = [
            SendOptions::new().cc("ok@domain.tld").cc("not an address"),
            SendOptions::new().bcc("@domain.tld"),
            SendOptions::new().reply_to("reply@"),
            SendOptions::new().sender("boss@@domain.tld"),
        ];

        for options in &cases {
            let outcome = mailer
                .send_mail(&credential(), "hei@domain.tld", "s", "b", options)
                .unwrap();
            assert_eq!(outcome, Outcome::WrongDestinationEmail, "{options:?}");
        }
        assert!(transport.deliveries().is_empty());
    }

    #[test]
    fn unsupported_provider() {
        let (mailer, transport) = mailer();
        let result = mailer.send_mail(
            &Credential::new("nobody@example.com", "secret"),
            "hei@domain.tld",
            "s",
            "b",
            &SendOptions::new(),
        );
        assert_eq!(
            result,
            Err(Error::UnsupportedProvider("example.com".to_owned()))
        );
        assert!(transport.deliveries().is_empty());
    }

    #[test]
    fn custom_provider() {
        let transport = StubTransport::new_ok();
        let mailer = Mailer::new(transport.clone()).with_providers(
            Providers::new().with_endpoint("example.com", Endpoint::starttls("mx.example.com")),
        );

        let outcome = mailer
            .send_mail(
                &Credential::new("nobody@example.com", "secret"),
                "hei@domain.tld",
                "s",
                "b",
                &SendOptions::new(),
            )
            .unwrap();

        assert_eq!(outcome, Outcome::Successful);
        assert_eq!(
            transport.deliveries()[0].endpoint,
            Endpoint::starttls("mx.example.com")
        );
    }

    #[test]
    fn full_envelope() {
        let (mailer, transport) = mailer();
        let options = SendOptions::new()
            .cc("copy@domain.tld")
            .bcc("hidden@domain.tld")
            .reply_to("reply@domain.tld")
            .sender("boss@domain.tld")
            .attachment(crate::Attachment::new(b"1".to_vec(), "one", "txt"))
            .attachment(crate::Attachment::new(b"2".to_vec(), "two", "txt"));

        let outcome = mailer
            .send_mail(&credential(), "hei@domain.tld", "Subject", "<b>Body</b>", &options)
            .unwrap();
        assert_eq!(outcome, Outcome::Successful);

        let deliveries = transport.deliveries();
        assert_eq!(deliveries.len(), 1);
        let delivery = &deliveries[0];
        assert_eq!(delivery.account, "nobody@gmail.com");
        assert_eq!(delivery.endpoint, Endpoint::starttls("smtp.gmail.com"));

        let envelope = &delivery.envelope;
        assert_eq!(envelope.from().to_string(), "nobody@gmail.com");
        assert_eq!(envelope.subject(), "Subject");
        assert_eq!(envelope.body(), "<b>Body</b>");
        assert_eq!(envelope.cc()[0].to_string(), "copy@domain.tld");
        assert_eq!(envelope.bcc()[0].to_string(), "hidden@domain.tld");
        assert_eq!(
            envelope.reply_to().map(ToString::to_string).as_deref(),
            Some("reply@domain.tld")
        );
        assert_eq!(
            envelope.sender().map(ToString::to_string).as_deref(),
            Some("boss@domain.tld")
        );
        assert_eq!(
            envelope
                .attachments()
                .iter()
                .map(crate::Attachment::filename)
                .collect::<Vec<_>>(),
            ["one.txt", "two.txt"]
        );
    }

    #[test]
    fn transport_failure() {
        let transport = StubTransport::new_error();
        let mailer = Mailer::new(transport.clone());
        let outcome = mailer
            .send_mail(&credential(), "hei@domain.tld", "s", "b", &SendOptions::new())
            .unwrap();
        assert_eq!(outcome, Outcome::ErrorSendingMessage);
        assert_eq!(transport.deliveries().len(), 1);
    }
}
