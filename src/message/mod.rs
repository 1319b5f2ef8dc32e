//! Messages ready to be handed to a transport
//!
//! An [`Envelope`] only holds [`Address`] values, so every address it carries has been
//! validated before the envelope exists.
//!
//! ```rust
//! use relaymail::{Attachment, Envelope};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let envelope = Envelope::builder("nobody@domain.tld".parse()?)
//!     .to("hei@domain.tld".parse()?)
//!     .cc("yuin@domain.tld".parse()?)
//!     .subject("Happy new year")
//!     .body("<p>Be happy!</p>")
//!     .attachment(Attachment::new(b"hello".to_vec(), "greeting", "txt"))
//!     .build()?;
//!
//! assert_eq!(envelope.to().len(), 1);
//! assert_eq!(envelope.attachments()[0].filename(), "greeting.txt");
//! # Ok(())
//! # }
//! ```

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

pub use self::attachment::Attachment;
use crate::Address;

mod attachment;

/// Importance of a message, as advertised to the recipient's client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Urgent
    #[default]
    High,
    /// Regular
    Normal,
    /// Not urgent
    Low,
}

impl Priority {
    /// Value of the `X-Priority` header
    pub fn x_priority(self) -> &'static str {
        match self {
            Priority::High => "1",
            Priority::Normal => "3",
            Priority::Low => "5",
        }
    }
}

/// Fully assembled message
///
/// The body is HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    from: Address,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    reply_to: Option<Address>,
    sender: Option<Address>,
    subject: String,
    body: String,
    priority: Priority,
    attachments: Vec<Attachment>,
}

impl Envelope {
    /// Starts building an envelope sent from `from`
    pub fn builder(from: Address) -> EnvelopeBuilder {
        EnvelopeBuilder::new(from)
    }

    /// Author of the message
    pub fn from(&self) -> &Address {
        &self.from
    }

    /// Primary recipients, in the order they were added
    ///
    /// Never empty.
    pub fn to(&self) -> &[Address] {
        &self.to
    }

    /// Carbon copy recipients
    pub fn cc(&self) -> &[Address] {
        &self.cc
    }

    /// Blind carbon copy recipients
    pub fn bcc(&self) -> &[Address] {
        &self.bcc
    }

    /// Address replies should go to
    pub fn reply_to(&self) -> Option<&Address> {
        self.reply_to.as_ref()
    }

    /// Address the message is sent on behalf of
    pub fn sender(&self) -> Option<&Address> {
        self.sender.as_ref()
    }

    /// Subject line
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// HTML body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Priority of the message
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Attachments, in the order they were added
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Every address the message is delivered to: to, cc then bcc
    pub fn recipients(&self) -> impl Iterator<Item = &Address> {
        self.to.iter().chain(&self.cc).chain(&self.bcc)
    }
}

/// Builder for [`Envelope`]
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    envelope: Envelope,
}

impl EnvelopeBuilder {
    fn new(from: Address) -> Self {
        Self {
            envelope: Envelope {
                from,
                to: Vec::new(),
                cc: Vec::new(),
                bcc: Vec::new(),
                reply_to: None,
                sender: None,
                subject: String::new(),
                body: String::new(),
                priority: Priority::default(),
                attachments: Vec::new(),
            },
        }
    }

    /// Adds a primary recipient
    pub fn to(mut self, address: Address) -> Self {
        self.envelope.to.push(address);
        self
    }

    /// Adds a carbon copy recipient
    pub fn cc(mut self, address: Address) -> Self {
        self.envelope.cc.push(address);
        self
    }

    /// Adds a blind carbon copy recipient
    pub fn bcc(mut self, address: Address) -> Self {
        self.envelope.bcc.push(address);
        self
    }

    /// Sets the `Reply-To` address
    pub fn reply_to(mut self, address: Address) -> Self {
        self.envelope.reply_to = Some(address);
        self
    }

    /// Sets the `Sender` address
    pub fn sender(mut self, address: Address) -> Self {
        self.envelope.sender = Some(address);
        self
    }

    /// Sets the subject line
    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.envelope.subject = subject.into();
        self
    }

    /// Sets the HTML body
    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.envelope.body = body.into();
        self
    }

    /// Sets the priority, `High` by default
    pub fn priority(mut self, priority: Priority) -> Self {
        self.envelope.priority = priority;
        self
    }

    /// Appends an attachment
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.envelope.attachments.push(attachment);
        self
    }

    /// Builds the envelope
    ///
    /// # Errors
    ///
    /// If no primary recipient was added.
    pub fn build(self) -> Result<Envelope, EnvelopeError> {
        if self.envelope.to.is_empty() {
            return Err(EnvelopeError::MissingTo);
        }
        Ok(self.envelope)
    }
}

/// Error building an [`Envelope`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnvelopeError {
    /// Missing primary recipient
    MissingTo,
}

impl Display for EnvelopeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            EnvelopeError::MissingTo => {
                fmt.write_str("missing destination address, invalid envelope")
            }
        }
    }
}

impl StdError for EnvelopeError {}
