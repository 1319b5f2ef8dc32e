use crate::Attachment;

/// Optional parts of a send: copies, reply-to, sender and attachments
///
/// Addresses are kept as given and only validated when the message is sent.
///
/// ```
/// use relaymail::{Attachment, SendOptions};
///
/// let options = SendOptions::new()
///     .reply_to("support@domain.tld")
///     .cc("team@domain.tld")
///     .bcc("archive@domain.tld")
///     .attachment(Attachment::new(b"a,b".to_vec(), "export", "csv"));
///
/// assert_eq!(options.cc, ["team@domain.tld"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SendOptions {
    /// Address replies should go to
    pub reply_to: Option<String>,
    /// Address the message is sent on behalf of
    pub sender: Option<String>,
    /// Carbon copy recipients
    pub cc: Vec<String>,
    /// Blind carbon copy recipients
    pub bcc: Vec<String>,
    /// Attachments, sent in this order
    pub attachments: Vec<Attachment>,
}

impl SendOptions {
    /// No copies, no reply-to, no sender, no attachments
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply-to address
    pub fn reply_to<S: Into<String>>(mut self, address: S) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Sets the address the message is sent on behalf of
    pub fn sender<S: Into<String>>(mut self, address: S) -> Self {
        self.sender = Some(address.into());
        self
    }

    /// Adds a carbon copy recipient
    pub fn cc<S: Into<String>>(mut self, address: S) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Adds a blind carbon copy recipient
    pub fn bcc<S: Into<String>>(mut self, address: S) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Appends an attachment
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}
