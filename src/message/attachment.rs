use mime::Mime;

/// File attached to a message
///
/// ```
/// use relaymail::Attachment;
///
/// let report = Attachment::new(b"%PDF-1.7".to_vec(), "report", ".pdf");
/// assert_eq!(report.filename(), "report.pdf");
/// assert_eq!(report.content_type().essence_str(), "application/pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    content: Vec<u8>,
    name: String,
    extension: String,
}

impl Attachment {
    /// Creates an attachment from its raw content, display name and extension
    ///
    /// The extension may be given with or without its leading dot, or left empty.
    pub fn new<N: Into<String>, E: Into<String>>(content: Vec<u8>, name: N, extension: E) -> Self {
        Self {
            content,
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// Raw content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Display name, without extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension, as given
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name shown to the recipient
    pub fn filename(&self) -> String {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, extension)
        }
    }

    /// Content type guessed from the extension
    ///
    /// Unknown extensions are sent as `application/octet-stream`.
    pub fn content_type(&self) -> Mime {
        mime_guess::from_ext(self.extension.trim_start_matches('.')).first_or_octet_stream()
    }
}
