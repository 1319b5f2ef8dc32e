use std::fmt::{self, Display, Formatter};

/// Result of a send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The relay accepted the message
    Successful,
    /// A recipient, copy, reply-to or sender address is invalid
    WrongDestinationEmail,
    /// The credential address is invalid
    WrongEmail,
    /// The credential address or the primary recipient is missing
    EmailMissing,
    /// The relay could not be reached or refused the message
    ErrorSendingMessage,
}

/// Language of outcome messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English
    #[default]
    English,
    /// Spanish
    Spanish,
}

impl Outcome {
    /// Returns true if the message was accepted
    pub fn is_success(self) -> bool {
        self == Outcome::Successful
    }

    /// Stable numeric code of the outcome
    ///
    /// | code | outcome                 |
    /// |------|-------------------------|
    /// | 1    | `Successful`            |
    /// | 2    | `WrongDestinationEmail` |
    /// | 3    | `WrongEmail`            |
    /// | 4    | `ErrorSendingMessage`   |
    /// | 5    | `EmailMissing`          |
    pub fn code(self) -> u8 {
        match self {
            Outcome::Successful => 1,
            Outcome::WrongDestinationEmail => 2,
            Outcome::WrongEmail => 3,
            Outcome::ErrorSendingMessage => 4,
            Outcome::EmailMissing => 5,
        }
    }

    /// Human readable description
    ///
    /// ```
    /// use relaymail::{Locale, Outcome};
    ///
    /// assert_eq!(
    ///     Outcome::Successful.message(Locale::Spanish),
    ///     "Mensaje enviado exitosamente"
    /// );
    /// ```
    pub fn message(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Outcome::Successful) => "Message sent successfully",
            (Locale::English, Outcome::WrongDestinationEmail) => {
                "The destination email is incorrect"
            }
            (Locale::English, Outcome::WrongEmail) => "The email is incorrect",
            (Locale::English, Outcome::EmailMissing) => "The email is missing",
            (Locale::English, Outcome::ErrorSendingMessage) => {
                "There was an error sending the message"
            }
            (Locale::Spanish, Outcome::Successful) => "Mensaje enviado exitosamente",
            (Locale::Spanish, Outcome::WrongDestinationEmail) => {
                "El email de destino es incorrecto"
            }
            (Locale::Spanish, Outcome::WrongEmail) => "El email es incorrecto",
            (Locale::Spanish, Outcome::EmailMissing) => "Falta el email",
            (Locale::Spanish, Outcome::ErrorSendingMessage) => {
                "Hubo un error al enviar el mensaje"
            }
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Locale::English))
    }
}
