use std::fmt::{self, Debug, Formatter};

/// Account used to authenticate against the relay
///
/// The email address also selects the relay: its domain is looked up in the
/// provider table.
///
/// The password is never printed by the `Debug` implementation.
///
/// ```
/// use relaymail::Credential;
///
/// let credential = Credential::new("nobody@gmail.com", "hunter2");
/// assert_eq!(credential.email(), "nobody@gmail.com");
/// assert!(!format!("{credential:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credential {
    email: String,
    password: String,
}

impl Credential {
    /// Creates a credential from an email address and its password
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Credential {
        Credential {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email address of the sending account
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password of the sending account
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
