//! Resolution of the SMTP relay serving a mail provider
//!
//! Each supported provider is reached on the submission port with STARTTLS, except
//! Yahoo which only accepts implicit TLS on the submissions port.
//!
//! | domain        | relay                 | port | security   |
//! |---------------|-----------------------|------|------------|
//! | `live.com`    | `smtp.live.com`       | 587  | STARTTLS   |
//! | `hotmail.com` | `smtp.hotmail.com`    | 587  | STARTTLS   |
//! | `outlook.com` | `smtp.live.com`       | 587  | STARTTLS   |
//! | `gmail.com`   | `smtp.gmail.com`      | 587  | STARTTLS   |
//! | `yahoo.com`   | `smtp.mail.yahoo.com` | 465  | TLS        |

use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use idna::domain_to_ascii;

use crate::Error;

/// Submission port, used with STARTTLS
pub const SUBMISSION_PORT: u16 = 587;
/// Submissions port, used with implicit TLS
pub const SUBMISSIONS_PORT: u16 = 465;

/// How the connection to a relay is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Security {
    /// Plain connection upgraded with STARTTLS, failing if the upgrade is refused
    StartTls,
    /// TLS from the first byte
    Wrapper,
}

/// SMTP relay a message is submitted to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    /// Relay host name
    pub host: String,
    /// Relay port
    pub port: u16,
    /// Connection security
    pub security: Security,
}

impl Endpoint {
    /// Creates an endpoint
    pub fn new<H: Into<String>>(host: H, port: u16, security: Security) -> Self {
        Self {
            host: host.into(),
            port,
            security,
        }
    }

    /// Relay reached with STARTTLS on the submission port
    pub fn starttls<H: Into<String>>(host: H) -> Self {
        Self::new(host, SUBMISSION_PORT, Security::StartTls)
    }

    /// Relay reached with implicit TLS on the submissions port
    pub fn wrapper<H: Into<String>>(host: H) -> Self {
        Self::new(host, SUBMISSIONS_PORT, Security::Wrapper)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Mail providers with a built-in relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Provider {
    /// `live.com`
    Live,
    /// `hotmail.com`
    Hotmail,
    /// `outlook.com`
    Outlook,
    /// `gmail.com`
    Gmail,
    /// `yahoo.com`
    Yahoo,
}

impl Provider {
    /// All supported providers
    pub const ALL: [Provider; 5] = [
        Provider::Live,
        Provider::Hotmail,
        Provider::Outlook,
        Provider::Gmail,
        Provider::Yahoo,
    ];

    /// Finds the provider owning an email domain, ignoring case
    ///
    /// ```
    /// use relaymail::Provider;
    ///
    /// assert_eq!(Provider::from_domain("Gmail.com"), Some(Provider::Gmail));
    /// assert_eq!(Provider::from_domain("example.com"), None);
    /// ```
    pub fn from_domain(domain: &str) -> Option<Provider> {
        let domain = normalize(domain)?;
        Self::ALL.into_iter().find(|p| p.domain() == domain)
    }

    /// Email domain of the provider
    pub fn domain(self) -> &'static str {
        match self {
            Provider::Live => "live.com",
            Provider::Hotmail => "hotmail.com",
            Provider::Outlook => "outlook.com",
            Provider::Gmail => "gmail.com",
            Provider::Yahoo => "yahoo.com",
        }
    }

    /// Relay serving the provider
    pub fn endpoint(self) -> Endpoint {
        match self {
            Provider::Live | Provider::Outlook => Endpoint::starttls("smtp.live.com"),
            Provider::Hotmail => Endpoint::starttls("smtp.hotmail.com"),
            Provider::Gmail => Endpoint::starttls("smtp.gmail.com"),
            Provider::Yahoo => Endpoint::wrapper("smtp.mail.yahoo.com"),
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Live => "Live",
            Provider::Hotmail => "Hotmail",
            Provider::Outlook => "Outlook",
            Provider::Gmail => "Gmail",
            Provider::Yahoo => "Yahoo",
        })
    }
}

impl FromStr for Provider {
    type Err = Error;

    /// Parses a provider by name (`"gmail"`) or domain (`"gmail.com"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_domain(s))
            .ok_or_else(|| Error::UnsupportedProvider(s.to_owned()))
    }
}

/// Resolves the relay for an email domain using the built-in provider table
///
/// ```
/// use relaymail::provider::{resolve, Security};
///
/// let endpoint = resolve("gmail.com").unwrap();
/// assert_eq!(endpoint.host, "smtp.gmail.com");
/// assert_eq!(endpoint.port, 587);
/// assert_eq!(endpoint.security, Security::StartTls);
///
/// assert!(resolve("unknown.tld").is_err());
/// ```
pub fn resolve(domain: &str) -> Result<Endpoint, Error> {
    Provider::from_domain(domain)
        .map(Provider::endpoint)
        .ok_or_else(|| Error::UnsupportedProvider(domain.to_owned()))
}

/// Relay lookup table
///
/// Starts from the built-in providers; custom domains can be added and built-in ones
/// overridden.
///
/// ```
/// use relaymail::{Endpoint, Providers};
///
/// let providers = Providers::default()
///     .with_endpoint("example.com", Endpoint::starttls("mail.example.com"));
///
/// assert_eq!(providers.resolve("example.com").unwrap().host, "mail.example.com");
/// assert_eq!(providers.resolve("gmail.com").unwrap().host, "smtp.gmail.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Providers {
    #[cfg_attr(feature = "serde", serde(default))]
    custom: HashMap<String, Endpoint>,
}

impl Providers {
    /// Table containing only the built-in providers
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `domain` to `endpoint`, overriding any previous entry
    pub fn with_endpoint(mut self, domain: &str, endpoint: Endpoint) -> Self {
        self.insert(domain, endpoint);
        self
    }

    /// Routes `domain` to `endpoint`, returning the custom entry it replaces
    pub fn insert(&mut self, domain: &str, endpoint: Endpoint) -> Option<Endpoint> {
        let key = normalize(domain).unwrap_or_else(|| domain.to_ascii_lowercase());
        self.custom.insert(key, endpoint)
    }

    /// Resolves the relay for an email domain
    ///
    /// Custom entries win over the built-in table.
    pub fn resolve(&self, domain: &str) -> Result<Endpoint, Error> {
        normalize(domain)
            .and_then(|key| self.custom.get(&key).cloned())
            .map_or_else(|| resolve(domain), Ok)
    }
}

fn normalize(domain: &str) -> Option<String> {
    domain_to_ascii(domain.trim()).ok()
}
