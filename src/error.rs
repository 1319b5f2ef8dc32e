use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

/// Hard failures of the send pipeline
///
/// Everything else (invalid addresses, transport failures) is reported as an
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No relay is known for the domain of the sending account
    UnsupportedProvider(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::UnsupportedProvider(domain) => {
                write!(fmt, "no smtp relay known for provider domain `{domain}`")
            }
        }
    }
}

impl StdError for Error {}
