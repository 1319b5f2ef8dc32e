//! Validation and representation of email addresses

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

// Local part: word groups joined by a single `.`, `-`, `+` or `'`.
// Domain: at least two dot-separated labels, hyphens only inside a label.
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\A[A-Za-z0-9_]+(?:[-+.'][A-Za-z0-9_]+)*@[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*(?:\.[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*)+\z",
    )
    .unwrap()
});

/// Checks that `address` is a syntactically valid `user@domain.tld` address.
///
/// The whole string has to match: leading or trailing garbage, doubled separators,
/// missing domain labels and non-ASCII characters are all rejected. No DNS lookup is
/// performed.
///
/// ```
/// use relaymail::address::is_valid;
///
/// assert!(is_valid("a.b+c@sub.domain.co"));
/// assert!(!is_valid("a@@b.com"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// A syntactically valid email address.
///
/// An `Address` can only be created through [`is_valid`], so holding one means the
/// string has already been checked.
///
/// **NOTE**: Enable feature "serde" to be able to serialize/deserialize it using [serde](https://serde.rs/).
///
/// ```
/// use relaymail::Address;
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let address = "user@email.com".parse::<Address>()?;
/// assert_eq!(address.user(), "user");
/// assert_eq!(address.domain(), "email.com");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Address {
    /// Complete address
    serialized: String,
    /// Index into `serialized` before the '@'
    at_start: usize,
}

impl Address {
    /// Creates a new address from a user and a domain.
    ///
    /// ```
    /// use relaymail::Address;
    ///
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let address = Address::new("user", "email.com")?;
    /// assert_eq!(address, "user@email.com".parse()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new<U: AsRef<str>, D: AsRef<str>>(user: U, domain: D) -> Result<Self, AddressError> {
        format!("{}@{}", user.as_ref(), domain.as_ref()).try_into()
    }

    /// Gets the user portion of the `Address`.
    pub fn user(&self) -> &str {
        &self.serialized[..self.at_start]
    }

    /// Gets the domain portion of the `Address`.
    pub fn domain(&self) -> &str {
        &self.serialized[self.at_start + 1..]
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.serialized)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(val: &str) -> Result<Self, AddressError> {
        let at_start = check_address(val)?;
        Ok(Address {
            serialized: val.into(),
            at_start,
        })
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(serialized: String) -> Result<Self, AddressError> {
        let at_start = check_address(&serialized)?;
        Ok(Address {
            serialized,
            at_start,
        })
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.serialized
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.serialized
    }
}

fn check_address(val: &str) -> Result<usize, AddressError> {
    if val.is_empty() {
        return Err(AddressError::Empty);
    }
    let at_start = val.find('@').ok_or(AddressError::MissingParts)?;
    if !is_valid(val) {
        return Err(AddressError::Invalid);
    }
    Ok(at_start)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
/// Errors in email addresses parsing
pub enum AddressError {
    /// Empty string
    Empty,
    /// Missing '@' between user and domain
    MissingParts,
    /// User or domain does not match the address grammar
    Invalid,
}

impl Error for AddressError {}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AddressError::Empty => f.write_str("Empty email address"),
            AddressError::MissingParts => f.write_str("Missing domain or user"),
            AddressError::Invalid => f.write_str("Invalid email address"),
        }
    }
}
