//! Email addresses

#[cfg(feature = "serde")]
mod serde;

mod types;

pub use self::types::{is_valid, Address, AddressError};
