pub mod compound;

mod base_x;
mod error;
mod features;
mod fields;
mod helpers;
mod implementations;
mod methods;
mod variant;

pub use base_x::{base59, BaseX, BASE59_ALPHABET, BASE59_TRANSLATE};
pub use compound::Representation;
pub use error::{BaseXError, CompoundError, SerialisedError, UuidDataError, UuidParseError};
pub use fields::{NODE_MULTICAST, UUID_TIME_EPOCH, UUID_TIME_INITIAL, UUID_TIME_YEAR};
pub use helpers::{fnv1a, xor_fold, Mt19937};
pub use variant::Variant;

pub const UUID_BYTES: usize = 16;

/// A UUID represented as a 16-byte array
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UUID {
    bytes: [u8; UUID_BYTES],
}
