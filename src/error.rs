#![allow(clippy::module_name_repetitions)]

/// Failure while parsing a textual UUID.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidParseError {
    #[error("expected 32 or 36 significant characters")]
    InvalidLength,

    #[error("invalid character {ch:?} at offset {idx}")]
    InvalidCharacter { ch: char, idx: usize },

    #[error("mismatched braces")]
    InvalidBraces,

    #[error("hyphen at unexpected offset")]
    InvalidHyphen,
}

/// Failure while decoding serialised records.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialisedError {
    #[error("input ends inside a record")]
    Truncated,

    #[error("byte {0:#04x} matches no length tag")]
    BadTag(u8),
}

/// Failure while decoding base-X text.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseXError {
    #[error("character {0:?} is outside the alphabet")]
    InvalidCharacter(char),

    #[error("checksum digit does not match")]
    InvalidChecksum,
}

/// Failure while packing caller data into a UUID.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidDataError {
    #[error("a UUID can carry at most 15 bytes of data")]
    TooLarge,
}

/// Failure while decoding a textual compound expression.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundError {
    #[error("empty compound expression")]
    Empty,

    #[error(transparent)]
    Uuid(#[from] UuidParseError),

    #[error(transparent)]
    BaseX(#[from] BaseXError),

    #[error("packed token does not hold serialised records")]
    BadRecords,
}
