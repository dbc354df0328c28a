use crate::{Variant, UUID};

impl UUID {
    /// The version number, or `None` for UUIDs outside the RFC 4122
    /// variant, where the nibble has no defined meaning.
    #[must_use]
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Rfc4122 => Some(self.bytes[6] >> 4),
            _ => None,
        }
    }
}
