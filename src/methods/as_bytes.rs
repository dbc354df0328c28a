use crate::{UUID, UUID_BYTES};

impl UUID {
    /// The raw big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UUID_BYTES] {
        &self.bytes
    }
}
