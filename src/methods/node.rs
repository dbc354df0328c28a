use crate::UUID;

impl UUID {
    /// The 48-bit node field.
    #[must_use]
    pub const fn node(&self) -> u64 {
        u64::from_be_bytes([
            0,
            0,
            self.bytes[10],
            self.bytes[11],
            self.bytes[12],
            self.bytes[13],
            self.bytes[14],
            self.bytes[15],
        ])
    }
}
