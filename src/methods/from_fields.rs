use crate::UUID;

impl UUID {
    /// Assemble a UUID from its RFC 4122 wire-order fields.
    ///
    /// Values are taken as-is: `time_hi_version` must already carry the
    /// version nibble and `clock_seq_hi_variant` the variant bits. Only the
    /// low 48 bits of `node` are used.
    #[must_use]
    pub fn from_fields(
        time_low: u32,
        time_mid: u16,
        time_hi_version: u16,
        clock_seq_hi_variant: u8,
        clock_seq_low: u8,
        node: u64,
    ) -> Self {
        let mut uuid = Self::nil();

        uuid.bytes[0..4].copy_from_slice(&time_low.to_be_bytes());
        uuid.bytes[4..6].copy_from_slice(&time_mid.to_be_bytes());
        uuid.bytes[6..8].copy_from_slice(&time_hi_version.to_be_bytes());
        uuid.bytes[8] = clock_seq_hi_variant;
        uuid.bytes[9] = clock_seq_low;
        uuid.bytes[10..16].copy_from_slice(&node.to_be_bytes()[2..8]);

        uuid
    }

    /// Assemble a version-1 RFC 4122 UUID from the codec's virtual fields:
    /// a 60-bit timestamp, a 14-bit clock sequence and a 48-bit node. The
    /// version nibble and variant bits are forced on.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn assemble_v1(time: u64, clock: u64, node: u64) -> Self {
        Self::from_fields(
            (time & 0xffff_ffff) as u32,
            ((time >> 32) & 0xffff) as u16,
            ((time >> 48) & 0x0fff) as u16 | 0x1000,
            ((clock >> 8) & 0x3f) as u8 | 0x80,
            (clock & 0xff) as u8,
            node,
        )
    }
}
