use crate::{UuidDataError, NODE_MULTICAST, UUID};

impl UUID {
    /// Pack up to 15 bytes of caller data into a well-formed time-based
    /// RFC 4122 UUID.
    ///
    /// The payload is read as one big-endian integer and spread over the
    /// UUID's variable bits, splitting around the node's multicast bit,
    /// which is forced on so [`UUID::data`] can recognise the result. Such
    /// UUIDs condense, but never compact.
    ///
    /// # Errors
    ///
    /// [`UuidDataError::TooLarge`] when the payload exceeds 15 bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_data(data: &[u8]) -> Result<Self, UuidDataError> {
        if data.len() > 15 {
            return Err(UuidDataError::TooLarge);
        }

        let mut num: u128 = 0;

        for &byte in data {
            num = num << 8 | u128::from(byte);
        }

        let node = ((num << 1) as u64 & 0xfe00_0000_0000)
            | (num as u64 & 0x00ff_ffff_ffff)
            | NODE_MULTICAST;
        num >>= 47;

        let clock_seq_low = (num & 0xff) as u8;
        num >>= 8;
        let clock_seq_hi_variant = (num & 0x3f) as u8 | 0x80;
        num >>= 6;
        let time_low = (num & 0xffff_ffff) as u32;
        num >>= 32;
        let time_mid = (num & 0xffff) as u16;
        num >>= 16;
        let time_hi_version = (num & 0x0fff) as u16 | 0x1000;
        num >>= 12;

        if num != 0 {
            return Err(UuidDataError::TooLarge);
        }

        Ok(Self::from_fields(
            time_low,
            time_mid,
            time_hi_version,
            clock_seq_hi_variant,
            clock_seq_low,
            node,
        ))
    }
}
