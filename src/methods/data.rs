use crate::{Variant, NODE_MULTICAST, UUID};

impl UUID {
    /// Recover the payload packed by [`UUID::from_data`].
    ///
    /// Returns the empty vector for any UUID that is not a time-based
    /// RFC 4122 UUID with the multicast bit set, i.e. anything this codec
    /// could not have built from data.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn data(&self) -> Vec<u8> {
        if self.variant() != Variant::Rfc4122
            || self.version() != Some(1)
            || self.node() & NODE_MULTICAST == 0
        {
            return Vec::new();
        }

        let node = self.node();

        let mut num = u128::from(u16::from_be_bytes([self.bytes[6], self.bytes[7]]) & 0x0fff);
        num = num << 16 | u128::from(u16::from_be_bytes([self.bytes[4], self.bytes[5]]));
        num = num << 32
            | u128::from(u32::from_be_bytes([
                self.bytes[0],
                self.bytes[1],
                self.bytes[2],
                self.bytes[3],
            ]));
        num = num << 6 | u128::from(self.bytes[8] & 0x3f);
        num = num << 8 | u128::from(self.bytes[9]);
        num = num << 47 | u128::from(((node & 0xfe00_0000_0000) >> 1) | (node & 0x00ff_ffff_ffff));

        let mut data = Vec::new();

        while num != 0 {
            data.push((num & 0xff) as u8);
            num >>= 8;
        }

        data.reverse();
        data
    }
}
