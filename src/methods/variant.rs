use crate::{Variant, UUID};

impl UUID {
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self.bytes[8] {
            0x00..=0x7f => Variant::Ncs,
            0x80..=0xbf => Variant::Rfc4122,
            0xc0..=0xdf => Variant::Microsoft,
            0xe0..=0xff => Variant::Future,
        }
    }
}
