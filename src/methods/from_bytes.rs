use crate::{UUID, UUID_BYTES};

impl UUID {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; UUID_BYTES]) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use crate::UUID;

    #[test]
    fn round_trips_through_as_bytes() {
        let bytes = *b"\x55\x0e\x84\x00\xe2\x9b\x41\xd4\xa7\x16\x44\x66\x55\x44\x00\x00";
        assert_eq!(UUID::from_bytes(bytes).as_bytes(), &bytes);
    }
}
