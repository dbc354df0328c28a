use crate::fields::{
    condensed_length, CLOCK_BITS, CLOCK_MASK, COMPACTED_BITS, MAX_SERIALISED_LENGTH,
    MIN_SERIALISED_LENGTH, NODE_BITS, NODE_MASK, SALT_BITS, SALT_MASK, TIME_MASK,
};
use crate::{SerialisedError, NODE_MULTICAST, UUID, UUID_BYTES, UUID_TIME_INITIAL};

impl UUID {
    /// Decode one record from the front of `bytes`, returning the UUID and
    /// the number of bytes consumed.
    ///
    /// A condensed record always reconstructs as a version-1 RFC 4122 UUID:
    /// the wire format stores the version and variant implicitly, so any
    /// other bits a caller might have synthesised into a condensed blob are
    /// normalised away.
    ///
    /// # Errors
    ///
    /// [`SerialisedError::Truncated`] when `bytes` ends inside the record,
    /// [`SerialisedError::BadTag`] when the first byte matches no length
    /// tag.
    pub fn unserialise(bytes: &[u8]) -> Result<(Self, usize), SerialisedError> {
        if bytes.len() < MIN_SERIALISED_LENGTH {
            return Err(SerialisedError::Truncated);
        }

        if bytes[0] == 0x01 {
            Self::unserialise_full(bytes)
        } else {
            Self::unserialise_condensed(bytes)
        }
    }

    fn unserialise_full(bytes: &[u8]) -> Result<(Self, usize), SerialisedError> {
        if bytes.len() < MAX_SERIALISED_LENGTH {
            return Err(SerialisedError::Truncated);
        }

        let mut raw = [0u8; UUID_BYTES];
        raw.copy_from_slice(&bytes[1..=UUID_BYTES]);

        Ok((Self::from_bytes(raw), MAX_SERIALISED_LENGTH))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn unserialise_condensed(bytes: &[u8]) -> Result<(Self, usize), SerialisedError> {
        let (length, mask) =
            condensed_length(bytes[0]).ok_or(SerialisedError::BadTag(bytes[0]))?;

        if bytes.len() < length {
            return Err(SerialisedError::Truncated);
        }

        let mut meat = u128::from(bytes[0] & !mask);

        for &byte in &bytes[1..length] {
            meat = meat << 8 | u128::from(byte);
        }

        let compacted = meat & 1 != 0;
        meat >>= COMPACTED_BITS;

        let (time, clock, node) = if compacted {
            let salt = meat as u64 & SALT_MASK;
            meat >>= SALT_BITS;
            let clock = meat as u64 & CLOCK_MASK;
            meat >>= CLOCK_BITS;
            let time = meat as u64 & TIME_MASK;

            (time, clock, Self::calculate_node(time, clock, salt))
        } else {
            let node = meat as u64 & NODE_MASK;
            meat >>= NODE_BITS;
            let clock = meat as u64 & CLOCK_MASK;
            meat >>= CLOCK_BITS;

            (meat as u64 & TIME_MASK, clock, node)
        };

        let time = if time == 0 {
            time
        } else if compacted {
            // The compact form dropped the low clock-width time bits.
            (time << CLOCK_BITS).wrapping_add(UUID_TIME_INITIAL) & TIME_MASK
        } else if node & NODE_MULTICAST == 0 {
            time.wrapping_add(UUID_TIME_INITIAL) & TIME_MASK
        } else {
            time
        };

        Ok((Self::assemble_v1(time, clock, node), length))
    }
}
