use crate::fields::{
    CLOCK_BITS, CLOCK_MASK, COMPACTED_BITS, MAX_SERIALISED_LENGTH, NODE_BITS, NODE_MASK,
    SALT_BITS, TIME_MASK, VL,
};
use crate::{Variant, NODE_MULTICAST, UUID, UUID_TIME_INITIAL};

impl UUID {
    /// Serialise into a self-delimiting record of 4 to 17 bytes.
    ///
    /// Time-based RFC 4122 UUIDs take the condensed form: the fields are
    /// packed into a variable-length big-endian integer whose top byte
    /// carries a length tag, and a UUID whose node equals its derived node
    /// stores only the salt in place of the node. Every other UUID is
    /// emitted verbatim behind a `0x01` marker byte.
    #[must_use]
    pub fn serialise(&self) -> Vec<u8> {
        if self.variant() != Variant::Rfc4122 || self.version() != Some(1) {
            let mut record = Vec::with_capacity(MAX_SERIALISED_LENGTH);
            record.push(0x01);
            record.extend_from_slice(self.as_bytes());
            return record;
        }

        let node = self.node() & NODE_MASK;
        let clock = u64::from(self.clock_seq()) & CLOCK_MASK;
        let time = self.time() & TIME_MASK;

        let (compacted_time, compacted_clock, salt) = self.compacted_parts();
        let compacted_node = Self::calculate_node(compacted_time, compacted_clock, salt);

        let meat: u128 = if node == compacted_node {
            let mut meat = u128::from(compacted_time);
            meat = meat << CLOCK_BITS | u128::from(compacted_clock);
            meat = meat << SALT_BITS | u128::from(salt);
            meat << COMPACTED_BITS | 1
        } else {
            // An expanded record stores the full node; a hardware node's
            // timestamp is still rebiased so recent UUIDs stay short.
            let time = if node & NODE_MULTICAST == 0 && time != 0 {
                time.wrapping_sub(UUID_TIME_INITIAL) & TIME_MASK
            } else {
                time
            };

            let mut meat = u128::from(time);
            meat = meat << CLOCK_BITS | u128::from(clock);
            meat = meat << NODE_BITS | u128::from(node);
            meat << COMPACTED_BITS
        };

        tagged_record(meat)
    }
}

/// Lay `meat` out big-endian over at least four bytes and stamp the length
/// tag into the top byte, growing the record by one byte when neither tag
/// family fits over the payload's high bits.
#[allow(clippy::cast_possible_truncation)]
fn tagged_record(mut meat: u128) -> Vec<u8> {
    // Little-endian while building; reversed below.
    let mut record: Vec<u8> = Vec::with_capacity(MAX_SERIALISED_LENGTH);

    while meat != 0 || record.len() < 4 {
        record.push((meat & 0xff) as u8);
        meat >>= 8;
    }

    let row = record.len() - 4;
    let top = record.len() - 1;
    let [(pattern0, mask0), (pattern1, mask1)] = VL[row];

    if record[top] & mask0 == 0 {
        record[top] |= pattern0;
    } else if record[top] & mask1 == 0 {
        record[top] |= pattern1;
    } else {
        record.push(VL[row + 1][0].0);
    }

    record.reverse();
    record
}
