use crate::fields::{CLOCK_BITS, CLOCK_MASK, NODE_MASK, SALT_BITS, SALT_MASK, TIME_MASK};
use crate::helpers::{fnv1a, xor_fold, Mt19937};
use crate::{Variant, NODE_MULTICAST, UUID, UUID_TIME_INITIAL};

impl UUID {
    /// Derive a 48-bit node from a `(time, clock, salt)` triple.
    ///
    /// The result always carries the multicast bit and ends in the salt;
    /// the remaining bits come from a Mersenne Twister seeded by FNV-1a over
    /// the inputs, so the mapping is identical on every platform. The
    /// all-zero triple maps to the bare multicast bit (the anonymous node).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn calculate_node(time: u64, clock: u64, salt: u64) -> u64 {
        if time == 0 && clock == 0 && salt == 0 {
            return NODE_MULTICAST;
        }

        let seed = (fnv1a(time) ^ fnv1a(clock) ^ fnv1a(salt)) as u32;
        let mut mt = Mt19937::new(seed);
        let node = u64::from(mt.next_u32()) << 32 | u64::from(mt.next_u32());

        (node & NODE_MASK & !SALT_MASK) | salt | NODE_MULTICAST
    }

    /// The node [`UUID::calculate_node`] yields for this UUID's own
    /// compacted triple, or `None` for anything but a time-based RFC 4122
    /// UUID.
    #[must_use]
    pub fn calculated_node(&self) -> Option<u64> {
        if self.variant() != Variant::Rfc4122 || self.version() != Some(1) {
            return None;
        }

        let (time, clock, salt) = self.compacted_parts();

        Some(Self::calculate_node(time, clock, salt))
    }

    /// Whether this UUID's node is exactly the derived one, i.e. whether it
    /// serialises in the short compact form.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.calculated_node() == Some(self.node())
    }

    /// This UUID's `(compacted_time, compacted_clock, salt)` triple.
    ///
    /// The timestamp is rebiased against the codec epoch and split at the
    /// clock width; the clock is whitened with the dropped low time bits;
    /// the salt comes from the node's low bits when the multicast bit is
    /// set, and from a folded hash of the node otherwise.
    pub(crate) fn compacted_parts(&self) -> (u64, u64, u64) {
        let node = self.node() & NODE_MASK;
        let clock = u64::from(self.clock_seq()) & CLOCK_MASK;
        let time = self.time() & TIME_MASK;

        let mut compacted_time = if time == 0 {
            0
        } else {
            time.wrapping_sub(UUID_TIME_INITIAL) & TIME_MASK
        };

        let compacted_time_clock = compacted_time & CLOCK_MASK;
        compacted_time >>= CLOCK_BITS;

        let compacted_clock = clock ^ compacted_time_clock;

        let salt = if node & NODE_MULTICAST == 0 {
            xor_fold(fnv1a(node), SALT_BITS) & SALT_MASK
        } else {
            node & SALT_MASK
        };

        (compacted_time, compacted_clock, salt)
    }
}
