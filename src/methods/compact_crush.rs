use crate::fields::{CLOCK_BITS, TIME_MASK};
use crate::{Variant, UUID, UUID_TIME_INITIAL};

impl UUID {
    /// The nearest compact relative of a time-based UUID: same rebiased
    /// timestamp (rounded down to the stored clock-width granularity) and
    /// whitened clock, with the node replaced by the derived one. The
    /// result serialises in 4 to 8 bytes.
    ///
    /// Returns `None` for UUIDs outside version 1 / RFC 4122.
    #[must_use]
    pub fn compact_crush(&self) -> Option<Self> {
        if self.variant() != Variant::Rfc4122 || self.version() != Some(1) {
            return None;
        }

        let (compacted_time, compacted_clock, salt) = self.compacted_parts();
        let node = Self::calculate_node(compacted_time, compacted_clock, salt);

        let time = if compacted_time == 0 {
            0
        } else {
            (compacted_time << CLOCK_BITS).wrapping_add(UUID_TIME_INITIAL) & TIME_MASK
        };

        Some(Self::assemble_v1(time, compacted_clock, node))
    }
}
