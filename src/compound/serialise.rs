use crate::UUID;

/// Serialise a sequence of UUIDs into one blob, records back to back.
#[must_use]
pub fn serialise(uuids: &[UUID]) -> Vec<u8> {
    let mut blob = Vec::new();

    for uuid in uuids {
        blob.extend_from_slice(&uuid.serialise());
    }

    blob
}
