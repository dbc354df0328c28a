use crate::fields::condensed_length;
use crate::{SerialisedError, UUID};

/// Split a blob into its records and decode every one.
///
/// The empty blob holds zero records. A blob that ends inside a record is
/// rejected as a whole; no partial result is returned.
///
/// # Errors
///
/// Any [`SerialisedError`] raised by a record.
pub fn unserialise(mut blob: &[u8]) -> Result<Vec<UUID>, SerialisedError> {
    let mut uuids = Vec::new();

    while !blob.is_empty() {
        let (uuid, consumed) = UUID::unserialise(blob)?;
        uuids.push(uuid);
        blob = &blob[consumed..];
    }

    Ok(uuids)
}

/// Whether `blob` frames as one or more complete serialised records. Only
/// the length tags are examined, not the record contents.
#[must_use]
pub fn is_serialised(mut blob: &[u8]) -> bool {
    if blob.is_empty() {
        return false;
    }

    while !blob.is_empty() {
        let length = if blob[0] == 0x01 {
            17
        } else {
            match condensed_length(blob[0]) {
                Some((length, _)) => length,
                None => return false,
            }
        };

        if blob.len() < length {
            return false;
        }

        blob = &blob[length..];
    }

    true
}
