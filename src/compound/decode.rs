use std::str::FromStr;

use crate::compound::is_serialised;
use crate::{base59, CompoundError, UUID};

const URN_PREFIX: &str = "urn:uuid:";

/// Decode any textual compound form into a serialised blob.
///
/// Accepts the `;`-joined canonical form, the brace-wrapped and
/// `urn:uuid:`-prefixed variants, individually braced tokens, and
/// `~`-prefixed base-59 packings (which may be mixed freely with hex
/// tokens).
///
/// # Errors
///
/// [`CompoundError::Empty`] for input with nothing to decode; otherwise
/// the error of the first token that fails to parse, or
/// [`CompoundError::BadRecords`] for a packed token whose bytes do not
/// frame as serialised records.
pub fn decode(text: &str) -> Result<Vec<u8>, CompoundError> {
    let mut text = text;

    if text
        .get(..URN_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URN_PREFIX))
    {
        text = &text[URN_PREFIX.len()..];
    } else if let Some(inner) = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        // Strip a wrapping brace pair only when the interior carries none,
        // so individually braced tokens keep theirs.
        if !inner.contains(['{', '}']) {
            text = inner;
        }
    }

    if text.is_empty() {
        return Err(CompoundError::Empty);
    }

    let mut blob = Vec::new();

    for token in text.split(';') {
        if token.len() >= 7 && token.starts_with('~') {
            let bytes = base59().decode(token)?;

            if !is_serialised(&bytes) {
                return Err(CompoundError::BadRecords);
            }

            blob.extend_from_slice(&bytes);
        } else {
            let uuid = UUID::from_str(token)?;
            blob.extend_from_slice(&uuid.serialise());
        }
    }

    Ok(blob)
}
