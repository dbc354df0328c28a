use crate::compound::unserialise;
use crate::{base59, SerialisedError};

/// The textual shapes a serialised blob can be rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    /// The `~`-prefixed base-59 packing when the blob is eligible,
    /// falling back to `;`-joined canonical hex.
    Encoded,
    /// Each UUID in braces: `{u1};{u2};…`.
    Guid,
    /// `urn:uuid:u1;u2;…`.
    Urn,
}

/// Render a serialised blob as text.
///
/// # Errors
///
/// Any [`SerialisedError`] raised while recovering the UUIDs; a packed
/// `Encoded` rendering never fails on a well-formed blob.
pub fn encode(blob: &[u8], representation: Representation) -> Result<String, SerialisedError> {
    match representation {
        Representation::Encoded => {
            if packable(blob) {
                return Ok(format!("~{}", base59().encode(blob)));
            }

            join(blob, false)
        }
        Representation::Guid => join(blob, true),
        Representation::Urn => Ok(format!("urn:uuid:{}", join(blob, false)?)),
    }
}

/// The packing heuristic: no embedded full records, and the blob must end
/// on a compact record or carry the marker bit an expanded tail leaves six
/// bytes from the end.
fn packable(blob: &[u8]) -> bool {
    match blob {
        [] | [0x01, ..] => false,
        [.., last] => last & 1 != 0 || blob.len() >= 6 && blob[blob.len() - 6] & 2 != 0,
    }
}

fn join(blob: &[u8], braced: bool) -> Result<String, SerialisedError> {
    let rendered: Vec<String> = unserialise(blob)?
        .iter()
        .map(|uuid| {
            if braced {
                format!("{{{uuid}}}")
            } else {
                uuid.to_string()
            }
        })
        .collect();

    Ok(rendered.join(";"))
}
