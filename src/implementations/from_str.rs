use std::str::FromStr;

use crate::{UuidParseError, UUID, UUID_BYTES};

/// Offsets of the hyphens in the canonical 36-character form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const URN_PREFIX: &str = "urn:uuid:";

impl FromStr for UUID {
    type Err = UuidParseError;

    /// Parse any standard UUID spelling: the canonical hyphenated form, the
    /// bare 32-digit form, either wrapped in braces, and either behind a
    /// case-insensitive `urn:uuid:` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s;

        // get() keeps a multibyte character at the boundary from panicking.
        if s.get(..URN_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URN_PREFIX))
        {
            s = &s[URN_PREFIX.len()..];
        }

        match (s.strip_prefix('{'), s.ends_with('}')) {
            (Some(inner), true) => s = &inner[..inner.len() - 1],
            (Some(_), false) | (None, true) => return Err(UuidParseError::InvalidBraces),
            (None, false) => {}
        }

        let hyphenated = match s.len() {
            32 => false,
            36 => true,
            _ => return Err(UuidParseError::InvalidLength),
        };

        let mut bytes = [0u8; UUID_BYTES];
        let mut nibbles = 0;

        for (idx, ch) in s.chars().enumerate() {
            if ch == '-' {
                if !hyphenated || !HYPHENS.contains(&idx) {
                    return Err(UuidParseError::InvalidHyphen);
                }
                continue;
            }

            let value = match ch {
                '0'..='9' => ch as u8 - b'0',
                'a'..='f' => ch as u8 - b'a' + 10,
                'A'..='F' => ch as u8 - b'A' + 10,
                _ => return Err(UuidParseError::InvalidCharacter { ch, idx }),
            };

            if nibbles >= 2 * UUID_BYTES {
                // Hyphens are missing from their canonical offsets, so hex
                // digits overflowed the 128 bits.
                return Err(UuidParseError::InvalidHyphen);
            }

            bytes[nibbles / 2] |= value << (4 - nibbles % 2 * 4);
            nibbles += 1;
        }

        if nibbles != 2 * UUID_BYTES {
            return Err(UuidParseError::InvalidHyphen);
        }

        Ok(Self { bytes })
    }
}
