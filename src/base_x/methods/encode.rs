use crate::BaseX;

impl BaseX {
    /// Encode `bytes` and append the checksum character.
    #[must_use]
    pub fn encode(&self, bytes: &[u8]) -> String {
        let base = self.base();
        let (mut text, sum, count) = self.digits_of(bytes);

        let sum = sum + (count + count / base) % base;
        let check = (base - sum % base) % base;
        text.push(char::from(self.alphabet()[check]));

        text
    }

    /// Encode `bytes` without a checksum.
    #[must_use]
    pub fn encode_raw(&self, bytes: &[u8]) -> String {
        self.digits_of(bytes).0
    }

    /// Base-N expansion of `bytes` read as one big-endian integer: the digit
    /// string (MSB first, no leading-zero padding), the digit sum, and the
    /// digit count.
    #[allow(clippy::cast_possible_truncation)]
    fn digits_of(&self, bytes: &[u8]) -> (String, usize, usize) {
        let base = self.base() as u32;

        // Little-endian digit vector; each input byte multiplies the
        // accumulated value by 256 and adds itself.
        let mut digits: Vec<u8> = Vec::new();

        for &byte in bytes {
            let mut carry = u32::from(byte);

            for digit in &mut digits {
                let v = u32::from(*digit) * 256 + carry;
                *digit = (v % base) as u8;
                carry = v / base;
            }

            while carry > 0 {
                digits.push((carry % base) as u8);
                carry /= base;
            }
        }

        let mut text = String::with_capacity(digits.len() + 1);
        let mut sum = 0usize;

        for &digit in digits.iter().rev() {
            text.push(char::from(self.alphabet()[digit as usize]));
            sum += digit as usize;
        }

        (text, sum, digits.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::base59;

    #[test]
    fn empty_input_is_checksum_only() {
        // Zero has no digits; only the checksum character remains, and a
        // zero digit sum yields the zero-valued character.
        assert_eq!(base59().encode(&[]), "z");
        assert_eq!(base59().encode_raw(&[]), "");
    }

    #[test]
    fn known_blob() {
        // The anonymous-node record.
        assert_eq!(base59().encode(&[0x1c, 0x00, 0x00, 0x01]), "notmet");
    }

    #[test]
    fn leading_zero_bytes_are_not_padded() {
        let with = base59().encode(&[0x00, 0x2a]);
        let without = base59().encode(&[0x2a]);
        assert_eq!(with, without);
    }

    #[test]
    fn single_byte_values() {
        // 42 = 0*59 + 42 → one digit plus checksum.
        let text = base59().encode(&[42]);
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn raw_is_a_prefix_of_checked() {
        let data = b"\x06\x2c\x02\x5b\x08\x39\x66\x57";
        let raw = base59().encode_raw(data);
        let checked = base59().encode(data);
        assert!(checked.starts_with(&raw));
        assert_eq!(checked.len(), raw.len() + 1);
    }
}
