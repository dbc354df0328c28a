use crate::{BaseX, BaseXError};

impl BaseX {
    /// Decode `text`, verifying and removing the trailing checksum
    /// character.
    ///
    /// # Errors
    ///
    /// [`BaseXError::InvalidCharacter`] for input outside the alphabet and
    /// translate set, [`BaseXError::InvalidChecksum`] when the checksum
    /// digit disagrees with the rest of the input (or the input holds no
    /// checksum digit at all).
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, BaseXError> {
        let base = self.base();
        let mut chars: Vec<char> = text.chars().collect();

        // Pop trailing skip markers to expose the true checksum digit.
        let check = loop {
            let Some(ch) = chars.pop() else {
                return Err(BaseXError::InvalidChecksum);
            };

            match self.value_of(ch)? {
                Some(value) => break value,
                None => continue,
            }
        };

        let (bytes, sum, count) = self.bytes_of(&chars)?;

        let sum = sum + check + (count + count / base) % base;

        if sum % base != 0 {
            return Err(BaseXError::InvalidChecksum);
        }

        Ok(bytes)
    }

    /// Decode `text` without expecting a checksum.
    ///
    /// # Errors
    ///
    /// [`BaseXError::InvalidCharacter`] for input outside the alphabet and
    /// translate set.
    pub fn decode_raw(&self, text: &str) -> Result<Vec<u8>, BaseXError> {
        let chars: Vec<char> = text.chars().collect();
        Ok(self.bytes_of(&chars)?.0)
    }

    /// The digit value of `ch`: `Ok(None)` for a skip marker, an error for
    /// anything outside the alphabet and translate set.
    #[allow(clippy::cast_sign_loss)]
    fn value_of(&self, ch: char) -> Result<Option<usize>, BaseXError> {
        let slot = if ch.is_ascii() {
            self.decoder()[ch as usize]
        } else {
            self.base() as i16
        };

        if slot < 0 {
            return Ok(None);
        }

        if slot as usize >= self.base() {
            return Err(BaseXError::InvalidCharacter(ch));
        }

        Ok(Some(slot as usize))
    }

    /// Accumulate `chars` as base-N digits and unpack the value big-endian.
    /// Returns the bytes, the digit sum, and the digit count.
    #[allow(clippy::cast_possible_truncation)]
    fn bytes_of(&self, chars: &[char]) -> Result<(Vec<u8>, usize, usize), BaseXError> {
        let base = self.base() as u32;

        // Little-endian byte vector; each digit multiplies the accumulated
        // value by the radix and adds itself.
        let mut bytes: Vec<u8> = Vec::new();
        let mut sum = 0usize;
        let mut count = 0usize;

        for &ch in chars {
            let Some(value) = self.value_of(ch)? else {
                continue;
            };

            let mut carry = value as u32;

            for byte in &mut bytes {
                let v = u32::from(*byte) * base + carry;
                *byte = (v & 0xff) as u8;
                carry = v >> 8;
            }

            while carry > 0 {
                bytes.push((carry & 0xff) as u8);
                carry >>= 8;
            }

            sum += value;
            count += 1;
        }

        bytes.reverse();

        Ok((bytes, sum, count))
    }
}
