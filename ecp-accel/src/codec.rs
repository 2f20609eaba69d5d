//! Little-endian conversion between [`Mpi`] limbs and fixed-width byte
//! buffers sized to a curve's operand width.

use crate::{Error, Mpi, PKE_WORD_BITS, Result};
use bigint::{Limb, Word};

/// Number of accelerator words needed to hold an integer of `bits` bits.
#[inline]
pub const fn word_len(bits: usize) -> usize {
    bits.div_ceil(PKE_WORD_BITS)
}

/// Serialize `value` into `buf` in little-endian byte order.
///
/// Bytes of `buf` past the stored magnitude of `value` are zero-filled. If
/// `value` is stored in more bytes than `buf` holds, the excess bytes must
/// all be zero, otherwise [`Error::BufferTooSmall`] is returned and `buf` is
/// left untouched.
pub fn write_le(value: &Mpi, buf: &mut [u8]) -> Result<()> {
    let words = value.as_words();
    let stored = words.len() * Limb::BYTES;
    let copied = stored.min(buf.len());

    if (copied..stored).any(|i| byte_at(words, i) != 0) {
        return Err(Error::BufferTooSmall);
    }

    for (i, byte) in buf[..copied].iter_mut().enumerate() {
        *byte = byte_at(words, i);
    }
    buf[copied..].fill(0);

    Ok(())
}

/// Replace `value` with the integer encoded by `buf` in little-endian byte
/// order.
///
/// The result has exactly `ceil(buf.len() / Limb::BYTES)` limbs.
pub fn read_le(value: &mut Mpi, buf: &[u8]) {
    if buf.is_empty() {
        *value = Mpi::zero();
        return;
    }

    *value = Mpi::from_words(buf.chunks(Limb::BYTES).map(|chunk| {
        chunk
            .iter()
            .rev()
            .fold(0, |acc: Word, &byte| (acc << 8) | Word::from(byte))
    }));
}

/// Byte `i` of a little-endian limb slice.
#[inline]
fn byte_at(words: &[Word], i: usize) -> u8 {
    (words[i / Limb::BYTES] >> ((i % Limb::BYTES) * 8)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_len_rounds_up() {
        assert_eq!(word_len(192), 6);
        assert_eq!(word_len(224), 7);
        assert_eq!(word_len(255), 8);
        assert_eq!(word_len(256), 8);
        assert_eq!(word_len(257), 9);
        assert_eq!(word_len(521), 17);
    }

    #[test]
    fn read_empty_is_zero() {
        let mut value = Mpi::one();
        read_le(&mut value, &[]);
        assert!(bool::from(value.is_zero()));
    }

    #[test]
    fn read_sizes_to_buffer() {
        let mut value = Mpi::zero();
        read_le(&mut value, &[1u8; 28]);
        assert_eq!(value.nlimbs(), 28usize.div_ceil(Limb::BYTES));
    }

    #[test]
    fn failed_write_leaves_buffer() {
        let mut value = Mpi::zero();
        read_le(&mut value, &[0, 0, 0, 0, 0x80]);

        let mut buf = [0xaa; 4];
        assert_eq!(write_le(&value, &mut buf), Err(Error::BufferTooSmall));
        assert_eq!(buf, [0xaa; 4]);
    }
}
