//! Fixed-capacity operand buffers staged across the software/hardware
//! boundary.

use crate::{
    Error, Mpi, Result,
    codec::{read_le, write_le},
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Largest operand the accelerator supports, in 32-bit words.
pub const PKE_OPERAND_MAX_WORD_LEN: usize = 16;

const WORD_BYTES: usize = 4;

/// Operand buffer of `len` 32-bit words, little-endian word order.
///
/// The storage is always [`PKE_OPERAND_MAX_WORD_LEN`] words; only the first
/// `len` are exposed. Contents are wiped on drop.
pub struct Operand {
    words: [u32; PKE_OPERAND_MAX_WORD_LEN],
    len: usize,
}

impl Operand {
    /// Create a zeroed operand of `len` words.
    ///
    /// Returns [`Error::Unsupported`] if `len` exceeds the buffer capacity.
    pub fn new(len: usize) -> Result<Self> {
        if len > PKE_OPERAND_MAX_WORD_LEN {
            return Err(Error::Unsupported);
        }

        Ok(Self {
            words: [0; PKE_OPERAND_MAX_WORD_LEN],
            len,
        })
    }

    /// Operand width in words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this a zero-width operand?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the active words.
    pub fn as_words(&self) -> &[u32] {
        &self.words[..self.len]
    }

    /// Mutably borrow the active words.
    pub fn as_words_mut(&mut self) -> &mut [u32] {
        &mut self.words[..self.len]
    }

    /// Are all words, including inactive ones, zero?
    pub fn is_wiped(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Stage `value` into this operand.
    ///
    /// Fails with [`Error::BufferTooSmall`] if `value` does not fit, in which
    /// case the operand is unchanged.
    pub fn load(&mut self, value: &Mpi) -> Result<()> {
        let mut bytes = Zeroizing::new([0u8; PKE_OPERAND_MAX_WORD_LEN * WORD_BYTES]);
        let bytes = &mut bytes[..self.len * WORD_BYTES];
        write_le(value, bytes)?;

        for (word, chunk) in self.words[..self.len]
            .iter_mut()
            .zip(bytes.chunks_exact(WORD_BYTES))
        {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(())
    }

    /// Replace `value` with the integer held by this operand.
    pub fn store(&self, value: &mut Mpi) {
        let mut bytes = Zeroizing::new([0u8; PKE_OPERAND_MAX_WORD_LEN * WORD_BYTES]);

        for (chunk, word) in bytes
            .chunks_exact_mut(WORD_BYTES)
            .zip(self.as_words())
        {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        read_le(value, &bytes[..self.len * WORD_BYTES]);
    }
}

impl Zeroize for Operand {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl Drop for Operand {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Operand {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized() {
        assert!(Operand::new(PKE_OPERAND_MAX_WORD_LEN).is_ok());
        assert_eq!(
            Operand::new(PKE_OPERAND_MAX_WORD_LEN + 1).err(),
            Some(Error::Unsupported)
        );
    }

    #[test]
    fn load_store() {
        let mut op = Operand::new(3).unwrap();
        op.load(&Mpi::from(0x0102_0304_0506_0708u64)).unwrap();
        assert_eq!(op.as_words(), &[0x0506_0708, 0x0102_0304, 0]);

        let mut value = Mpi::zero();
        op.store(&mut value);

        let mut again = Operand::new(3).unwrap();
        again.load(&value).unwrap();
        assert_eq!(again.as_words(), op.as_words());
    }

    #[test]
    fn load_too_wide() {
        let mut op = Operand::new(1).unwrap();
        assert_eq!(
            op.load(&Mpi::from(1u64 << 32)),
            Err(Error::BufferTooSmall)
        );
        assert!(op.is_wiped());
    }

    #[test]
    fn zeroize_wipes_all_words() {
        let mut op = Operand::new(2).unwrap();
        op.as_words_mut().copy_from_slice(&[7, 9]);
        assert!(!op.is_wiped());
        op.zeroize();
        assert!(op.is_wiped());
    }
}
