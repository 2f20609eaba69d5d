//! Curve parameter records in the layout expected by the accelerator.
//!
//! All multi-word values are `u32` words, least significant word first.

use crate::codec::word_len;

/// Short Weierstrass curve parameters: `y² = x³ + ax + b (mod p)`.
#[derive(Debug, Eq, PartialEq)]
pub struct EccpCurve {
    /// Bit length of `p`.
    pub p_bits: u32,
    /// Prime modulus `p`.
    pub p: &'static [u32],
    /// `R² mod p` with `R = 2^(32·words)`.
    pub p_h: &'static [u32],
    /// `-p⁻¹ mod 2³²`.
    pub p_n1: u32,
    /// Coefficient `a`.
    pub a: &'static [u32],
    /// Coefficient `b`.
    pub b: &'static [u32],
}

impl EccpCurve {
    /// Operand width of this curve in accelerator words.
    pub const fn words(&self) -> usize {
        word_len(self.p_bits as usize)
    }
}

/// Montgomery curve parameters: `y² = x³ + ax² + x (mod p)`.
#[derive(Debug, Eq, PartialEq)]
pub struct MontCurve {
    /// Bit length of `p`.
    pub p_bits: u32,
    /// Prime modulus `p`.
    pub p: &'static [u32],
    /// `R² mod p` with `R = 2^(32·words)`.
    pub p_h: &'static [u32],
    /// `-p⁻¹ mod 2³²`.
    pub p_n1: u32,
    /// `(a - 2) / 4`
    pub a24: &'static [u32],
}

impl MontCurve {
    /// Operand width of this curve in accelerator words.
    pub const fn words(&self) -> usize {
        word_len(self.p_bits as usize)
    }
}
