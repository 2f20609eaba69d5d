//! Hardware primitive interface of the public key engine (PKE).
//!
//! Implementations drive the actual accelerator. The bridge only ever calls
//! these methods while holding the exclusion guard, so `&mut self` is
//! exclusive access to the hardware unit.
//!
//! All operands are little-endian `u32` word slices of the curve's operand
//! width. Output slices are distinct from input slices.

use crate::{EccpCurve, MontCurve, PKE_OPERAND_MAX_WORD_LEN};
use core::fmt;

/// Failure status reported by the accelerator for a single primitive.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fault(u32);

impl Fault {
    /// Wrap a raw driver status code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Raw driver status code.
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PKE status {:#x}", self.0)
    }
}

impl core::error::Error for Fault {}

/// Public key engine primitives.
pub trait Pke {
    /// Largest operand width this engine accepts, in 32-bit words.
    const MAX_OPERAND_WORDS: usize = PKE_OPERAND_MAX_WORD_LEN;

    /// Check that `(x, y)` lies on `curve`.
    fn eccp_point_verify(
        &mut self,
        curve: &EccpCurve,
        x: &[u32],
        y: &[u32],
    ) -> Result<(), Fault>;

    /// `(qx, qy) = k · (px, py)`
    fn eccp_point_mul(
        &mut self,
        curve: &EccpCurve,
        k: &[u32],
        px: &[u32],
        py: &[u32],
        qx: &mut [u32],
        qy: &mut [u32],
    ) -> Result<(), Fault>;

    /// `(qx, qy) = (p1x, p1y) + (p2x, p2y)`
    #[allow(clippy::too_many_arguments)]
    fn eccp_point_add(
        &mut self,
        curve: &EccpCurve,
        p1x: &[u32],
        p1y: &[u32],
        p2x: &[u32],
        p2y: &[u32],
        qx: &mut [u32],
        qy: &mut [u32],
    ) -> Result<(), Fault>;

    /// x-only Montgomery ladder: `out = x(k · P)` where `u = x(P)`.
    fn x25519_point_mul(
        &mut self,
        curve: &MontCurve,
        k: &[u32],
        u: &[u32],
        out: &mut [u32],
    ) -> Result<(), Fault>;
}

impl<T: Pke> Pke for &mut T {
    const MAX_OPERAND_WORDS: usize = T::MAX_OPERAND_WORDS;

    fn eccp_point_verify(
        &mut self,
        curve: &EccpCurve,
        x: &[u32],
        y: &[u32],
    ) -> Result<(), Fault> {
        T::eccp_point_verify(self, curve, x, y)
    }

    fn eccp_point_mul(
        &mut self,
        curve: &EccpCurve,
        k: &[u32],
        px: &[u32],
        py: &[u32],
        qx: &mut [u32],
        qy: &mut [u32],
    ) -> Result<(), Fault> {
        T::eccp_point_mul(self, curve, k, px, py, qx, qy)
    }

    #[allow(clippy::too_many_arguments)]
    fn eccp_point_add(
        &mut self,
        curve: &EccpCurve,
        p1x: &[u32],
        p1y: &[u32],
        p2x: &[u32],
        p2y: &[u32],
        qx: &mut [u32],
        qy: &mut [u32],
    ) -> Result<(), Fault> {
        T::eccp_point_add(self, curve, p1x, p1y, p2x, p2y, qx, qy)
    }

    fn x25519_point_mul(
        &mut self,
        curve: &MontCurve,
        k: &[u32],
        u: &[u32],
        out: &mut [u32],
    ) -> Result<(), Fault> {
        T::x25519_point_mul(self, curve, k, u, out)
    }
}
