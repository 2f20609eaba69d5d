//! Curve25519 Montgomery curve

use crate::MontCurve;

/// Curve25519 accelerator parameters (RFC 7748).
///
/// ```text
/// p = 2^255 - 19, A = 486662
/// ```
pub const CURVE25519: MontCurve = MontCurve {
    p_bits: 255,
    p: &[
        0xffffffed, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0x7fffffff,
    ],
    p_h: &[
        0x000005a4, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    p_n1: 0x286bca1b,
    a24: &[
        0x0001db41, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
};
