//! secp192k1 elliptic curve

use crate::EccpCurve;

/// secp192k1 accelerator parameters: `y² = x³ + 3`.
pub const SECP192K1: EccpCurve = EccpCurve {
    p_bits: 192,
    p: &[
        0xffffee37, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    p_h: &[
        0x013c4fd1, 0x00002392, 0x00000001, 0x00000000, 0x00000000, 0x00000000,
    ],
    p_n1: 0x7446d879,
    a: &[0; 6],
    b: &[
        0x00000003, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
};
