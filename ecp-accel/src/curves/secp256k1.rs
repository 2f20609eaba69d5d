//! secp256k1 elliptic curve

use crate::EccpCurve;

/// secp256k1 accelerator parameters: `y² = x³ + 7`.
pub const SECP256K1: EccpCurve = EccpCurve {
    p_bits: 256,
    p: &[
        0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff,
    ],
    p_h: &[
        0x000e90a1, 0x000007a2, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
    p_n1: 0xd2253531,
    a: &[0; 8],
    b: &[
        0x00000007, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ],
};
