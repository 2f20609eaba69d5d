//! secp224k1 elliptic curve

use crate::EccpCurve;

/// secp224k1 accelerator parameters: `y² = x³ + 5`.
pub const SECP224K1: EccpCurve = EccpCurve {
    p_bits: 224,
    p: &[
        0xffffe56d, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    p_h: &[
        0x02c23069, 0x00003526, 0x00000001, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
    p_n1: 0x198d139b,
    a: &[0; 7],
    b: &[
        0x00000005, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
};
