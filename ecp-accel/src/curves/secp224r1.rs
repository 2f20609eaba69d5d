//! NIST P-224 elliptic curve (a.k.a. secp224r1)

use crate::EccpCurve;

/// NIST P-224 accelerator parameters.
///
/// ```text
/// p = 2^224 - 2^96 + 1
/// ```
pub const SECP224R1: EccpCurve = EccpCurve {
    p_bits: 224,
    p: &[
        0x00000001, 0x00000000, 0x00000000, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    p_h: &[
        0x00000001, 0x00000000, 0x00000000, 0xfffffffe, 0xffffffff, 0xffffffff, 0x00000000,
    ],
    p_n1: 0xffffffff,
    a: &[
        0xfffffffe, 0xffffffff, 0xffffffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    b: &[
        0x2355ffb4, 0x270b3943, 0xd7bfd8ba, 0x5044b0b7, 0xf5413256, 0x0c04b3ab, 0xb4050a85,
    ],
};
