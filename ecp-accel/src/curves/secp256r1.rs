//! NIST P-256 elliptic curve (a.k.a. prime256v1, secp256r1)

use crate::EccpCurve;

/// NIST P-256 accelerator parameters.
///
/// ```text
/// p = 2^224 (2^32 - 1) + 2^192 + 2^96 - 1
/// ```
pub const SECP256R1: EccpCurve = EccpCurve {
    p_bits: 256,
    p: &[
        0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
        0xffffffff,
    ],
    p_h: &[
        0x00000003, 0x00000000, 0xffffffff, 0xfffffffb, 0xfffffffe, 0xffffffff, 0xfffffffd,
        0x00000004,
    ],
    p_n1: 0x00000001,
    a: &[
        0xfffffffc, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000001,
        0xffffffff,
    ],
    b: &[
        0x27d2604b, 0x3bce3c3e, 0xcc53b0f6, 0x651d06b0, 0x769886bc, 0xb3ebbd55, 0xaa3a93e7,
        0x5ac635d8,
    ],
};
