//! NIST P-192 elliptic curve (a.k.a. prime192v1, secp192r1)

use crate::EccpCurve;

/// NIST P-192 accelerator parameters.
///
/// ```text
/// p = 2^192 - 2^64 - 1
/// ```
pub const SECP192R1: EccpCurve = EccpCurve {
    p_bits: 192,
    p: &[
        0xffffffff, 0xffffffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    p_h: &[
        0x00000001, 0x00000000, 0x00000002, 0x00000000, 0x00000001, 0x00000000,
    ],
    p_n1: 0x00000001,
    a: &[
        0xfffffffc, 0xffffffff, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
    ],
    b: &[
        0xc146b9b1, 0xfeb8deec, 0x72243049, 0x0fa7e9ab, 0xe59c80e7, 0x64210519,
    ],
};
