//! brainpoolP256r1 elliptic curve

use crate::EccpCurve;

/// brainpoolP256r1 accelerator parameters (RFC 5639).
pub const BP256R1: EccpCurve = EccpCurve {
    p_bits: 256,
    p: &[
        0x1f6e5377, 0x2013481d, 0xd5262028, 0x6e3bf623, 0x9d838d72, 0x3e660a90, 0xa1eea9bc,
        0xa9fb57db,
    ],
    p_h: &[
        0xa6465b6c, 0x8cfedf7b, 0x614d4f4d, 0x5cce4c26, 0x6b1ac807, 0xa1ecdacd, 0xe5957fa8,
        0x4717aa21,
    ],
    p_n1: 0xcefd89b9,
    a: &[
        0xf330b5d9, 0xe94a4b44, 0x26dc5c6c, 0xfb8055c1, 0x417affe7, 0xeef67530, 0xfc2c3057,
        0x7d5a0975,
    ],
    b: &[
        0xff8c07b6, 0x6bccdc18, 0x5cf7e1ce, 0x95841629, 0xbbd77cbf, 0xf330b5d9, 0xe94a4b44,
        0x26dc5c6c,
    ],
};
