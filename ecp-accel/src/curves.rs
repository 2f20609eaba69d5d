//! Registry of accelerator curve parameters.
//!
//! Each curve is gated by a Cargo feature of the same name. Short Weierstrass
//! and Montgomery curves live in separate tables; an identifier appears in at
//! most one of them.

#[cfg(feature = "bp256r1")]
mod bp256r1;
#[cfg(feature = "curve25519")]
mod curve25519;
#[cfg(feature = "secp192k1")]
mod secp192k1;
#[cfg(feature = "secp192r1")]
mod secp192r1;
#[cfg(feature = "secp224k1")]
mod secp224k1;
#[cfg(feature = "secp224r1")]
mod secp224r1;
#[cfg(feature = "secp256k1")]
mod secp256k1;
#[cfg(feature = "secp256r1")]
mod secp256r1;

#[cfg(feature = "bp256r1")]
pub use bp256r1::BP256R1;
#[cfg(feature = "curve25519")]
pub use curve25519::CURVE25519;
#[cfg(feature = "secp192k1")]
pub use secp192k1::SECP192K1;
#[cfg(feature = "secp192r1")]
pub use secp192r1::SECP192R1;
#[cfg(feature = "secp224k1")]
pub use secp224k1::SECP224K1;
#[cfg(feature = "secp224r1")]
pub use secp224r1::SECP224R1;
#[cfg(feature = "secp256k1")]
pub use secp256k1::SECP256K1;
#[cfg(feature = "secp256r1")]
pub use secp256r1::SECP256R1;

use crate::{CurveType, EccpCurve, GroupId, MontCurve};

static ECCP_CURVES: &[(GroupId, &EccpCurve)] = &[
    #[cfg(feature = "secp256r1")]
    (GroupId::Secp256r1, &SECP256R1),
    #[cfg(feature = "secp256k1")]
    (GroupId::Secp256k1, &SECP256K1),
    #[cfg(feature = "bp256r1")]
    (GroupId::Bp256r1, &BP256R1),
    #[cfg(feature = "secp224r1")]
    (GroupId::Secp224r1, &SECP224R1),
    #[cfg(feature = "secp224k1")]
    (GroupId::Secp224k1, &SECP224K1),
    #[cfg(feature = "secp192r1")]
    (GroupId::Secp192r1, &SECP192R1),
    #[cfg(feature = "secp192k1")]
    (GroupId::Secp192k1, &SECP192K1),
];

static MONT_CURVES: &[(GroupId, &MontCurve)] = &[
    #[cfg(feature = "curve25519")]
    (GroupId::Curve25519, &CURVE25519),
];

/// Look up short Weierstrass parameters for `id`.
pub fn eccp_curve(id: GroupId) -> Option<&'static EccpCurve> {
    ECCP_CURVES
        .iter()
        .find(|(group, _)| *group == id)
        .map(|&(_, curve)| curve)
}

/// Look up Montgomery parameters for `id`.
pub fn mont_curve(id: GroupId) -> Option<&'static MontCurve> {
    MONT_CURVES
        .iter()
        .find(|(group, _)| *group == id)
        .map(|&(_, curve)| curve)
}

/// All curves with parameters in this build, paired with their family.
pub fn registered() -> impl Iterator<Item = (GroupId, CurveType)> {
    let eccp = ECCP_CURVES
        .iter()
        .map(|&(id, _)| (id, CurveType::ShortWeierstrass));
    let mont = MONT_CURVES
        .iter()
        .map(|&(id, _)| (id, CurveType::Montgomery));
    eccp.chain(mont)
}
