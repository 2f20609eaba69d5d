//! Curve group descriptors, points, and curve family classification.

use crate::Mpi;
use core::fmt;
use zeroize::Zeroize;

/// Identifier of a named curve group, as used by the generic curve library.
///
/// Not every identifier has accelerator parameters; see
/// [`eccp_curve`](crate::eccp_curve) and [`mont_curve`](crate::mont_curve).
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum GroupId {
    /// Uninitialized group.
    #[default]
    None,
    /// NIST P-192 (secp192r1).
    Secp192r1,
    /// NIST P-224 (secp224r1).
    Secp224r1,
    /// NIST P-256 (secp256r1, prime256v1).
    Secp256r1,
    /// NIST P-384 (secp384r1).
    Secp384r1,
    /// NIST P-521 (secp521r1).
    Secp521r1,
    /// brainpoolP256r1.
    Bp256r1,
    /// brainpoolP384r1.
    Bp384r1,
    /// brainpoolP512r1.
    Bp512r1,
    /// Curve25519.
    Curve25519,
    /// secp192k1.
    Secp192k1,
    /// secp224k1.
    Secp224k1,
    /// secp256k1.
    Secp256k1,
    /// Curve448.
    Curve448,
}

impl GroupId {
    /// Every identifier, in declaration order.
    pub const ALL: [GroupId; 14] = [
        GroupId::None,
        GroupId::Secp192r1,
        GroupId::Secp224r1,
        GroupId::Secp256r1,
        GroupId::Secp384r1,
        GroupId::Secp521r1,
        GroupId::Bp256r1,
        GroupId::Bp384r1,
        GroupId::Bp512r1,
        GroupId::Curve25519,
        GroupId::Secp192k1,
        GroupId::Secp224k1,
        GroupId::Secp256k1,
        GroupId::Curve448,
    ];
}

/// Curve point in projective coordinates `(X, Y, Z)`.
///
/// An unset coordinate is `None`. Points produced by the accelerator are
/// affine-normalized: `Z = 1`. Montgomery curve points are x-only and their
/// `Y` carries no meaning.
#[derive(Clone, Default)]
pub struct EcpPoint {
    /// X coordinate.
    pub x: Option<Mpi>,
    /// Y coordinate.
    pub y: Option<Mpi>,
    /// Z coordinate.
    pub z: Option<Mpi>,
}

impl EcpPoint {
    /// Affine point `(x, y)` with `Z = 1`.
    pub fn from_affine(x: Mpi, y: Mpi) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(Mpi::one()),
        }
    }

    /// x-only point as used on Montgomery curves: `Y` is left unset.
    pub fn from_x(x: Mpi) -> Self {
        Self {
            x: Some(x),
            y: None,
            z: Some(Mpi::one()),
        }
    }
}

impl fmt::Debug for EcpPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // coordinates may be secret
        f.debug_struct("EcpPoint")
            .field("x", &self.x.as_ref().map(|_| ".."))
            .field("y", &self.y.as_ref().map(|_| ".."))
            .field("z", &self.z.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Zeroize for EcpPoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}

/// Curve group descriptor owned by the generic curve library.
#[derive(Clone, Debug, Default)]
pub struct EcpGroup {
    /// Curve identifier.
    pub id: GroupId,
    /// Bit length of the prime modulus.
    pub pbits: usize,
    /// Generator point.
    pub g: EcpPoint,
}

impl EcpGroup {
    /// Create a descriptor for the given curve.
    pub fn new(id: GroupId, pbits: usize, g: EcpPoint) -> Self {
        Self { id, pbits, g }
    }

    /// Curve family of this group, see [`CurveType::of`].
    pub fn curve_type(&self) -> CurveType {
        CurveType::of(self)
    }
}

/// Curve family.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum CurveType {
    /// Uninitialized group: belongs to neither family.
    None,

    /// `y² = x³ + ax + b`
    ShortWeierstrass,

    /// `y² = x³ + ax² + x`
    Montgomery,
}

impl CurveType {
    /// Classify a group by which generator coordinates are present.
    ///
    /// Only coordinate presence is inspected, never the identifier: no `X`
    /// means uninitialized, `X` without `Y` means Montgomery, both mean short
    /// Weierstrass.
    pub fn of(grp: &EcpGroup) -> Self {
        if grp.g.x.is_none() {
            CurveType::None
        } else if grp.g.y.is_none() {
            CurveType::Montgomery
        } else {
            CurveType::ShortWeierstrass
        }
    }
}
