//! Curve group operations delegated to the public key engine.

use crate::{
    CurveType, EcpGroup, EcpPoint, Error, Fault, Mpi, Operand, PKE_OPERAND_MAX_WORD_LEN, Pke,
    Result,
    codec::word_len,
    curves::{eccp_curve, mont_curve},
    lock::Exclusive,
};
use zeroize::Zeroize;

/// Elliptic curve acceleration backend for a single public key engine.
///
/// All hardware access goes through one exclusion guard, so an
/// `EcpAccelerator` can be shared between threads (or placed in a `static`)
/// and used concurrently. Each operation holds the guard only around the
/// hardware primitives; staging and wiping of operands happen outside it.
///
/// Outputs are affine-normalized: `R.z` is set to one.
pub struct EcpAccelerator<H> {
    pke: Exclusive<H>,
}

impl<H: Pke> EcpAccelerator<H> {
    /// Take ownership of the engine.
    pub const fn new(hw: H) -> Self {
        Self {
            pke: Exclusive::new(hw),
        }
    }

    /// Release the engine.
    pub fn into_inner(self) -> H {
        self.pke.into_inner()
    }

    /// Check that `pt` lies on the curve of `grp`.
    ///
    /// Only short Weierstrass curves are checked. Montgomery curves always
    /// yield [`Error::Unsupported`]: callers must not treat that as a
    /// validated key.
    pub fn check_pubkey(&self, grp: &EcpGroup, pt: &EcpPoint) -> Result<()> {
        let mut ws = self.workspace(grp)?;
        self.check_pubkey_in(&mut ws, grp, pt)
    }

    /// `R = m·P`
    ///
    /// On Montgomery curves only `R.x` is meaningful: `R.y` is set to zero.
    pub fn mul(&self, grp: &EcpGroup, r: &mut EcpPoint, m: &Mpi, p: &EcpPoint) -> Result<()> {
        coord(&p.x)?;
        let mut ws = self.workspace(grp)?;
        self.mul_in(&mut ws, grp, r, m, p)
    }

    /// `R = m·P + n·Q`, short Weierstrass curves only.
    ///
    /// `R` is left untouched unless every hardware step succeeds.
    pub fn muladd(
        &self,
        grp: &EcpGroup,
        r: &mut EcpPoint,
        m: &Mpi,
        p: &EcpPoint,
        n: &Mpi,
        q: &EcpPoint,
    ) -> Result<()> {
        let mut ws = self.workspace(grp)?;
        self.muladd_in(&mut ws, grp, r, m, p, n, q)
    }

    /// Allocate operands for `grp`, rejecting widths the engine can't take.
    fn workspace(&self, grp: &EcpGroup) -> Result<Workspace> {
        let words = word_len(grp.pbits);
        let max = H::MAX_OPERAND_WORDS.min(PKE_OPERAND_MAX_WORD_LEN);

        if words > max {
            tracing::debug!(group = ?grp.id, words, max, "operand width unsupported");
            return Err(Error::Unsupported);
        }

        Workspace::new(words)
    }

    pub(crate) fn check_pubkey_in(
        &self,
        ws: &mut Workspace,
        grp: &EcpGroup,
        pt: &EcpPoint,
    ) -> Result<()> {
        ws.wiped_after(|ws| {
            let family = grp.curve_type();
            tracing::debug!(group = ?grp.id, ?family, "pke check pubkey");

            match family {
                CurveType::ShortWeierstrass => {
                    let curve = eccp_curve(grp.id).ok_or_else(|| unsupported(grp))?;
                    check_width(ws, curve.words())?;
                    ws.p.load(coord(&pt.x)?, coord(&pt.y)?)?;

                    self.pke
                        .with(|hw| {
                            hw.eccp_point_verify(curve, ws.p.x.as_words(), ws.p.y.as_words())
                        })
                        .map_err(|fault| {
                            tracing::debug!(group = ?grp.id, %fault, "point rejected");
                            Error::InvalidKey
                        })
                }
                CurveType::Montgomery | CurveType::None => Err(unsupported(grp)),
            }
        })
    }

    pub(crate) fn mul_in(
        &self,
        ws: &mut Workspace,
        grp: &EcpGroup,
        r: &mut EcpPoint,
        m: &Mpi,
        p: &EcpPoint,
    ) -> Result<()> {
        ws.wiped_after(|ws| {
            let family = grp.curve_type();
            tracing::debug!(group = ?grp.id, ?family, "pke mul");

            match family {
                CurveType::ShortWeierstrass => {
                    let curve = eccp_curve(grp.id).ok_or_else(|| unsupported(grp))?;
                    check_width(ws, curve.words())?;
                    ws.m.load(m)?;
                    ws.p.load(coord(&p.x)?, coord(&p.y)?)?;

                    self.pke
                        .with(|hw| {
                            hw.eccp_point_mul(
                                curve,
                                ws.m.as_words(),
                                ws.p.x.as_words(),
                                ws.p.y.as_words(),
                                ws.t.x.as_words_mut(),
                                ws.t.y.as_words_mut(),
                            )
                        })
                        .map_err(|fault| hw_failure(grp, "point multiply", fault))?;

                    ws.t.store(r);
                    Ok(())
                }
                CurveType::Montgomery => {
                    let curve = mont_curve(grp.id).ok_or_else(|| unsupported(grp))?;
                    check_width(ws, curve.words())?;
                    ws.m.load(m)?;
                    ws.p.x.load(coord(&p.x)?)?;

                    self.pke
                        .with(|hw| {
                            hw.x25519_point_mul(
                                curve,
                                ws.m.as_words(),
                                ws.p.x.as_words(),
                                ws.t.x.as_words_mut(),
                            )
                        })
                        .map_err(|fault| hw_failure(grp, "x-only multiply", fault))?;

                    ws.t.x.store(r.x.get_or_insert_with(Mpi::zero));
                    r.y = Some(Mpi::zero());
                    r.z = Some(Mpi::one());
                    Ok(())
                }
                CurveType::None => Err(unsupported(grp)),
            }
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn muladd_in(
        &self,
        ws: &mut Workspace,
        grp: &EcpGroup,
        r: &mut EcpPoint,
        m: &Mpi,
        p: &EcpPoint,
        n: &Mpi,
        q: &EcpPoint,
    ) -> Result<()> {
        ws.wiped_after(|ws| {
            let family = grp.curve_type();
            tracing::debug!(group = ?grp.id, ?family, "pke muladd");

            match family {
                CurveType::ShortWeierstrass => {
                    let curve = eccp_curve(grp.id).ok_or_else(|| unsupported(grp))?;
                    check_width(ws, curve.words())?;
                    ws.p.load(coord(&p.x)?, coord(&p.y)?)?;
                    ws.q.load(coord(&q.x)?, coord(&q.y)?)?;
                    ws.m.load(m)?;
                    ws.n.load(n)?;

                    self.pke
                        .with(|hw| -> core::result::Result<(), (&'static str, Fault)> {
                            hw.eccp_point_mul(
                                curve,
                                ws.m.as_words(),
                                ws.p.x.as_words(),
                                ws.p.y.as_words(),
                                ws.t.x.as_words_mut(),
                                ws.t.y.as_words_mut(),
                            )
                            .map_err(|fault| ("m·P", fault))?;

                            hw.eccp_point_mul(
                                curve,
                                ws.n.as_words(),
                                ws.q.x.as_words(),
                                ws.q.y.as_words(),
                                ws.u.x.as_words_mut(),
                                ws.u.y.as_words_mut(),
                            )
                            .map_err(|fault| ("n·Q", fault))?;

                            // P is consumed; its buffers take the sum
                            hw.eccp_point_add(
                                curve,
                                ws.t.x.as_words(),
                                ws.t.y.as_words(),
                                ws.u.x.as_words(),
                                ws.u.y.as_words(),
                                ws.p.x.as_words_mut(),
                                ws.p.y.as_words_mut(),
                            )
                            .map_err(|fault| ("point add", fault))
                        })
                        .map_err(|(step, fault)| hw_failure(grp, step, fault))?;

                    ws.p.store(r);
                    Ok(())
                }
                CurveType::Montgomery | CurveType::None => Err(unsupported(grp)),
            }
        })
    }
}

/// Staged operands for one bridge operation.
pub(crate) struct Workspace {
    /// First scalar.
    pub(crate) m: Operand,
    /// Second scalar.
    pub(crate) n: Operand,
    /// First input point; also the multiply-add result.
    pub(crate) p: Coords,
    /// Second input point.
    pub(crate) q: Coords,
    /// First product.
    pub(crate) t: Coords,
    /// Second product.
    pub(crate) u: Coords,
}

impl Workspace {
    pub(crate) fn new(words: usize) -> Result<Self> {
        Ok(Self {
            m: Operand::new(words)?,
            n: Operand::new(words)?,
            p: Coords::new(words)?,
            q: Coords::new(words)?,
            t: Coords::new(words)?,
            u: Coords::new(words)?,
        })
    }

    /// Run `f`, then wipe every operand whatever it returned.
    fn wiped_after<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let ret = f(self);
        self.zeroize();
        ret
    }

    #[cfg(test)]
    pub(crate) fn is_wiped(&self) -> bool {
        self.m.is_wiped()
            && self.n.is_wiped()
            && [&self.p, &self.q, &self.t, &self.u]
                .iter()
                .all(|c| c.x.is_wiped() && c.y.is_wiped())
    }
}

impl Zeroize for Workspace {
    fn zeroize(&mut self) {
        self.m.zeroize();
        self.n.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.t.zeroize();
        self.u.zeroize();
    }
}

/// Affine coordinate pair.
pub(crate) struct Coords {
    pub(crate) x: Operand,
    pub(crate) y: Operand,
}

impl Coords {
    fn new(words: usize) -> Result<Self> {
        Ok(Self {
            x: Operand::new(words)?,
            y: Operand::new(words)?,
        })
    }

    fn load(&mut self, x: &Mpi, y: &Mpi) -> Result<()> {
        self.x.load(x)?;
        self.y.load(y)
    }

    /// Write these coordinates to `r` as an affine point.
    fn store(&self, r: &mut EcpPoint) {
        self.x.store(r.x.get_or_insert_with(Mpi::zero));
        self.y.store(r.y.get_or_insert_with(Mpi::zero));
        r.z = Some(Mpi::one());
    }
}

impl Zeroize for Coords {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

fn coord(c: &Option<Mpi>) -> Result<&Mpi> {
    c.as_ref().ok_or(Error::BadInput)
}

/// The group's prime width must match the registered parameters.
fn check_width(ws: &Workspace, words: usize) -> Result<()> {
    if ws.m.len() == words {
        Ok(())
    } else {
        Err(Error::BadInput)
    }
}

fn unsupported(grp: &EcpGroup) -> Error {
    tracing::debug!(group = ?grp.id, family = ?grp.curve_type(), "no accelerator support");
    Error::Unsupported
}

fn hw_failure(grp: &EcpGroup, step: &str, fault: Fault) -> Error {
    tracing::warn!(group = ?grp.id, step, code = fault.code(), "pke failure");
    Error::HardwareFailure
}
