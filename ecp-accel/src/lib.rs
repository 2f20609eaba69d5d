#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "critical-section")))]
compile_error!("either the `std` or the `critical-section` feature must be enabled");

pub mod codec;
pub mod curves;
pub mod error;
pub mod lock;
pub mod pke;

mod backend;
mod group;
mod operand;
mod params;

pub use crate::{
    backend::EcpAccelerator,
    curves::{eccp_curve, mont_curve},
    error::{Error, Result},
    group::{CurveType, EcpGroup, EcpPoint, GroupId},
    operand::{Operand, PKE_OPERAND_MAX_WORD_LEN},
    params::{EccpCurve, MontCurve},
    pke::{Fault, Pke},
};
pub use bigint;
pub use zeroize;

/// Arbitrary-precision unsigned integer exchanged with the generic curve
/// library.
pub type Mpi = bigint::BoxedUint;

/// Width in bits of a single accelerator operand word.
pub const PKE_WORD_BITS: usize = 32;
