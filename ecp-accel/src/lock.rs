//! Exclusion guard serializing access to the single accelerator.
//!
//! With the `std` feature the guard is a [`std::sync::Mutex`]. Without it,
//! the `critical-section` feature provides a [`critical_section::Mutex`] for
//! bare-metal targets, holding the critical section for the duration of the
//! hardware call.

#[cfg(not(feature = "std"))]
use core::cell::RefCell;

/// Blocking mutual exclusion around a hardware handle.
pub struct Exclusive<H> {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<H>,

    #[cfg(not(feature = "std"))]
    inner: critical_section::Mutex<RefCell<H>>,
}

impl<H> Exclusive<H> {
    /// Take ownership of the hardware handle.
    pub const fn new(hw: H) -> Self {
        Self {
            #[cfg(feature = "std")]
            inner: std::sync::Mutex::new(hw),

            #[cfg(not(feature = "std"))]
            inner: critical_section::Mutex::new(RefCell::new(hw)),
        }
    }

    /// Run `f` with exclusive access to the hardware, blocking until it is
    /// available. The guard is released when `f` returns.
    ///
    /// Must not be called from within `f`.
    #[cfg(feature = "std")]
    pub fn with<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        // A panic inside `f` leaves no Rust-side state to repair.
        let mut hw = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        tracing::trace!("pke locked");
        let ret = f(&mut hw);
        drop(hw);
        tracing::trace!("pke unlocked");
        ret
    }

    /// Run `f` with exclusive access to the hardware inside a critical
    /// section. The guard is released when `f` returns.
    ///
    /// Must not be called from within `f`.
    #[cfg(not(feature = "std"))]
    pub fn with<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        critical_section::with(|cs| {
            tracing::trace!("pke locked");
            let ret = f(&mut self.inner.borrow_ref_mut(cs));
            tracing::trace!("pke unlocked");
            ret
        })
    }

    /// Release the hardware handle.
    pub fn into_inner(self) -> H {
        #[cfg(feature = "std")]
        {
            self.inner
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        #[cfg(not(feature = "std"))]
        {
            self.inner.into_inner().into_inner()
        }
    }
}
