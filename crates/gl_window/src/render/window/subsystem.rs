//! Process-wide windowing subsystem lease
//!
//! The host library has one global init/terminate pair. [`Subsystem`] makes
//! that explicit: [`Subsystem::acquire`] initializes the host and counts the
//! lease, [`Subsystem::release`] (or drop) gives it back. The window's
//! constructor and `destroy` are the only callers.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::render::window::backend::WindowHost;
use crate::render::window::WindowResult;

static ACTIVE_LEASES: AtomicUsize = AtomicUsize::new(0);

/// An initialized host library, counted while alive
#[derive(Debug)]
pub struct Subsystem<H: WindowHost> {
    host: H,
}

impl<H: WindowHost> Subsystem<H> {
    /// Initialize the host library with [`WindowHost::init`]
    pub fn acquire() -> WindowResult<Self> {
        Self::acquire_with(H::init)
    }

    /// Initialize the host library with a custom initializer
    pub fn acquire_with<F>(init: F) -> WindowResult<Self>
    where
        F: FnOnce() -> WindowResult<H>,
    {
        let host = init()?;
        let leases = ACTIVE_LEASES.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Windowing subsystem acquired ({leases} active)");
        Ok(Self { host })
    }

    /// Give the lease back, terminating the host library if it was the last
    pub fn release(self) {
        drop(self);
    }

    /// Number of leases currently held in this process
    pub fn active_leases() -> usize {
        ACTIVE_LEASES.load(Ordering::SeqCst)
    }

    /// Access the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: WindowHost> Drop for Subsystem<H> {
    fn drop(&mut self) {
        let leases = ACTIVE_LEASES.fetch_sub(1, Ordering::SeqCst) - 1;
        log::debug!("Windowing subsystem released ({leases} active)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::window::headless::HeadlessHost;
    use crate::render::window::WindowError;

    #[test]
    fn test_failed_init_is_not_counted_as_lease() {
        let result = Subsystem::<HeadlessHost>::acquire();
        assert!(matches!(result, Err(WindowError::InitializationFailed)));

        let result = Subsystem::<HeadlessHost>::acquire_with(|| Err(WindowError::InitializationFailed));
        assert!(result.is_err());
    }

    #[test]
    fn test_release_drops_host() {
        let host = HeadlessHost::with_monitor(1920, 1080);
        let lease_host = host.clone();
        let mut subsystem = Subsystem::acquire_with(move || Ok(lease_host)).unwrap();
        assert_eq!(host.outstanding_handles(), 1);
        assert!(Subsystem::<HeadlessHost>::active_leases() >= 1);

        subsystem.host_mut().set_time(3.0);
        assert!((subsystem.host().time() - 3.0).abs() < f64::EPSILON);

        subsystem.release();
        assert_eq!(host.outstanding_handles(), 0);
    }
}
