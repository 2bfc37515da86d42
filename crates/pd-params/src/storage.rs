//! Storage backends for persisted parameters.
//!
//! The controller keeps parameter values in non-volatile memory so they
//! survive a restart. This layer sees that memory through [`FloatStorage`]:
//! a flat, fixed-capacity block of raw float slots with 0-based addressing.
//! [`MemoryFloatStorage`] is the in-memory implementation used for virtual
//! devices and tests; a flash- or battery-backed implementation plugs in
//! through the same trait.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Key-indexed float store backing one device's parameter block.
///
/// Slot addressing is 0-based and raw; the 1-based logical scheme lives in
/// [`crate::ParamBlock`]. Implementations must not panic on out-of-range
/// slots: reads return 0.0 and writes are dropped.
pub trait FloatStorage {
    /// Number of slots. Fixed for the lifetime of the store.
    fn count(&self) -> usize;

    /// Read a raw slot; 0.0 when out of range.
    fn get(&self, slot: usize) -> f32;

    /// Write a raw slot; out-of-range writes are dropped.
    fn set(&mut self, slot: usize, value: f32);
}

/// Volatile reference implementation of [`FloatStorage`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFloatStorage {
    slots: Vec<f32>,
}

impl MemoryFloatStorage {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![0.0; count],
        }
    }
}

impl FloatStorage for MemoryFloatStorage {
    fn count(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, slot: usize) -> f32 {
        self.slots.get(slot).copied().unwrap_or(0.0)
    }

    fn set(&mut self, slot: usize, value: f32) {
        if let Some(v) = self.slots.get_mut(slot) {
            *v = value;
        }
    }
}

/// Persisted integer parameters holding a device's error/alarm configuration.
///
/// The block is owned by the error-handling subsystem; devices hold a
/// non-owning [`ErrorParamsRef`] to it and degrade to defaults when the
/// owner is gone.
#[derive(Debug, Clone, Default)]
pub struct ErrorParams {
    slots: Vec<u32>,
}

impl ErrorParams {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![0; count],
        }
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Read a slot; 0 when out of range.
    pub fn get(&self, slot: usize) -> u32 {
        self.slots.get(slot).copied().unwrap_or(0)
    }

    /// Write a slot; out-of-range writes are dropped.
    pub fn set(&mut self, slot: usize, value: u32) {
        if let Some(v) = self.slots.get_mut(slot) {
            *v = value;
        }
    }

    /// Shared handle for the owning side.
    pub fn shared(self) -> Rc<RefCell<ErrorParams>> {
        Rc::new(RefCell::new(self))
    }
}

/// Non-owning handle to an [`ErrorParams`] block.
///
/// Lifetime is managed by the owner elsewhere; an unset or expired handle is
/// not an error, every read degrades to zero.
#[derive(Debug, Clone, Default)]
pub struct ErrorParamsRef {
    inner: Weak<RefCell<ErrorParams>>,
}

impl ErrorParamsRef {
    pub fn bind(&mut self, owner: &Rc<RefCell<ErrorParams>>) {
        self.inner = Rc::downgrade(owner);
    }

    pub fn is_bound(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Read through the handle; 0 when unbound, expired or out of range.
    pub fn get(&self, slot: usize) -> u32 {
        self.inner
            .upgrade()
            .map(|block| block.borrow().get(slot))
            .unwrap_or(0)
    }

    /// Write through the handle; silently dropped when unbound.
    pub fn set(&self, slot: usize, value: u32) {
        if let Some(block) = self.inner.upgrade() {
            block.borrow_mut().set(slot, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let mut store = MemoryFloatStorage::new(3);
        store.set(0, 1.5);
        store.set(2, -4.0);
        assert_eq!(store.get(0), 1.5);
        assert_eq!(store.get(1), 0.0);
        assert_eq!(store.get(2), -4.0);
    }

    #[test]
    fn memory_storage_ignores_out_of_range() {
        let mut store = MemoryFloatStorage::new(2);
        store.set(5, 9.0);
        assert_eq!(store.get(5), 0.0);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn error_params_ref_degrades_to_zero() {
        let handle = ErrorParamsRef::default();
        assert!(!handle.is_bound());
        assert_eq!(handle.get(0), 0);
        handle.set(0, 7); // dropped, no panic
    }

    #[test]
    fn error_params_ref_reads_through_owner() {
        let owner = ErrorParams::new(4).shared();
        let mut handle = ErrorParamsRef::default();
        handle.bind(&owner);

        owner.borrow_mut().set(1, 42);
        assert_eq!(handle.get(1), 42);

        handle.set(2, 7);
        assert_eq!(owner.borrow().get(2), 7);
    }

    #[test]
    fn error_params_ref_expires_with_owner() {
        let mut handle = ErrorParamsRef::default();
        {
            let owner = ErrorParams::new(1).shared();
            handle.bind(&owner);
            handle.set(0, 3);
            assert_eq!(handle.get(0), 3);
        }
        assert!(!handle.is_bound());
        assert_eq!(handle.get(0), 0);
    }
}
