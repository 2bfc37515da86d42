//! Named, offset-addressed parameter block.

use crate::error::{ParamError, ParamResult};
use crate::storage::{FloatStorage, MemoryFloatStorage};
use pd_core::wire::write_wire_float;
use tracing::{debug, warn};

/// Maximum length of a parameter name, in bytes.
pub const MAX_PARAM_NAME_LEN: usize = 25;

/// One device's persisted parameters.
///
/// Logical addressing is 1-based: the first parameter is index 1 and the
/// effective index of any access is `idx + offset` (device families reserve
/// index ranges through the offset). A block constructed with zero slots
/// carries no storage at all; reads return 0.0 and writes are dropped.
///
/// Configuration mistakes never panic and never return an error from the
/// naming path: a field device must keep its scan cycle alive under a bad
/// setup call, so failures are logged and ignored.
pub struct ParamBlock {
    store: Option<Box<dyn FloatStorage>>,
    names: Vec<Option<String>>,
}

impl ParamBlock {
    /// Block with `count` slots over in-memory storage.
    pub fn new(count: usize) -> Self {
        if count == 0 {
            return Self {
                store: None,
                names: Vec::new(),
            };
        }
        Self {
            store: Some(Box::new(MemoryFloatStorage::new(count))),
            names: vec![None; count],
        }
    }

    /// Block over an externally supplied (typically non-volatile) store.
    pub fn with_storage(store: Box<dyn FloatStorage>) -> Self {
        let count = store.count();
        Self {
            store: Some(store),
            names: vec![None; count],
        }
    }

    /// Number of slots (0 for an empty block).
    pub fn count(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.count())
    }

    /// Name a slot. First write wins.
    ///
    /// Rejected (logged, no-op) when the effective index is out of
    /// `[1, count]`, the name is longer than [`MAX_PARAM_NAME_LEN`] bytes,
    /// or the slot already has a name. Because names cannot be reassigned,
    /// repeated initialization calls are idempotent.
    pub fn set_name(&mut self, idx: usize, offset: usize, name: &str) {
        if self.store.is_none() {
            return;
        }
        let count = self.count();
        let logical = idx + offset;
        if logical < 1 || logical > count {
            warn!(
                idx,
                offset, count, "parameter name rejected: index out of range"
            );
            return;
        }
        if name.len() > MAX_PARAM_NAME_LEN {
            warn!(
                name,
                len = name.len(),
                max = MAX_PARAM_NAME_LEN,
                "parameter name rejected: too long"
            );
            return;
        }
        let slot = &mut self.names[logical - 1];
        match slot {
            None => *slot = Some(name.to_owned()),
            Some(existing) => {
                warn!(
                    idx,
                    offset,
                    existing = existing.as_str(),
                    rejected = name,
                    "parameter name rejected: slot already named"
                );
            }
        }
    }

    /// Name of a slot, if assigned.
    pub fn name(&self, idx: usize, offset: usize) -> Option<&str> {
        let logical = idx + offset;
        if logical < 1 || logical > self.names.len() {
            return None;
        }
        self.names[logical - 1].as_deref()
    }

    /// Raw write on the hot control path.
    ///
    /// No validation beyond storage capacity; out-of-range writes are
    /// dropped.
    pub fn set_value(&mut self, idx: usize, offset: usize, value: f32) {
        let logical = idx + offset;
        if let Some(store) = self.store.as_mut() {
            if logical >= 1 && logical <= store.count() {
                store.set(logical - 1, value);
            } else {
                debug!(idx, offset, "parameter write dropped: out of range");
            }
        }
    }

    /// Read a slot; 0.0 for an empty block or out-of-range index.
    pub fn value(&self, idx: usize, offset: usize) -> f32 {
        let logical = idx + offset;
        match self.store.as_ref() {
            Some(store) if logical >= 1 && logical <= store.count() => store.get(logical - 1),
            _ => 0.0,
        }
    }

    /// Write a parameter by name (server command path).
    ///
    /// Linear scan over the names; the store keeps single precision even
    /// though the command protocol carries doubles.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> ParamResult<()> {
        if let Some(store) = self.store.as_mut() {
            for (i, slot_name) in self.names.iter().enumerate() {
                if slot_name.as_deref() == Some(name) {
                    store.set(i, value as f32);
                    return Ok(());
                }
            }
        }
        debug!(name, "parameter name not found");
        Err(ParamError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Append every named slot as `"<name>=<value>, "`.
    ///
    /// Unnamed slots are skipped. The float format is the snapshot wire
    /// contract (see [`pd_core::wire`]).
    pub fn render(&self, out: &mut String) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        for (i, slot_name) in self.names.iter().enumerate() {
            if let Some(name) = slot_name {
                out.push_str(name);
                out.push('=');
                write_wire_float(out, store.get(i));
                out.push_str(", ");
            }
        }
    }
}

impl std::fmt::Debug for ParamBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamBlock")
            .field("count", &self.count())
            .field("names", &self.names)
            .finish()
    }
}
