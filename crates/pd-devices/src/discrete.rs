//! Generic discrete I/O device.

use pd_core::taxonomy::{DeviceKind, SubKind};

use crate::caps::{AnalogInput, AnalogOutput, DiscreteInput, DiscreteOutput, ManualGate};
use crate::device::{Device, DeviceCore};

/// Single discrete state with no device-specific control algorithm.
///
/// Used for generic I/O points (lamps, sirens, buttons, feedback contacts,
/// plain DI/DO channels) that the registry instantiates straight from the
/// taxonomy. The analog channel mirrors the state so the combined contract
/// stays total.
pub struct DiscreteIoDevice {
    core: DeviceCore,
    state: i32,
}

impl DiscreteIoDevice {
    pub fn new(name: &str, kind: DeviceKind, sub_kind: SubKind, par_cnt: usize) -> Self {
        Self {
            core: DeviceCore::new(name, kind, sub_kind, par_cnt),
            state: 0,
        }
    }
}

impl ManualGate for DiscreteIoDevice {
    fn manual_mode(&self) -> bool {
        self.core.manual_mode()
    }

    fn set_manual_mode(&mut self, manual: bool) {
        self.core.set_manual_mode(manual);
    }
}

impl DiscreteInput for DiscreteIoDevice {
    fn state(&self) -> i32 {
        self.state
    }
}

impl DiscreteOutput for DiscreteIoDevice {
    fn direct_on(&mut self) {
        self.state = 1;
    }

    fn direct_off(&mut self) {
        self.state = 0;
    }

    fn direct_set_state(&mut self, state: i32) {
        self.state = state;
    }
}

impl AnalogInput for DiscreteIoDevice {
    fn value(&self) -> f32 {
        self.state as f32
    }
}

impl AnalogOutput for DiscreteIoDevice {
    fn direct_set_value(&mut self, value: f32) {
        self.state = value.round() as i32;
    }

    fn off(&mut self) {
        DiscreteOutput::off(self);
    }
}

impl Device for DiscreteIoDevice {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
}
