//! Generic analog I/O device.

use pd_core::taxonomy::{DeviceKind, SubKind};

use crate::caps::{AnalogInput, AnalogOutput, DiscreteInput, DiscreteOutput, ManualGate};
use crate::device::{Device, DeviceCore};

/// Single analog value with no device-specific control algorithm.
///
/// Used for generic AI/AO channels and virtual analog points. The discrete
/// channel maps onto the value: `on` drives full scale, `off` drives zero,
/// and the state reads 1 whenever the value is nonzero.
pub struct AnalogIoDevice {
    core: DeviceCore,
    value: f32,
}

impl AnalogIoDevice {
    /// Output driven by `direct_on` (percent of range).
    pub const ACTIVE_VALUE: f32 = 100.0;

    pub fn new(name: &str, kind: DeviceKind, sub_kind: SubKind, par_cnt: usize) -> Self {
        Self {
            core: DeviceCore::new(name, kind, sub_kind, par_cnt),
            value: 0.0,
        }
    }
}

impl ManualGate for AnalogIoDevice {
    fn manual_mode(&self) -> bool {
        self.core.manual_mode()
    }

    fn set_manual_mode(&mut self, manual: bool) {
        self.core.set_manual_mode(manual);
    }
}

impl AnalogInput for AnalogIoDevice {
    fn value(&self) -> f32 {
        self.value
    }
}

impl DiscreteInput for AnalogIoDevice {
    fn state(&self) -> i32 {
        (self.value != 0.0) as i32
    }
}

impl DiscreteOutput for AnalogIoDevice {
    fn direct_on(&mut self) {
        self.value = Self::ACTIVE_VALUE;
    }

    fn direct_off(&mut self) {
        self.value = 0.0;
    }

    fn direct_set_state(&mut self, state: i32) {
        self.value = state as f32;
    }
}

impl AnalogOutput for AnalogIoDevice {
    fn direct_set_value(&mut self, value: f32) {
        self.value = value;
    }

    fn off(&mut self) {
        DiscreteOutput::off(self);
    }
}

impl Device for AnalogIoDevice {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    /// In emulation mode the scan replaces the value with a simulated
    /// reading; otherwise the value only changes through commands.
    fn evaluate_io(&mut self) {
        if self.core.emulation() {
            self.value = self.core.emulator_mut().next_value();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> AnalogIoDevice {
        AnalogIoDevice::new("AO1", DeviceKind::AnalogOut, SubKind::None, 0)
    }

    #[test]
    fn starts_at_zero() {
        let dev = channel();
        assert_eq!(AnalogInput::value(&dev), 0.0);
        assert_eq!(DiscreteInput::state(&dev), 0);
    }

    #[test]
    fn direct_set_value_stores() {
        let mut dev = channel();
        dev.direct_set_value(42.5);
        assert_eq!(AnalogInput::value(&dev), 42.5);
        assert_eq!(DiscreteInput::state(&dev), 1);
    }

    #[test]
    fn on_off_map_to_full_scale_and_zero() {
        let mut dev = channel();
        dev.direct_on();
        assert_eq!(AnalogInput::value(&dev), AnalogIoDevice::ACTIVE_VALUE);
        dev.direct_off();
        assert_eq!(AnalogInput::value(&dev), 0.0);
    }

    #[test]
    fn mediated_set_value_respects_the_gate() {
        let mut dev = channel();
        dev.set_value(10.0);
        assert_eq!(AnalogInput::value(&dev), 10.0);

        dev.set_manual_mode(true);
        dev.set_value(99.0);
        assert_eq!(AnalogInput::value(&dev), 10.0);
        dev.direct_set_value(99.0);
        assert_eq!(AnalogInput::value(&dev), 99.0);
    }

    #[test]
    fn evaluate_io_draws_from_the_emulator() {
        let mut dev = channel();
        dev.core_mut().configure_emulator(55.0, 0.0);

        dev.evaluate_io();
        assert_eq!(AnalogInput::value(&dev), 0.0);

        dev.core_mut().set_emulation(true);
        dev.evaluate_io();
        assert_eq!(AnalogInput::value(&dev), 55.0);
    }
}
