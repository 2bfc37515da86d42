//! Integration tests for the script snapshot format.
//!
//! The supervisory layer re-parses these records, so shapes are asserted
//! exactly: field order, field suppression and the float format are all
//! wire contracts.

use pd_core::taxonomy::{DeviceKind, LevelSwitchSub, SubKind, ValveSub};
use pd_devices::caps::{
    AnalogInput, AnalogOutput, DiscreteInput, DiscreteOutput, ManualGate,
};
use pd_devices::{AnalogIoDevice, Device, DeviceCore, DiscreteIoDevice};

fn snapshot(dev: &impl Device, prefix: &str) -> String {
    let mut out = String::new();
    dev.render(prefix, &mut out);
    out
}

#[test]
fn discrete_input_with_named_parameter() {
    let mut fb = DiscreteIoDevice::new("FB1", DeviceKind::DiscreteIn, SubKind::None, 1);
    fb.core_mut().params_mut().set_name(1, 0, "OFFSET");
    fb.core_mut().params_mut().set_value(1, 0, 2.0);
    fb.direct_set_state(1);

    let out = snapshot(&fb, "");
    assert!(out.contains("ST=1"));
    assert!(!out.contains("V="));
    assert!(out.contains("OFFSET=2"));
    assert_eq!(out, "FB1={M=0, ST=1, OFFSET=2}\n");
}

#[test]
fn plain_valve_suppresses_the_value_field() {
    let mut v1 = DiscreteIoDevice::new("V1", DeviceKind::Valve, SubKind::Valve(ValveSub::Do1), 0);
    v1.direct_on();
    assert_eq!(snapshot(&v1, "\t"), "\tV1={M=0, ST=1}\n");
}

#[test]
fn analog_output_suppresses_the_state_field() {
    let mut ao = AnalogIoDevice::new("AO1", DeviceKind::AnalogOut, SubKind::None, 0);
    ao.direct_set_value(42.5);
    assert_eq!(snapshot(&ao, ""), "AO1={M=0, V=42.50}\n");
}

#[test]
fn integral_values_render_without_decimals() {
    let mut ai = AnalogIoDevice::new("AI1", DeviceKind::AnalogIn, SubKind::None, 0);
    ai.direct_set_value(3.0);
    assert_eq!(snapshot(&ai, ""), "AI1={M=0, ST=1, V=3}\n");

    ai.direct_set_value(3.5);
    assert_eq!(snapshot(&ai, ""), "AI1={M=0, ST=1, V=3.50}\n");
}

#[test]
fn manual_mode_is_always_reported() {
    let mut v1 = DiscreteIoDevice::new("V1", DeviceKind::Valve, SubKind::None, 0);
    v1.set_manual_mode(true);
    assert_eq!(snapshot(&v1, ""), "V1={M=1, ST=0}\n");
}

#[test]
fn min_max_level_switches_render_like_discrete_inputs() {
    let min = DiscreteIoDevice::new(
        "LS1",
        DeviceKind::LevelSwitch,
        SubKind::LevelSwitch(LevelSwitchSub::Min),
        0,
    );
    assert_eq!(snapshot(&min, ""), "LS1={M=0, ST=0}\n");

    let mut iolink = AnalogIoDevice::new(
        "LS2",
        DeviceKind::LevelSwitch,
        SubKind::LevelSwitch(LevelSwitchSub::IoLinkMin),
        0,
    );
    iolink.direct_set_value(81.25);
    assert_eq!(snapshot(&iolink, ""), "LS2={M=0, ST=1, V=81.25}\n");
}

#[test]
fn named_parameters_follow_the_builtin_fields() {
    let mut m1 = DiscreteIoDevice::new("M1", DeviceKind::Motor, SubKind::None, 2);
    m1.core_mut().params_mut().set_name(1, 0, "P_ON_TIME");
    m1.core_mut().params_mut().set_name(2, 0, "P_LIMIT");
    m1.core_mut().params_mut().set_value(1, 0, 10.0);
    m1.core_mut().params_mut().set_value(2, 0, 0.75);

    assert_eq!(
        snapshot(&m1, ""),
        "M1={M=0, ST=0, V=0, P_ON_TIME=10, P_LIMIT=0.75}\n"
    );
}

/// Device with an extension field, standing in for richer device types
/// that publish extra feedback (seat states, frequency, diagnostics).
struct SeatValve {
    core: DeviceCore,
    state: i32,
    upper_seat: bool,
}

impl ManualGate for SeatValve {
    fn manual_mode(&self) -> bool {
        self.core.manual_mode()
    }
    fn set_manual_mode(&mut self, manual: bool) {
        self.core.set_manual_mode(manual);
    }
}

impl DiscreteInput for SeatValve {
    fn state(&self) -> i32 {
        self.state
    }
}

impl DiscreteOutput for SeatValve {
    fn direct_on(&mut self) {
        self.state = 1;
    }
    fn direct_off(&mut self) {
        self.state = 0;
        self.upper_seat = false;
    }
    fn direct_set_state(&mut self, state: i32) {
        self.state = state;
    }
}

impl AnalogInput for SeatValve {
    fn value(&self) -> f32 {
        self.state as f32
    }
}

impl AnalogOutput for SeatValve {
    fn direct_set_value(&mut self, value: f32) {
        self.state = value.round() as i32;
    }
    fn off(&mut self) {
        DiscreteOutput::off(self);
    }
}

impl Device for SeatValve {
    fn core(&self) -> &DeviceCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }
    fn render_ex(&self, out: &mut String) {
        out.push_str(if self.upper_seat { "US=1, " } else { "US=0, " });
    }
}

#[test]
fn extension_fields_sit_between_builtins_and_parameters() {
    let mut v = SeatValve {
        core: DeviceCore::new(
            "V2",
            DeviceKind::Valve,
            SubKind::Valve(ValveSub::Mixproof),
            1,
        ),
        state: 0,
        upper_seat: true,
    };
    v.core.params_mut().set_name(1, 0, "P_DELAY");
    v.core.params_mut().set_value(1, 0, 1.5);

    assert_eq!(snapshot(&v, ""), "V2={M=0, ST=0, US=1, P_DELAY=1.50}\n");
}

#[test]
fn extension_field_is_last_when_no_parameters_exist() {
    let v = SeatValve {
        core: DeviceCore::new("V3", DeviceKind::Valve, SubKind::Valve(ValveSub::Mixproof), 0),
        state: 0,
        upper_seat: false,
    };
    // The trailing ", " of the extension field is trimmed.
    assert_eq!(snapshot(&v, ""), "V3={M=0, ST=0, US=0}\n");
}
