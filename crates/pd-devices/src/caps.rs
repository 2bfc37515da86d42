//! Capability contracts for device collaborators.
//!
//! A capability describes what a device can do, not what it is: a regulator
//! drives its actuator through [`AnalogOutput`] without knowing whether the
//! concrete device is a controlled valve, a pump or a virtual test point.
//! Devices declare the subset matching their physical nature.
//!
//! Output capabilities split every state change into a *mediated* call that
//! respects the manual-mode gate and a *direct* call that is always
//! effective. Direct calls are the channel for explicit server commands and
//! for the operator override itself; mediated calls are what the automatic
//! control program uses.

/// The manual-mode gate.
///
/// While manual mode is on, an operator or the server owns the device:
/// mediated commands from the control program are suppressed, direct
/// commands keep working.
pub trait ManualGate {
    fn manual_mode(&self) -> bool;
    fn set_manual_mode(&mut self, manual: bool);
}

/// Discrete reading: feedback contacts, level switches, buttons.
pub trait DiscreteInput {
    /// Current state as an integer.
    fn state(&self) -> i32;

    /// Whether the device counts as triggered. Devices with a specific
    /// threshold override this; the default treats any nonzero state as
    /// active.
    fn is_active(&self) -> bool {
        self.state() != 0
    }
}

/// Discrete actuation: valves, agitators, lamps.
pub trait DiscreteOutput: DiscreteInput + ManualGate {
    /// Activate unconditionally (for a normally-closed valve: open).
    fn direct_on(&mut self);

    /// Deactivate unconditionally.
    fn direct_off(&mut self);

    /// Set an explicit state unconditionally.
    fn direct_set_state(&mut self, state: i32);

    /// Activate, unless the operator owns the device.
    fn on(&mut self) {
        if !self.manual_mode() {
            self.direct_on();
        }
    }

    /// Deactivate, unless the operator owns the device.
    fn off(&mut self) {
        if !self.manual_mode() {
            self.direct_off();
        }
    }

    /// Set a state, unless the operator owns the device.
    fn set_state(&mut self, state: i32) {
        if !self.manual_mode() {
            self.direct_set_state(state);
        }
    }

    /// Emergency shutdown. Stays effective in manual mode: safety
    /// shutdowns must not depend on who currently owns the device.
    fn instant_off(&mut self) {
        self.direct_off();
    }
}

/// Analog reading: temperature, flow, pressure.
pub trait AnalogInput {
    /// Current reading.
    fn value(&self) -> f32;
}

/// Analog actuation: control channels, setpoint outputs.
pub trait AnalogOutput: AnalogInput + ManualGate {
    /// Set the output unconditionally.
    fn direct_set_value(&mut self, value: f32);

    /// Set the output, unless the operator owns the device.
    fn set_value(&mut self, value: f32) {
        if !self.manual_mode() {
            self.direct_set_value(value);
        }
    }

    /// Drive the output to its passive value, respecting the manual gate.
    fn off(&mut self);
}

/// Devices carrying both a discrete and an analog channel, e.g. a
/// controlled valve with position feedback and a flow setpoint.
pub trait CombinedOutput: DiscreteOutput + AnalogOutput {}

impl<T: DiscreteOutput + AnalogOutput + ?Sized> CombinedOutput for T {}

/// Working state of a flow counter. Wire values are a protocol surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterState {
    Work = 1,
    Pause = 2,
    Error = -10,
    /// Flow below the configured minimum.
    LowFlowError = -12,
    /// Flow above the configured maximum.
    HighFlowError = -13,
}

impl CounterState {
    pub fn wire_value(self) -> i32 {
        self as i32
    }
}

/// Flow counter / totalizer.
pub trait Counter {
    /// Suspend counting.
    fn pause(&mut self);

    /// Resume counting.
    fn start(&mut self);

    /// Zero the counter and stop; counting resumes only after an explicit
    /// [`Counter::start`].
    fn reset(&mut self);

    /// Zero the counter and keep counting.
    fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Accumulated quantity.
    fn quantity(&self) -> u32;

    /// Instantaneous flow rate.
    fn flow(&self) -> f32;

    fn counter_state(&self) -> CounterState;

    /// Running total that ignores pauses.
    fn abs_quantity(&self) -> u32;

    /// Zero the pause-independent total.
    fn abs_reset(&mut self);

    /// Wait interval for linked-pump accounting, in milliseconds.
    fn pump_dt(&self) -> u64;

    /// Minimum flow that counts as linked-pump work.
    fn min_flow(&self) -> f32;
}

/// Double-seat mixproof valve: the two seats actuate independently so the
/// seat area can be flushed without cross-contaminating product lines.
pub trait Mixproof {
    fn open_upper_seat(&mut self);
    fn open_lower_seat(&mut self);
}

/// Weighing terminal.
pub trait Scale {
    /// Zero the current load.
    fn tare(&mut self);

    /// Weight in kilograms.
    fn weight(&self) -> f32;

    fn scale_state(&self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Relay {
        manual: bool,
        state: i32,
    }

    impl ManualGate for Relay {
        fn manual_mode(&self) -> bool {
            self.manual
        }
        fn set_manual_mode(&mut self, manual: bool) {
            self.manual = manual;
        }
    }

    impl DiscreteInput for Relay {
        fn state(&self) -> i32 {
            self.state
        }
    }

    impl DiscreteOutput for Relay {
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

    #[test]
    fn mediated_calls_respect_the_gate() {
        let mut relay = Relay {
            manual: true,
            state: 1,
        };
        relay.off();
        relay.set_state(5);
        assert_eq!(relay.state, 1);

        relay.set_manual_mode(false);
        relay.off();
        assert_eq!(relay.state, 0);
    }

    #[test]
    fn instant_off_ignores_the_gate() {
        let mut relay = Relay {
            manual: true,
            state: 1,
        };
        relay.instant_off();
        assert_eq!(relay.state, 0);
    }

    #[test]
    fn default_activity_threshold_is_nonzero() {
        let relay = Relay {
            manual: false,
            state: -3,
        };
        assert!(relay.is_active());
        let relay = Relay {
            manual: false,
            state: 0,
        };
        assert!(!relay.is_active());
    }

    #[test]
    fn counter_state_wire_values() {
        assert_eq!(CounterState::Work.wire_value(), 1);
        assert_eq!(CounterState::Pause.wire_value(), 2);
        assert_eq!(CounterState::Error.wire_value(), -10);
        assert_eq!(CounterState::LowFlowError.wire_value(), -12);
        assert_eq!(CounterState::HighFlowError.wire_value(), -13);
    }

    struct Totalizer {
        running: bool,
        qty: u32,
        abs_qty: u32,
    }

    impl Counter for Totalizer {
        fn pause(&mut self) {
            self.running = false;
        }
        fn start(&mut self) {
            self.running = true;
        }
        fn reset(&mut self) {
            self.qty = 0;
            self.running = false;
        }
        fn quantity(&self) -> u32 {
            self.qty
        }
        fn flow(&self) -> f32 {
            0.0
        }
        fn counter_state(&self) -> CounterState {
            if self.running {
                CounterState::Work
            } else {
                CounterState::Pause
            }
        }
        fn abs_quantity(&self) -> u32 {
            self.abs_qty
        }
        fn abs_reset(&mut self) {
            self.abs_qty = 0;
        }
        fn pump_dt(&self) -> u64 {
            0
        }
        fn min_flow(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn counter_restart_resumes_counting() {
        let mut counter = Totalizer {
            running: true,
            qty: 42,
            abs_qty: 42,
        };
        counter.reset();
        assert_eq!(counter.counter_state(), CounterState::Pause);

        counter.qty = 10;
        counter.restart();
        assert_eq!(counter.quantity(), 0);
        assert_eq!(counter.counter_state(), CounterState::Work);
        // The absolute total survives both resets.
        assert_eq!(counter.abs_quantity(), 42);
    }
}
