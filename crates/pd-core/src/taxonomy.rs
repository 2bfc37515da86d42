//! Device taxonomy: kinds, scoped sub-kinds and wire tags.
//!
//! Every I/O point carries a two-level classification. [`DeviceKind`] selects
//! the physical class (valve, motor, level switch, ...) and maps to a stable
//! wire tag consumed by the supervisory server. Sub-kind numeric values are
//! scoped per kind: the same number means different things for different
//! kinds, so a sub-kind is never interpreted without its owner. [`SubKind`]
//! makes that pairing explicit as a tagged union.

/// Physical class of a device. The wire tags are a stable protocol surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceKind {
    /// On/off valve (V).
    Valve,
    /// Valve with an analog control channel (VC).
    ControlledValve,
    /// Motor / agitator (M).
    Motor,
    /// Level switch, present/absent (LS).
    LevelSwitch,
    /// Temperature transmitter (TE).
    Temperature,
    /// Flow-presence switch (FS).
    FlowSwitch,
    /// Position sensor (GS).
    Position,
    /// Flow counter / totalizer (FQT).
    Counter,
    /// Level transmitter, continuous value (LT).
    Level,
    /// Concentration transmitter (QT).
    Concentration,
    /// Alarm horn (HA).
    Siren,
    /// Alarm light (HL).
    Lamp,
    /// Push-button (SB).
    Button,
    /// Generic discrete input signal (DI).
    DiscreteIn,
    /// Generic discrete output signal (DO).
    DiscreteOut,
    /// Generic analog input signal (AI).
    AnalogIn,
    /// Generic analog output signal (AO).
    AnalogOut,
    /// Scale / strain gauge (WT).
    Scale,
    /// Pressure transmitter (PT).
    Pressure,
    /// Circuit breaker (F).
    Breaker,
    /// PID / threshold regulator (C).
    Regulator,
    /// Signal tower (HLA).
    SignalColumn,
    /// Vision camera (CAM).
    Camera,
    /// Differential-pressure sensor (PDS).
    PressureDiff,
    /// Temperature switch (TS).
    TempSwitch,
}

impl DeviceKind {
    /// Wire tag used in device names and the script snapshot.
    pub fn tag(self) -> &'static str {
        match self {
            DeviceKind::Valve => "V",
            DeviceKind::ControlledValve => "VC",
            DeviceKind::Motor => "M",
            DeviceKind::LevelSwitch => "LS",
            DeviceKind::Temperature => "TE",
            DeviceKind::FlowSwitch => "FS",
            DeviceKind::Position => "GS",
            DeviceKind::Counter => "FQT",
            DeviceKind::Level => "LT",
            DeviceKind::Concentration => "QT",
            DeviceKind::Siren => "HA",
            DeviceKind::Lamp => "HL",
            DeviceKind::Button => "SB",
            DeviceKind::DiscreteIn => "DI",
            DeviceKind::DiscreteOut => "DO",
            DeviceKind::AnalogIn => "AI",
            DeviceKind::AnalogOut => "AO",
            DeviceKind::Scale => "WT",
            DeviceKind::Pressure => "PT",
            DeviceKind::Breaker => "F",
            DeviceKind::Regulator => "C",
            DeviceKind::SignalColumn => "HLA",
            DeviceKind::Camera => "CAM",
            DeviceKind::PressureDiff => "PDS",
            DeviceKind::TempSwitch => "TS",
        }
    }

    /// Human-readable label for diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Valve => "valve",
            DeviceKind::ControlledValve => "controlled valve",
            DeviceKind::Motor => "motor",
            DeviceKind::LevelSwitch => "level switch",
            DeviceKind::Temperature => "temperature",
            DeviceKind::FlowSwitch => "flow switch",
            DeviceKind::Position => "position sensor",
            DeviceKind::Counter => "flow counter",
            DeviceKind::Level => "level",
            DeviceKind::Concentration => "concentration",
            DeviceKind::Siren => "alarm horn",
            DeviceKind::Lamp => "alarm light",
            DeviceKind::Button => "push-button",
            DeviceKind::DiscreteIn => "discrete input",
            DeviceKind::DiscreteOut => "discrete output",
            DeviceKind::AnalogIn => "analog input",
            DeviceKind::AnalogOut => "analog output",
            DeviceKind::Scale => "scale",
            DeviceKind::Pressure => "pressure",
            DeviceKind::Breaker => "circuit breaker",
            DeviceKind::Regulator => "regulator",
            DeviceKind::SignalColumn => "signal tower",
            DeviceKind::Camera => "camera",
            DeviceKind::PressureDiff => "differential pressure",
            DeviceKind::TempSwitch => "temperature switch",
        }
    }

    /// Whether the snapshot carries an `ST=` field for this kind.
    ///
    /// Analog outputs are the single exception: their state is their value.
    pub fn reports_state(self) -> bool {
        self != DeviceKind::AnalogOut
    }

    /// Whether the snapshot carries a `V=` field for this kind/sub-kind.
    ///
    /// Purely discrete devices have no analog reading to publish; min/max
    /// level switches behave like discrete inputs and are suppressed too.
    pub fn reports_value(self, sub: SubKind) -> bool {
        match self {
            DeviceKind::Valve
            | DeviceKind::FlowSwitch
            | DeviceKind::Position
            | DeviceKind::Siren
            | DeviceKind::Lamp
            | DeviceKind::Button
            | DeviceKind::DiscreteIn
            | DeviceKind::DiscreteOut => false,
            DeviceKind::LevelSwitch => !matches!(
                sub,
                SubKind::LevelSwitch(LevelSwitchSub::Min | LevelSwitchSub::Max)
            ),
            _ => true,
        }
    }
}

/// Valve sub-kinds (scoped to [`DeviceKind::Valve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValveSub {
    /// One actuation channel.
    Do1 = 1,
    /// Two actuation channels.
    Do2,
    /// One channel, feedback on the closed position.
    Do1Di1FbOff,
    /// One channel, feedback on the open position.
    Do1Di1FbOn,
    /// One channel, two feedbacks.
    Do1Di2,
    /// Two channels, two feedbacks.
    Do2Di2,
    /// Double-seat mixproof valve.
    Mixproof,
    /// Mixproof valve on an AS-i bus.
    AsMixproof,
    /// Tank-bottom mixproof valve.
    BottomMixproof,
    /// One channel, two feedbacks, AS-i bus.
    AsDo1Di2,
    /// Bistable, two channels, two feedbacks.
    Do2Di2Bistable,
    /// IO-Link VTUG terminal, one channel.
    IolVtugDo1,
    /// IO-Link VTUG, feedback on the closed position.
    IolVtugDo1FbOff,
    /// IO-Link VTUG, feedback on the open position.
    IolVtugDo1FbOn,
    /// IO-Link mixproof valve.
    IolMixproof,
    /// IO-Link shut-off valve, one channel, two feedbacks.
    IolDo1Di2,
    /// IO-Link VTUG, one channel, two feedbacks.
    IolVtugDo1Di2,
    /// Virtual valve (no module binding).
    Virtual,
    /// Valve with a flushing mini-valve.
    MiniFlushing,
    /// IO-Link terminal mixproof, three channels.
    IolTerminalMixproofDo3,
    /// IO-Link terminal mixproof, three channels, two feedbacks.
    IolTerminalMixproofDo3Di2,
}

/// Controlled-valve sub-kinds (scoped to [`DeviceKind::ControlledValve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlledValveSub {
    Analog = 1,
    IoLink,
    Virtual,
}

/// Motor sub-kinds (scoped to [`DeviceKind::Motor`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotorSub {
    /// No speed control.
    Basic = 1,
    /// Frequency-controlled.
    Freq,
    /// Reversible, reverse engages jointly.
    Rev,
    /// Reversible with frequency control, reverse engages jointly.
    RevFreq,
    /// Reversible, reverse engages separately.
    Rev2,
    /// Reversible with frequency control, reverse engages separately.
    RevFreq2,
    /// Separate reverse and a dedicated error signal.
    Rev2Error,
    /// Separate reverse, frequency control, dedicated error signal.
    RevFreq2Error,
    /// Driven by an Altivar frequency converter over Ethernet.
    Altivar,
    /// Virtual motor.
    Virtual,
    /// Altivar-driven with linear speed calculation.
    AltivarLinear,
}

/// Level-switch sub-kinds (scoped to [`DeviceKind::LevelSwitch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelSwitchSub {
    /// Wired as a minimum-level switch.
    Min = 1,
    /// Wired as a maximum-level switch.
    Max,
    IoLinkMin,
    IoLinkMax,
    Virtual,
}

/// Temperature sub-kinds (scoped to [`DeviceKind::Temperature`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureSub {
    Basic = 1,
    IoLink,
    Virtual,
    /// Analog input with configured value limits.
    AnalogLimits,
}

/// Counter sub-kinds (scoped to [`DeviceKind::Counter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterSub {
    /// Totalizer only.
    Basic = 1,
    /// Totalizer plus flow rate.
    Flow,
    /// Virtual counter (no module binding).
    Virtual = 4,
    IoLink,
}

/// Concentration sub-kinds (scoped to [`DeviceKind::Concentration`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcentrationSub {
    Basic = 1,
    /// With a diagnostic channel.
    Diagnostics,
    IoLink,
    Virtual,
}

/// Level-transmitter sub-kinds (scoped to [`DeviceKind::Level`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelSub {
    Basic = 1,
    /// Level in a cylindrical tank.
    Cylindrical,
    /// Tank with a cone bottom.
    ConeBottom,
    /// Tank with a truncated-cylinder bottom.
    TruncatedBottom,
    IoLink,
    Virtual,
}

/// Generic discrete-output sub-kinds (scoped to [`DeviceKind::DiscreteOut`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscreteOutSub {
    /// Bound to an I/O module channel.
    Module = 1,
    Virtual,
}

/// Generic discrete-input sub-kinds (scoped to [`DeviceKind::DiscreteIn`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscreteInSub {
    Module = 1,
    Virtual,
}

/// Generic analog-output sub-kinds (scoped to [`DeviceKind::AnalogOut`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalogOutSub {
    Module = 1,
    Virtual,
}

/// Generic analog-input sub-kinds (scoped to [`DeviceKind::AnalogIn`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalogInSub {
    Module = 1,
    Virtual,
}

/// Pressure sub-kinds (scoped to [`DeviceKind::Pressure`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureSub {
    Analog = 1,
    IoLink,
    Virtual,
}

/// Breaker sub-kinds (scoped to [`DeviceKind::Breaker`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakerSub {
    Basic = 1,
    Virtual = 4,
}

/// Signal-tower sub-kinds (scoped to [`DeviceKind::SignalColumn`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalColumnSub {
    /// Red, yellow, green and a siren.
    Basic = 1,
    Virtual,
    IoLink,
}

/// Position-sensor sub-kinds (scoped to [`DeviceKind::Position`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionSub {
    Basic = 1,
    Virtual,
}

/// Siren sub-kinds (scoped to [`DeviceKind::Siren`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SirenSub {
    Basic = 1,
    Virtual,
}

/// Lamp sub-kinds (scoped to [`DeviceKind::Lamp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LampSub {
    Basic = 1,
    Virtual,
}

/// Flow-switch sub-kinds (scoped to [`DeviceKind::FlowSwitch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowSwitchSub {
    Basic = 1,
    Virtual,
}

/// Button sub-kinds (scoped to [`DeviceKind::Button`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonSub {
    Basic = 1,
    Virtual,
}

/// Scale sub-kinds (scoped to [`DeviceKind::Scale`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleSub {
    Basic = 1,
    Virtual,
    Rs232,
    Ethernet,
}

/// Camera sub-kinds (scoped to [`DeviceKind::Camera`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraSub {
    /// Activation signal, one result, ready signal.
    Do1Di2 = 1,
    /// Activation signal and one result.
    Do1Di1,
    /// Activation signal, two results, ready signal.
    Do1Di3,
}

/// Differential-pressure sub-kinds (scoped to [`DeviceKind::PressureDiff`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureDiffSub {
    Basic = 1,
    Virtual,
}

/// Temperature-switch sub-kinds (scoped to [`DeviceKind::TempSwitch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TempSwitchSub {
    Basic = 1,
    Virtual,
}

/// Regulator sub-kinds (scoped to [`DeviceKind::Regulator`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegulatorSub {
    Pid = 1,
    Threshold,
}

/// Sub-kind paired with its owning kind.
///
/// The numeric values above collide across kinds on purpose (they come from
/// a per-kind wire protocol); this tagged union is what keeps consumers from
/// interpreting a value without its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubKind {
    /// Sub-kind not set (wire value -1).
    None,
    Valve(ValveSub),
    ControlledValve(ControlledValveSub),
    Motor(MotorSub),
    LevelSwitch(LevelSwitchSub),
    Temperature(TemperatureSub),
    FlowSwitch(FlowSwitchSub),
    Position(PositionSub),
    Counter(CounterSub),
    Level(LevelSub),
    Concentration(ConcentrationSub),
    Siren(SirenSub),
    Lamp(LampSub),
    Button(ButtonSub),
    DiscreteIn(DiscreteInSub),
    DiscreteOut(DiscreteOutSub),
    AnalogIn(AnalogInSub),
    AnalogOut(AnalogOutSub),
    Scale(ScaleSub),
    Pressure(PressureSub),
    Breaker(BreakerSub),
    Regulator(RegulatorSub),
    SignalColumn(SignalColumnSub),
    Camera(CameraSub),
    PressureDiff(PressureDiffSub),
    TempSwitch(TempSwitchSub),
}

impl SubKind {
    /// Owning kind, `None` when the sub-kind is unset.
    pub fn kind(self) -> Option<DeviceKind> {
        match self {
            SubKind::None => None,
            SubKind::Valve(_) => Some(DeviceKind::Valve),
            SubKind::ControlledValve(_) => Some(DeviceKind::ControlledValve),
            SubKind::Motor(_) => Some(DeviceKind::Motor),
            SubKind::LevelSwitch(_) => Some(DeviceKind::LevelSwitch),
            SubKind::Temperature(_) => Some(DeviceKind::Temperature),
            SubKind::FlowSwitch(_) => Some(DeviceKind::FlowSwitch),
            SubKind::Position(_) => Some(DeviceKind::Position),
            SubKind::Counter(_) => Some(DeviceKind::Counter),
            SubKind::Level(_) => Some(DeviceKind::Level),
            SubKind::Concentration(_) => Some(DeviceKind::Concentration),
            SubKind::Siren(_) => Some(DeviceKind::Siren),
            SubKind::Lamp(_) => Some(DeviceKind::Lamp),
            SubKind::Button(_) => Some(DeviceKind::Button),
            SubKind::DiscreteIn(_) => Some(DeviceKind::DiscreteIn),
            SubKind::DiscreteOut(_) => Some(DeviceKind::DiscreteOut),
            SubKind::AnalogIn(_) => Some(DeviceKind::AnalogIn),
            SubKind::AnalogOut(_) => Some(DeviceKind::AnalogOut),
            SubKind::Scale(_) => Some(DeviceKind::Scale),
            SubKind::Pressure(_) => Some(DeviceKind::Pressure),
            SubKind::Breaker(_) => Some(DeviceKind::Breaker),
            SubKind::Regulator(_) => Some(DeviceKind::Regulator),
            SubKind::SignalColumn(_) => Some(DeviceKind::SignalColumn),
            SubKind::Camera(_) => Some(DeviceKind::Camera),
            SubKind::PressureDiff(_) => Some(DeviceKind::PressureDiff),
            SubKind::TempSwitch(_) => Some(DeviceKind::TempSwitch),
        }
    }

    /// Scoped numeric wire value (-1 when unset).
    pub fn value(self) -> i32 {
        match self {
            SubKind::None => -1,
            SubKind::Valve(s) => s as i32,
            SubKind::ControlledValve(s) => s as i32,
            SubKind::Motor(s) => s as i32,
            SubKind::LevelSwitch(s) => s as i32,
            SubKind::Temperature(s) => s as i32,
            SubKind::FlowSwitch(s) => s as i32,
            SubKind::Position(s) => s as i32,
            SubKind::Counter(s) => s as i32,
            SubKind::Level(s) => s as i32,
            SubKind::Concentration(s) => s as i32,
            SubKind::Siren(s) => s as i32,
            SubKind::Lamp(s) => s as i32,
            SubKind::Button(s) => s as i32,
            SubKind::DiscreteIn(s) => s as i32,
            SubKind::DiscreteOut(s) => s as i32,
            SubKind::AnalogIn(s) => s as i32,
            SubKind::AnalogOut(s) => s as i32,
            SubKind::Scale(s) => s as i32,
            SubKind::Pressure(s) => s as i32,
            SubKind::Breaker(s) => s as i32,
            SubKind::Regulator(s) => s as i32,
            SubKind::SignalColumn(s) => s as i32,
            SubKind::Camera(s) => s as i32,
            SubKind::PressureDiff(s) => s as i32,
            SubKind::TempSwitch(s) => s as i32,
        }
    }

    /// Whether this sub-kind belongs to `kind`.
    pub fn belongs_to(self, kind: DeviceKind) -> bool {
        self.kind() == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        assert_eq!(DeviceKind::Valve.tag(), "V");
        assert_eq!(DeviceKind::Counter.tag(), "FQT");
        assert_eq!(DeviceKind::Regulator.tag(), "C");
        assert_eq!(DeviceKind::SignalColumn.tag(), "HLA");
    }

    #[test]
    fn sub_values_are_scoped_per_kind() {
        // Same wire value, different meaning per owning kind.
        let valve = SubKind::Valve(ValveSub::Do1);
        let counter = SubKind::Counter(CounterSub::Basic);
        assert_eq!(valve.value(), 1);
        assert_eq!(counter.value(), 1);
        assert_ne!(valve.kind(), counter.kind());
    }

    #[test]
    fn reserved_gaps_keep_wire_values() {
        assert_eq!(SubKind::Counter(CounterSub::Virtual).value(), 4);
        assert_eq!(SubKind::Breaker(BreakerSub::Virtual).value(), 4);
        assert_eq!(SubKind::Valve(ValveSub::Mixproof).value(), 7);
    }

    #[test]
    fn ownership_check() {
        let sub = SubKind::LevelSwitch(LevelSwitchSub::Min);
        assert!(sub.belongs_to(DeviceKind::LevelSwitch));
        assert!(!sub.belongs_to(DeviceKind::Valve));
        assert!(!SubKind::None.belongs_to(DeviceKind::Valve));
    }

    #[test]
    fn state_field_suppressed_only_for_analog_out() {
        assert!(!DeviceKind::AnalogOut.reports_state());
        assert!(DeviceKind::AnalogIn.reports_state());
        assert!(DeviceKind::Valve.reports_state());
    }

    #[test]
    fn value_field_policy() {
        let none = SubKind::None;
        assert!(!DeviceKind::Valve.reports_value(none));
        assert!(!DeviceKind::DiscreteIn.reports_value(none));
        assert!(DeviceKind::Temperature.reports_value(none));
        assert!(DeviceKind::AnalogOut.reports_value(none));

        // Min/max level switches render like discrete inputs.
        let min = SubKind::LevelSwitch(LevelSwitchSub::Min);
        let iolink = SubKind::LevelSwitch(LevelSwitchSub::IoLinkMin);
        assert!(!DeviceKind::LevelSwitch.reports_value(min));
        assert!(DeviceKind::LevelSwitch.reports_value(iolink));
    }
}
