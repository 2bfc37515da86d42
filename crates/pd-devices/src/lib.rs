//! Device base layer: capability contracts, the manual-mode gate, command
//! dispatch and the script snapshot format.
//!
//! Every physical or virtual I/O point is a [`Device`]: an identity
//! ([`DeviceCore`]) plus the channel operations declared through the
//! capability traits in [`caps`]. The supervisory server talks to devices
//! through [`Device::set_cmd`] and reads them back through
//! [`Device::render`]; the automatic control program talks through the
//! mediated capability calls, which the manual-mode gate can suppress.
//!
//! [`DiscreteIoDevice`] and [`AnalogIoDevice`] are the two generic concrete
//! devices; richer device types compose the same pieces and add their own
//! control algorithms on top.

pub mod analog;
pub mod caps;
pub mod device;
pub mod discrete;
pub mod emulator;

pub use analog::AnalogIoDevice;
pub use caps::{
    AnalogInput, AnalogOutput, CombinedOutput, Counter, CounterState, DiscreteInput,
    DiscreteOutput, ManualGate, Mixproof, Scale,
};
pub use device::{CmdError, Device, DeviceCore, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, legacy_code};
pub use discrete::DiscreteIoDevice;
pub use emulator::NoiseEmulator;
