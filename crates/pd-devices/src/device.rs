//! Base device: identity, the manual-mode gate, command dispatch and the
//! script snapshot.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use pd_core::taxonomy::{DeviceKind, SubKind};
use pd_core::wire::write_wire_float;
use pd_params::{ErrorParams, ErrorParamsRef, ParamBlock, ParamError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::caps::{AnalogInput, AnalogOutput, CombinedOutput, DiscreteInput, DiscreteOutput};
use crate::emulator::NoiseEmulator;

/// Maximum device name length in bytes, terminator included (the registry
/// packs names into fixed wire structs).
pub const MAX_NAME_LEN: usize = 20;

/// Maximum description length in bytes, terminator included.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Errors surfaced by command dispatch.
///
/// The transport layer folds these into the legacy integer protocol via
/// [`legacy_code`]; the detail only reaches the debug log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CmdError {
    #[error("Unknown property: {prop:?}")]
    UnknownProperty { prop: String },

    #[error(transparent)]
    Param(#[from] ParamError),
}

/// Legacy protocol code for a dispatch result: 0 success, 1 failure.
pub fn legacy_code(res: &Result<(), CmdError>) -> i32 {
    match res {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Identity and control state shared by every device.
///
/// Concrete device types compose one of these and expose it through
/// [`Device::core`]. Kind, sub-kind and parameter count are fixed for the
/// lifetime of the device; the registry assigns the serial number after
/// construction.
#[derive(Debug)]
pub struct DeviceCore {
    name: String,
    description: String,
    article: String,
    kind: DeviceKind,
    sub_kind: SubKind,
    serial: u32,
    manual_mode: bool,
    params: ParamBlock,
    emulation: bool,
    emulator: NoiseEmulator,
    err_params: ErrorParamsRef,
}

impl DeviceCore {
    pub fn new(name: &str, kind: DeviceKind, sub_kind: SubKind, par_cnt: usize) -> Self {
        let name = if name.is_empty() {
            "?".to_owned()
        } else {
            name.chars().take(MAX_NAME_LEN - 1).collect()
        };

        let sub_kind = if sub_kind == SubKind::None || sub_kind.belongs_to(kind) {
            sub_kind
        } else {
            warn!(
                device = name.as_str(),
                kind = kind.tag(),
                sub = sub_kind.value(),
                "sub-kind does not belong to kind, dropping it"
            );
            SubKind::None
        };

        Self {
            name,
            description: String::new(),
            article: " ".to_owned(),
            kind,
            sub_kind,
            serial: 0,
            manual_mode: false,
            params: ParamBlock::new(par_cnt),
            emulation: false,
            emulator: NoiseEmulator::default(),
            err_params: ErrorParamsRef::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn sub_kind(&self) -> SubKind {
        self.sub_kind
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Assigned by the registry once the device is registered.
    pub fn set_serial(&mut self, serial: u32) {
        self.serial = serial;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn set_article(&mut self, article: &str) {
        self.article = article.to_owned();
    }

    pub fn manual_mode(&self) -> bool {
        self.manual_mode
    }

    pub fn set_manual_mode(&mut self, manual: bool) {
        self.manual_mode = manual;
    }

    pub fn params(&self) -> &ParamBlock {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParamBlock {
        &mut self.params
    }

    pub fn emulation(&self) -> bool {
        self.emulation
    }

    pub fn set_emulation(&mut self, emulation: bool) {
        self.emulation = emulation;
    }

    /// Reconfigure the noise emulator (mean, standard deviation).
    pub fn configure_emulator(&mut self, mean: f32, stddev: f32) {
        self.emulator.configure(mean, stddev);
    }

    pub fn emulator(&self) -> &NoiseEmulator {
        &self.emulator
    }

    pub fn emulator_mut(&mut self) -> &mut NoiseEmulator {
        &mut self.emulator
    }

    /// Attach the externally owned error/alarm parameter block.
    pub fn bind_err_params(&mut self, owner: &Rc<RefCell<ErrorParams>>) {
        self.err_params.bind(owner);
    }

    pub fn err_params(&self) -> &ErrorParamsRef {
        &self.err_params
    }
}

/// The base device contract.
///
/// Everything here has a default implementation over [`Device::core`]; a
/// concrete device supplies the core plus its channel operations (via the
/// capability traits) and overrides the hooks it cares about.
pub trait Device: CombinedOutput {
    fn core(&self) -> &DeviceCore;

    fn core_mut(&mut self) -> &mut DeviceCore;

    fn name(&self) -> &str {
        self.core().name()
    }

    /// Recompute state from fieldbus inputs; called once per scan cycle.
    fn evaluate_io(&mut self) {}

    /// Runtime (non-persisted) parameter hook.
    fn set_rt_par(&mut self, _idx: usize, _value: f32) {}

    /// Label used when reporting device errors upstream.
    fn error_description(&self) -> &'static str {
        "feedback"
    }

    /// Execute a numeric server command.
    ///
    /// Dispatch is keyed on the first byte of the property name:
    /// `S` sets the discrete state, `V` the analog value, `M` the manual
    /// flag; `P` routes to the parameter block using the *entire* property
    /// string as the parameter name. `S`/`V` go through the direct
    /// operations: a server command is an explicit override, not a
    /// control-program action.
    fn set_cmd(&mut self, prop: &str, idx: u32, val: f64) -> Result<(), CmdError> {
        debug!(
            device = self.core().name(),
            prop, idx, val, "device command"
        );
        match prop.as_bytes().first().copied() {
            Some(b'S') => {
                DiscreteOutput::direct_set_state(self, val as i32);
                Ok(())
            }
            Some(b'V') => {
                AnalogOutput::direct_set_value(self, val as f32);
                Ok(())
            }
            Some(b'M') => {
                self.core_mut().set_manual_mode(val != 0.0);
                Ok(())
            }
            Some(b'P') => self
                .core_mut()
                .params_mut()
                .set_by_name(prop, val)
                .map_err(CmdError::from),
            _ => {
                warn!(
                    device = self.core().name(),
                    prop, val, "unknown command property"
                );
                Err(CmdError::UnknownProperty {
                    prop: prop.to_owned(),
                })
            }
        }
    }

    /// Execute a string-typed server command.
    ///
    /// The base layer has no string properties; concrete devices override
    /// this for things like binding an actuator reference by name.
    fn set_string_cmd(&mut self, prop: &str, idx: u32, val: &str) -> Result<(), CmdError> {
        debug!(
            device = self.core().name(),
            prop, idx, val, "string command ignored"
        );
        Ok(())
    }

    /// Extra device-specific snapshot fields; each must end with `", "`.
    fn render_ex(&self, _out: &mut String) {}

    /// Append this device's snapshot record.
    ///
    /// Shape: `<prefix><name>={M=<0|1>, [ST=<state>, ] [V=<value>, ]`
    /// `<ex fields>, <named parameters>}` plus a newline, with the trailing
    /// `", "` trimmed before the closing brace. Field suppression follows
    /// the taxonomy render policy; the float format is the wire contract.
    fn render(&self, prefix: &str, out: &mut String) {
        let core = self.core();
        let _ = write!(
            out,
            "{}{}={{M={}, ",
            prefix,
            core.name(),
            core.manual_mode() as i32
        );

        if core.kind().reports_state() {
            let _ = write!(out, "ST={}, ", DiscreteInput::state(self));
        }

        if core.kind().reports_value(core.sub_kind()) {
            out.push_str("V=");
            write_wire_float(out, AnalogInput::value(self));
            out.push_str(", ");
        }

        self.render_ex(out);
        core.params().render(out);

        if out.ends_with(", ") {
            out.truncate(out.len() - 2);
        }
        out.push_str("}\n");
    }
}
