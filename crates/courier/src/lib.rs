//! Facade for the courier toolkit and its bundled features.
//! Re-exports the kernel and domain, and owns the composition root: [`init`] is the
//! one place where senders meet their recipients.
//! Keep this crate thin: it composes feature crates, it does not implement them.
//!
//! ## Usage
//! - Load a [`CourierConfig`](domain::config::CourierConfig) (see [`kernel::config::load_config`]).
//! - Call [`init`] exactly once at startup and keep the returned [`Platform`].

mod error;

pub use crate::error::{PlatformError, PlatformErrorExt};
pub use courier_kernel as kernel;
pub use courier_kernel::domain;

use courier_alarm::Alarm;
use courier_kernel::contracts::{Reporter, TracingReporter};
use courier_kernel::domain::capability::CapabilitySet;
use courier_kernel::domain::config::CourierConfig;
use courier_kernel::{Assembler, AssemblyGate, AssemblyGraph, AssemblyState};
use courier_sensor::TemperatureSensor;
use std::sync::Arc;

/// Feature registry for runtime introspection.
pub mod features {
    pub use courier_alarm as alarm;
    pub use courier_sensor as sensor;

    /// Features wired by [`init`](crate::init), in wiring order.
    pub const ENABLED: &[&str] = &["alarm", "sensor"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Everything the composition root wired, ready to use.
#[derive(Debug, Clone)]
pub struct Platform {
    config: CourierConfig,
    gate: AssemblyGate,
    graph: AssemblyGraph,
    alarm: Alarm,
    sensor: TemperatureSensor,
}

impl Platform {
    #[must_use]
    pub const fn config(&self) -> &CourierConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> AssemblyState {
        self.gate.state()
    }

    #[must_use]
    pub const fn graph(&self) -> &AssemblyGraph {
        &self.graph
    }

    #[must_use]
    pub const fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    #[must_use]
    pub const fn sensor(&self) -> &TemperatureSensor {
        &self.sensor
    }
}

/// Wires every feature, reporting recipient failures through `tracing`.
///
/// # Errors
/// Returns a [`PlatformError`] if any feature fails to wire or a required
/// capability is left unbound.
pub fn init(config: &CourierConfig) -> Result<Platform, PlatformError> {
    init_with_reporter(config, Arc::new(TracingReporter))
}

/// As [`init`], with an explicit failure sink.
///
/// # Errors
/// See [`init`].
pub fn init_with_reporter(
    config: &CourierConfig,
    reporter: Arc<dyn Reporter>,
) -> Result<Platform, PlatformError> {
    let assembler = Assembler::new(config.clone());
    let mut assembly = assembler.begin()?;
    assembly.require(CapabilitySet::ALL).bind_reporter(reporter);

    // Alarm first: the sensor raises it.
    let alarm = courier_alarm::init(&mut assembly, &config.alarm)?;
    let sensor = courier_sensor::init(&mut assembly, &config.sensor, &alarm)?;

    let graph = assembly.finish()?;
    tracing::info!(features = ?features::ENABLED, bindings = graph.bindings().len(), "Platform ready");

    Ok(Platform { config: config.clone(), gate: assembler.gate(), graph, alarm, sensor })
}
