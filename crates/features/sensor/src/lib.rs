//! Temperature sensor feature.
//!
//! Raw `kind`-tagged input goes through a factory that yields a [`SensorSignal`]
//! without the sensor knowing the concrete type; the signal is then broadcast to
//! the thermostat, the display and the alarm bridge.

mod error;
mod recipients;
mod signal;

pub use crate::error::{SensorError, SensorErrorExt};
pub use crate::recipients::{AlarmBridge, Display, Thermostat, ThermostatState};
pub use crate::signal::{FAULT, HEARTBEAT, KINDS, READING, SensorSignal, SensorUpdate, factory};

use courier_alarm::Alarm;
use courier_kernel::contracts::Factory;
use courier_kernel::dispatch::DispatchReport;
use courier_kernel::domain::config::SensorConfig;
use courier_kernel::domain::input::RawInput;
use courier_kernel::factory::FactoryTable;
use courier_kernel::{Assembly, Sender};
use std::sync::Arc;

pub const SENDER: &str = "sensor";

/// Handle to the wired sensor.
#[derive(Debug, Clone)]
pub struct TemperatureSensor {
    sender: Sender<SensorUpdate>,
    factory: Arc<FactoryTable<dyn SensorSignal>>,
    thermostat: Arc<Thermostat>,
    display: Arc<Display>,
}

impl TemperatureSensor {
    /// Builds a signal from raw input and broadcasts it.
    ///
    /// # Errors
    /// * [`SensorError::Input`] for unknown kinds or malformed fields; nothing is sent.
    /// * [`SensorError::Send`] when delivery fails.
    pub async fn ingest(&self, raw: &RawInput) -> Result<DispatchReport, SensorError> {
        let signal: Arc<dyn SensorSignal> = self.factory.create_from(raw)?.into();
        tracing::trace!(sensor = signal.sensor(), kind = signal.label(), "Signal ingested");
        Ok(self.sender.send(SensorUpdate { signal }).await?)
    }

    #[must_use]
    pub const fn sender(&self) -> &Sender<SensorUpdate> {
        &self.sender
    }

    #[must_use]
    pub fn factory(&self) -> &FactoryTable<dyn SensorSignal> {
        &self.factory
    }

    #[must_use]
    pub fn thermostat(&self) -> &Thermostat {
        &self.thermostat
    }

    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }
}

/// Wires the sensor sender, its factory and recipients into `assembly`.
///
/// # Errors
/// [`SensorError::Input`] if the factory cannot be built, [`SensorError::Assembly`]
/// if it does not cover every signal kind.
pub fn init(
    assembly: &mut Assembly,
    config: &SensorConfig,
    alarm: &Alarm,
) -> Result<TemperatureSensor, SensorError> {
    let factory = Arc::new(factory()?);
    assembly.bind_factory(SENDER, factory.as_ref(), KINDS)?;

    let sender = assembly.sender::<SensorUpdate>(SENDER);
    let thermostat = Arc::new(Thermostat::new(config.target_celsius));
    let display = Arc::new(Display::default());
    assembly.bind_recipient(&sender, thermostat.clone());
    assembly.bind_recipient(&sender, display.clone());
    assembly.bind_recipient(
        &sender,
        Arc::new(AlarmBridge::new(alarm.clone(), config.alarm_threshold_celsius)),
    );

    tracing::info!(
        target_celsius = config.target_celsius,
        threshold = config.alarm_threshold_celsius,
        "Sensor feature initialized"
    );
    Ok(TemperatureSensor { sender, factory, thermostat, display })
}
