use crate::signal::SensorUpdate;
use courier_alarm::{Alarm, Severity};
use courier_kernel::contracts::{Recipient, RecipientError, async_trait};
use parking_lot::Mutex;
use std::borrow::Cow;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ThermostatState {
    pub last_celsius: Option<f64>,
    pub heating: bool,
}

/// Switches heating on below the target temperature.
#[derive(Debug)]
pub struct Thermostat {
    target: f64,
    state: Mutex<ThermostatState>,
}

impl Thermostat {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target, state: Mutex::new(ThermostatState::default()) }
    }

    #[must_use]
    pub fn state(&self) -> ThermostatState {
        *self.state.lock()
    }
}

#[async_trait]
impl Recipient<SensorUpdate> for Thermostat {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("thermostat")
    }

    async fn notify(&self, update: &SensorUpdate) -> Result<(), RecipientError> {
        let Some(celsius) = update.signal.celsius() else {
            return Ok(());
        };
        let mut state = self.state.lock();
        state.last_celsius = Some(celsius);
        state.heating = celsius < self.target;
        debug!(celsius, heating = state.heating, "Thermostat updated");
        Ok(())
    }
}

/// Shows every signal as a line of text.
#[derive(Debug, Default)]
pub struct Display {
    lines: Mutex<Vec<String>>,
}

impl Display {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[async_trait]
impl Recipient<SensorUpdate> for Display {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("display")
    }

    async fn notify(&self, update: &SensorUpdate) -> Result<(), RecipientError> {
        let signal = &update.signal;
        let line = match (signal.celsius(), signal.fault()) {
            (Some(celsius), _) => format!("{}: {celsius:.1}°C", signal.sensor()),
            (None, Some(code)) => format!("{}: fault {code}", signal.sensor()),
            (None, None) => format!("{}: {}", signal.sensor(), signal.label()),
        };
        self.lines.lock().push(line);
        Ok(())
    }
}

/// Raises the alarm for overheating readings and sensor faults.
#[derive(Debug)]
pub struct AlarmBridge {
    alarm: Alarm,
    threshold: f64,
}

impl AlarmBridge {
    #[must_use]
    pub const fn new(alarm: Alarm, threshold: f64) -> Self {
        Self { alarm, threshold }
    }
}

#[async_trait]
impl Recipient<SensorUpdate> for AlarmBridge {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("alarm-bridge")
    }

    async fn notify(&self, update: &SensorUpdate) -> Result<(), RecipientError> {
        let signal = &update.signal;
        let severity = match (signal.celsius(), signal.fault()) {
            (Some(celsius), _) if celsius > self.threshold => Severity::Critical,
            (None, Some(_)) => Severity::Warning,
            _ => return Ok(()),
        };

        self.alarm
            .trigger(signal.sensor().to_owned(), severity)
            .await
            .map(|_| ())
            .map_err(|err| RecipientError::Unavailable {
                message: err.to_string().into(),
                context: Some("alarm".into()),
            })
    }
}
