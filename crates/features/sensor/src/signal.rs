use courier_kernel::contracts::FactoryError;
use courier_kernel::factory::{FactoryTable, RawInputExt};
use std::fmt::Debug;
use std::sync::Arc;

pub const READING: &str = "reading";
pub const FAULT: &str = "fault";
pub const HEARTBEAT: &str = "heartbeat";

/// Every discriminator the sensor factory must understand.
pub const KINDS: &[&str] = &[READING, FAULT, HEARTBEAT];

/// Capability of anything a sensor can report. Recipients depend on this, never
/// on the concrete signal types.
pub trait SensorSignal: Debug + Send + Sync {
    fn sensor(&self) -> &str;

    fn label(&self) -> &'static str;

    /// Temperature carried by the signal.
    fn celsius(&self) -> Option<f64> {
        None
    }

    /// Fault code, for signals reporting a malfunction.
    fn fault(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug)]
struct Reading {
    sensor: String,
    celsius: f64,
}

impl SensorSignal for Reading {
    fn sensor(&self) -> &str {
        &self.sensor
    }

    fn label(&self) -> &'static str {
        READING
    }

    fn celsius(&self) -> Option<f64> {
        Some(self.celsius)
    }
}

#[derive(Debug)]
struct Fault {
    sensor: String,
    code: String,
}

impl SensorSignal for Fault {
    fn sensor(&self) -> &str {
        &self.sensor
    }

    fn label(&self) -> &'static str {
        FAULT
    }

    fn fault(&self) -> Option<&str> {
        Some(&self.code)
    }
}

#[derive(Debug)]
struct Heartbeat {
    sensor: String,
}

impl SensorSignal for Heartbeat {
    fn sensor(&self) -> &str {
        &self.sensor
    }

    fn label(&self) -> &'static str {
        HEARTBEAT
    }
}

/// What the sensor sender broadcasts: one signal shared by every recipient.
#[derive(Debug, Clone)]
pub struct SensorUpdate {
    pub signal: Arc<dyn SensorSignal>,
}

/// Factory turning raw `kind`-tagged input into signals.
///
/// # Errors
/// Never fails today; the `Result` guards against duplicate kinds being added.
pub fn factory() -> Result<FactoryTable<dyn SensorSignal>, FactoryError> {
    FactoryTable::<dyn SensorSignal>::builder("sensor-signals")
        .kind(READING, |input| {
            let celsius: f64 = input.parsed("celsius")?;
            if !celsius.is_finite() {
                return Err(FactoryError::invalid_field("celsius", "must be a finite number"));
            }
            Ok(Box::new(Reading { sensor: input.required("sensor")?.to_owned(), celsius }))
        })
        .kind(FAULT, |input| {
            Ok(Box::new(Fault {
                sensor: input.required("sensor")?.to_owned(),
                code: input.field("code").unwrap_or("unknown").to_owned(),
            }))
        })
        .kind(HEARTBEAT, |input| {
            Ok(Box::new(Heartbeat { sensor: input.required("sensor")?.to_owned() }))
        })
        .build()
}
