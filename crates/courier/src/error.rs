use courier_alarm::AlarmError;
use courier_kernel::AssemblyError;
use courier_sensor::SensorError;
use std::borrow::Cow;

#[courier_derive::courier_error]
pub enum PlatformError {
    #[error("Composition failed{}: {source}", format_context(.context))]
    Assembly { source: AssemblyError, context: Option<Cow<'static, str>> },

    #[error("Alarm feature failed{}: {source}", format_context(.context))]
    Alarm { source: AlarmError, context: Option<Cow<'static, str>> },

    #[error("Sensor feature failed{}: {source}", format_context(.context))]
    Sensor { source: SensorError, context: Option<Cow<'static, str>> },
}
