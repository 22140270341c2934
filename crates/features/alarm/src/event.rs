use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Notice,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Critical => "critical",
        })
    }
}

/// What an alarm sender broadcasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmEvent {
    pub zone: Cow<'static, str>,
    pub severity: Severity,
}

impl AlarmEvent {
    pub fn new(zone: impl Into<Cow<'static, str>>, severity: Severity) -> Self {
        Self { zone: zone.into(), severity }
    }
}

impl fmt::Display for AlarmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} alarm in {}", self.severity, self.zone)
    }
}
