use crate::constants::{CREATE, NOTIFY, REPORT};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// A set of capabilities that senders may depend on.
    ///
    /// The composition root tracks which capabilities are *required* and which
    /// have a concrete implementation *bound*; assembly only completes once the
    /// former is a subset of the latter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CapabilitySet: u32 {
        const NOTIFY = 1 << 0;
        const CREATE = 1 << 1;
        const REPORT = 1 << 2;

        const ALL = Self::NOTIFY.bits() | Self::CREATE.bits() | Self::REPORT.bits();
    }
}

impl CapabilitySet {
    /// Names of the individual capabilities contained in this set, in flag order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(3);
        if self.contains(Self::NOTIFY) {
            names.push(NOTIFY);
        }
        if self.contains(Self::CREATE) {
            names.push(CREATE);
        }
        if self.contains(Self::REPORT) {
            names.push(REPORT);
        }
        names
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.names().join("|"))
    }
}

impl From<&str> for CapabilitySet {
    fn from(s: &str) -> Self {
        match s {
            NOTIFY => Self::NOTIFY,
            CREATE => Self::CREATE,
            REPORT => Self::REPORT,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CapabilitySet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
