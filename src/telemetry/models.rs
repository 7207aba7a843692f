use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO: f64 = -273.15;
/// Stored in place of a reading when no sensor could be read. Colder than absolute zero.
pub const TEMPERATURE_UNAVAILABLE: f64 = -273.16;
pub const DEFAULT_TEMPERATURE_LIMIT: f64 = 60.0;
pub const MEMORY_USAGE_LIMIT: f64 = 0.75;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    C,
    F,
    K,
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(TemperatureUnit::C),
            "F" => Ok(TemperatureUnit::F),
            "K" => Ok(TemperatureUnit::K),
            other => Err(format!("Unknown temperature unit {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
}

impl TemperatureReading {
    pub fn unavailable() -> Self {
        Self {
            celsius: TEMPERATURE_UNAVAILABLE,
        }
    }

    pub fn available(&self) -> bool {
        self.celsius >= ABSOLUTE_ZERO
    }

    pub fn kelvin(&self) -> f64 {
        self.celsius + 273.15
    }

    pub fn fahrenheit(&self) -> f64 {
        self.celsius * 9.0 / 5.0 + 32.0
    }

    pub fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::C => self.celsius,
            TemperatureUnit::F => self.fahrenheit(),
            TemperatureUnit::K => self.kelvin(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MemoryUsage {
    /// Used over total memory, `-1` when unavailable.
    pub ratio: f64,
    pub available: bool,
}

impl MemoryUsage {
    pub fn unavailable() -> Self {
        Self {
            ratio: -1.0,
            available: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Active,
    Offline,
    DnsServiceDown,
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaemonStatus {
    pub running: bool,
    pub service_state: ServiceState,
}

/// Per-request overrides of the persisted temperature settings.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct TemperatureQuery {
    pub tempunit: Option<String>,
    pub temperature_limit: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostStatus {
    pub hostname: Option<String>,
    pub temperature_celsius: f64,
    pub temperature_unit: TemperatureUnit,
    pub temperature_limit_celsius: f64,
    pub load_averages: [f64; 3],
    pub cpu_core_count: u32,
    pub memory_usage_ratio: f64,
    pub daemon_running: bool,
    pub service_state: ServiceState,
}

impl HostStatus {
    pub fn temperature(&self) -> TemperatureReading {
        TemperatureReading {
            celsius: self.temperature_celsius,
        }
    }

    pub fn temperature_hot(&self) -> bool {
        self.temperature().available() && self.temperature_celsius > self.temperature_limit_celsius
    }

    pub fn load_hot(&self) -> bool {
        self.load_averages[0] > f64::from(self.cpu_core_count)
    }

    pub fn memory_hot(&self) -> bool {
        self.memory_usage_ratio > MEMORY_USAGE_LIMIT || self.memory_usage_ratio < 0.0
    }

    pub fn flags(&self) -> StatusFlags {
        let temperature = self.temperature();
        StatusFlags {
            temperature: (self.daemon_running && temperature.available())
                .then(|| temperature.in_unit(self.temperature_unit)),
            temperature_hot: self.temperature_hot(),
            load_hot: self.load_hot(),
            memory_hot: self.memory_hot(),
        }
    }
}

/// Threshold coloring consumed by the page renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusFlags {
    /// Reading in the resolved unit, absent when no sensor is available or the daemon is offline.
    pub temperature: Option<f64>,
    pub temperature_hot: bool,
    pub load_hot: bool,
    pub memory_hot: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: HostStatus,
    pub flags: StatusFlags,
}

impl From<HostStatus> for StatusResponse {
    fn from(status: HostStatus) -> Self {
        let flags = status.flags();
        StatusResponse { status, flags }
    }
}
