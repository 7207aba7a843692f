use std::collections::HashMap;

use crate::config::models::DashboardConfig;

use super::{
    models::{
        DaemonStatus, HostStatus, MemoryUsage, ServiceState, TemperatureQuery, TemperatureReading,
        TemperatureUnit, DEFAULT_TEMPERATURE_LIMIT,
    },
    source::SystemSource,
};

/// Turns raw source output into a `HostStatus`. None of the reads fail: a source
/// that is missing or malformed degrades to its sentinel value.
pub struct TelemetryReader {
    source: Box<dyn SystemSource + Send + Sync>,
}

impl TelemetryReader {
    pub fn new(source: impl SystemSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn read_temperature(&self) -> TemperatureReading {
        match self.source.temperature_sensor() {
            Some(raw) => parse_temperature(&raw),
            None => TemperatureReading::unavailable(),
        }
    }

    pub fn read_load_averages(&self) -> [f64; 3] {
        self.source.load_average().map(round2)
    }

    pub fn read_core_count(&self) -> u32 {
        if let Some(count) = self
            .source
            .processor_count()
            .and_then(|output| output.trim().parse::<u32>().ok())
        {
            return count;
        }

        log::debug!("Processor count query was not numeric, counting cpuinfo entries");
        self.source
            .cpu_info()
            .map(|cpuinfo| count_processors(&cpuinfo))
            .unwrap_or(0)
    }

    pub fn read_memory_usage(&self) -> MemoryUsage {
        match self.source.mem_info() {
            Some(listing) => memory_usage(&parse_meminfo(&listing)),
            None => MemoryUsage::unavailable(),
        }
    }

    pub fn read_daemon_status(&self) -> DaemonStatus {
        DaemonStatus {
            running: self.source.daemon_pid() != 0,
            service_state: parse_service_state(self.source.service_status().as_deref()),
        }
    }

    pub fn host_status(&self, config: &DashboardConfig, query: &TemperatureQuery) -> HostStatus {
        let temperature = self.read_temperature();
        let memory = self.read_memory_usage();
        let daemon = self.read_daemon_status();
        let temperature_limit_celsius = query
            .temperature_limit
            .as_deref()
            .and_then(|limit| {
                parse_temperature_limit(limit)
                    .inspect_err(|e| log::warn!("Ignoring temperature limit override: {}", e))
                    .ok()
            })
            .unwrap_or_else(|| resolve_temperature_limit(config));

        HostStatus {
            hostname: self.source.hostname(),
            temperature_celsius: temperature.celsius,
            temperature_unit: resolve_temperature_unit(config, query.tempunit.as_deref()),
            temperature_limit_celsius,
            load_averages: self.read_load_averages(),
            cpu_core_count: self.read_core_count(),
            memory_usage_ratio: memory.ratio,
            daemon_running: daemon.running,
            service_state: daemon.service_state,
        }
    }
}

/// Request override, then persisted setting, then Celsius.
/// An override that is not a known unit counts as absent.
pub fn resolve_temperature_unit(
    config: &DashboardConfig,
    request_override: Option<&str>,
) -> TemperatureUnit {
    request_override
        .and_then(|unit| {
            unit.parse::<TemperatureUnit>()
                .inspect_err(|e| log::warn!("Ignoring temperature unit override: {}", e))
                .ok()
        })
        .or(config.temperature_unit)
        .unwrap_or_default()
}

pub fn resolve_temperature_limit(config: &DashboardConfig) -> f64 {
    config
        .temperature_limit
        .unwrap_or(DEFAULT_TEMPERATURE_LIMIT)
}

/// Limits are whole degrees Celsius, fractions are dropped.
pub fn parse_temperature_limit(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(limit) if limit.is_finite() => Ok(limit.trunc()),
        Ok(limit) => Err(format!("Temperature limit {} is not finite", limit)),
        Err(e) => Err(format!("Could not parse temperature limit {:?}: {}", value, e)),
    }
}

/// Sensors report either millidegrees (`39007`) or whole degrees (`39`).
/// Anything above 1000 in magnitude is taken as millidegrees.
pub fn parse_temperature(raw: &str) -> TemperatureReading {
    let value = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc(),
        _ => {
            log::debug!("Temperature sensor value {:?} is not numeric", raw);
            return TemperatureReading::unavailable();
        }
    };

    let celsius = if value.abs() > 1000.0 {
        value / 1000.0
    } else {
        value
    };
    TemperatureReading { celsius }
}

pub fn count_processors(cpuinfo: &str) -> u32 {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("processor"))
        .count() as u32
}

/// Parses `Key:   value kB` lines. Lines that do not split into exactly one key
/// and one integer value are skipped.
pub fn parse_meminfo(listing: &str) -> HashMap<String, u64> {
    listing
        .lines()
        .filter_map(|line| {
            let split: Vec<&str> = line.trim().split(':').collect();
            if split.len() != 2 {
                return None;
            }
            let value = split[1].trim().trim_end_matches("kB").trim();
            value
                .parse::<u64>()
                .ok()
                .map(|value| (split[0].to_string(), value))
        })
        .collect()
}

pub fn memory_usage(meminfo: &HashMap<String, u64>) -> MemoryUsage {
    let field = |key: &str| meminfo.get(key).map(|value| *value as f64);
    match (
        field("MemTotal"),
        field("MemFree"),
        field("Buffers"),
        field("Cached"),
    ) {
        (Some(total), Some(free), Some(buffers), Some(cached)) if total > 0.0 => {
            let used = total - free - buffers - cached;
            MemoryUsage {
                ratio: used / total,
                available: true,
            }
        }
        _ => {
            log::debug!("Memory listing is missing required counters");
            MemoryUsage::unavailable()
        }
    }
}

pub fn parse_service_state(output: Option<&str>) -> ServiceState {
    match output.map(str::trim) {
        Some("1") => ServiceState::Active,
        Some("0") => ServiceState::Offline,
        Some("-1") => ServiceState::DnsServiceDown,
        _ => ServiceState::Unknown,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
