use std::{
    env::var,
    path::{Path, PathBuf},
};

use log::{error, warn};

fn env_var(id: &str) -> Option<String> {
    var(id)
        .inspect_err(|e| {
            warn!("Could not read env var {}: {}", id, e);
        })
        .ok()
}

fn env_path(id: &str, default: &str) -> PathBuf {
    env_var(id)
        .map(|d| Path::new(&d).to_path_buf())
        .unwrap_or(Path::new(default).to_path_buf())
}

pub fn hostname() -> String {
    env_var("HOSTNAME").unwrap_or("0.0.0.0".to_string())
}

pub fn port() -> String {
    env_var("PORT").unwrap_or("34392".to_string())
}

pub fn setupvars() -> PathBuf {
    env_path("SETUPVARS", "/etc/pihole/setupVars.conf")
}

pub fn thermalzone() -> PathBuf {
    env_path("THERMALZONE", "/sys/class/thermal/thermal_zone0/temp")
}

pub fn hwmon() -> PathBuf {
    env_path("HWMON", "/sys/class/hwmon/hwmon0/temp1_input")
}

pub fn meminfo() -> PathBuf {
    env_path("MEMINFO", "/proc/meminfo")
}

pub fn cpuinfo() -> PathBuf {
    env_path("CPUINFO", "/proc/cpuinfo")
}

/// Custom duration offered by the disable menu.
pub fn disabletimer() -> PathBuf {
    env_path("DISABLETIMER", "/var/www/html/custom_disable_timer")
}

pub fn daemon() -> String {
    env_var("DAEMON").unwrap_or("pihole-FTL".to_string())
}

pub fn pihole() -> String {
    env_var("PIHOLE").unwrap_or("pihole".to_string())
}

/// Wallet address allowed to log in. Empty means the dashboard requires no login.
pub fn adminaddress() -> String {
    env_var("ADMINADDRESS")
        .map(|a| a.trim_start_matches("0x").to_lowercase())
        .unwrap_or("".to_string())
}

pub fn sessionlifetime() -> i64 {
    env_var("SESSIONLIFETIME")
        .and_then(|s| {
            str::parse::<i64>(&s)
                .inspect_err(|e| {
                    error!("Could not parse SESSIONLIFETIME to i64: {}", e);
                })
                .ok()
        })
        .unwrap_or(1440)
}
