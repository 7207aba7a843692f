use std::{fs::read_to_string, path::Path};

use log::warn;

use crate::telemetry::{models::TemperatureUnit, reader::parse_temperature_limit};

pub mod models;

use models::{DashboardConfig, LayoutQuery};

/// Reads the setup variables file. A missing file gives the default config.
pub fn load_config(path: &Path) -> DashboardConfig {
    match read_to_string(path) {
        Ok(file) => parse_setup_vars(&file),
        Err(e) => {
            warn!("Could not read setup variables {}: {}", path.display(), e);
            DashboardConfig::default()
        }
    }
}

pub fn parse_setup_vars(file: &str) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    for line in file.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "TEMPERATUREUNIT" => {
                config.temperature_unit = value
                    .parse::<TemperatureUnit>()
                    .inspect_err(|e| warn!("Ignoring TEMPERATUREUNIT: {}", e))
                    .ok();
            }
            "TEMPERATURE_LIMIT" => {
                config.temperature_limit = parse_temperature_limit(value)
                    .inspect_err(|e| warn!("Ignoring TEMPERATURE_LIMIT: {}", e))
                    .ok();
            }
            "WEBUIBOXEDLAYOUT" => {
                config.boxed_layout = Some(value == "boxed");
            }
            _ => {}
        }
    }

    config
}

/// Content of the custom disable timer file, `None` when there is none.
pub fn read_disable_timer(path: &Path) -> Option<String> {
    read_to_string(path)
        .inspect_err(|e| log::debug!("No disable timer at {}: {}", path.display(), e))
        .ok()
        .map(|timer| timer.trim().to_string())
        .filter(|timer| !timer.is_empty())
}

/// A layout change from the settings page takes effect for the current render,
/// before it is persisted.
pub fn resolve_boxed_layout(config: &DashboardConfig, query: &LayoutQuery) -> bool {
    if query.field.as_deref() == Some("webUI") {
        return query.boxedlayout.is_some();
    }

    config.boxed_layout.unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parses_known_keys() {
        let config = parse_setup_vars(
            "PIHOLE_INTERFACE=eth0\nTEMPERATUREUNIT=F\nTEMPERATURE_LIMIT=70\nWEBUIBOXEDLAYOUT=traditional\n",
        );
        assert_eq!(
            config,
            DashboardConfig {
                temperature_unit: Some(TemperatureUnit::F),
                temperature_limit: Some(70.0),
                boxed_layout: Some(false),
            }
        );
    }

    #[test]
    fn invalid_values_are_unset() {
        let config = parse_setup_vars("TEMPERATUREUNIT=R\nTEMPERATURE_LIMIT=warm\n\nnot a pair\n");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn limit_keeps_whole_degrees_and_unit_is_case_sensitive() {
        let config = parse_setup_vars("TEMPERATURE_LIMIT=70.5\nTEMPERATUREUNIT=f\n");
        assert_eq!(config.temperature_limit, Some(70.0));
        assert_eq!(config.temperature_unit, None);
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(
            load_config(Path::new("/nonexistent/setupVars.conf")),
            DashboardConfig::default()
        );
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "TEMPERATUREUNIT=K\nWEBUIBOXEDLAYOUT=boxed\n").unwrap();
        let config = load_config(file.path());
        assert_eq!(config.temperature_unit, Some(TemperatureUnit::K));
        assert_eq!(config.boxed_layout, Some(true));
    }

    #[test]
    fn disable_timer() {
        assert_eq!(read_disable_timer(Path::new("/nonexistent/custom_disable_timer")), None);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "120\n").unwrap();
        assert_eq!(read_disable_timer(file.path()).as_deref(), Some("120"));

        let empty = NamedTempFile::new().unwrap();
        assert_eq!(read_disable_timer(empty.path()), None);
    }

    #[test]
    fn boxed_layout_resolution() {
        let traditional = DashboardConfig {
            boxed_layout: Some(false),
            ..Default::default()
        };
        assert!(resolve_boxed_layout(
            &DashboardConfig::default(),
            &LayoutQuery::default()
        ));
        assert!(!resolve_boxed_layout(&traditional, &LayoutQuery::default()));

        let enable = LayoutQuery {
            field: Some("webUI".to_string()),
            boxedlayout: Some("on".to_string()),
        };
        assert!(resolve_boxed_layout(&traditional, &enable));

        let disable = LayoutQuery {
            field: Some("webUI".to_string()),
            boxedlayout: None,
        };
        assert!(!resolve_boxed_layout(&DashboardConfig::default(), &disable));

        let other_field = LayoutQuery {
            field: Some("dns".to_string()),
            boxedlayout: None,
        };
        assert!(!resolve_boxed_layout(&traditional, &other_field));
    }
}
