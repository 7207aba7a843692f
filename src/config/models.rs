use serde::{Deserialize, Serialize};

use crate::telemetry::models::TemperatureUnit;

/// Dashboard settings persisted in the setup variables file.
/// Every field is optional, defaults are applied when resolving.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct DashboardConfig {
    /// `TEMPERATUREUNIT`, Celsius when unset.
    pub temperature_unit: Option<TemperatureUnit>,
    /// `TEMPERATURE_LIMIT` in degrees Celsius, 60 when unset.
    pub temperature_limit: Option<f64>,
    /// `WEBUIBOXEDLAYOUT`, boxed when unset.
    pub boxed_layout: Option<bool>,
}

/// Layout change submitted from the settings page.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct LayoutQuery {
    pub field: Option<String>,
    pub boxedlayout: Option<String>,
}
