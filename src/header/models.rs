use serde::{Deserialize, Serialize};

use crate::{
    config::models::LayoutQuery, session::models::RenderMode,
    telemetry::models::{StatusResponse, TemperatureQuery},
};

pub const INDEX_PAGE: &str = "index";

/// Query of a page render. Fields are only ever overrides for this render.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct HeaderQuery {
    pub login: Option<String>,
    pub tempunit: Option<String>,
    pub temperature_limit: Option<String>,
    pub field: Option<String>,
    pub boxedlayout: Option<String>,
}

impl HeaderQuery {
    pub fn login_requested(&self) -> bool {
        self.login.is_some()
    }

    pub fn temperature(&self) -> TemperatureQuery {
        TemperatureQuery {
            tempunit: self.tempunit.clone(),
            temperature_limit: self.temperature_limit.clone(),
        }
    }

    pub fn layout(&self) -> LayoutQuery {
        LayoutQuery {
            field: self.field.clone(),
            boxedlayout: self.boxedlayout.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageHeader {
    pub page: String,
    pub render_mode: RenderMode,
    pub authenticated: bool,
    /// CSRF token to embed in forms, only handed to logged in users.
    pub token: Option<String>,
    /// Seconds the session stays valid, for the session timer.
    pub session_lifetime: Option<i64>,
    pub boxed_layout: bool,
    /// Custom duration offered by the disable menu.
    pub disable_timer: Option<String>,
    pub status: StatusResponse,
}
