use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Page content renders. For visitors that are not logged in this is the reduced index page.
    Full,
    /// Only the login form renders.
    LoginOnly,
}
