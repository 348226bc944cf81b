//! Top-level views.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The four top-level screens the application can display.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewState {
    /// Marketing page with navbar, sections and footer.
    #[default]
    Landing,
    /// Contact form.
    Contact,
    /// Sign-in screen.
    Login,
    /// Account creation screen.
    Signup,
}
