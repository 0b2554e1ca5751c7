use super::App;
use crate::xml::XmlDocument;
use serde::Deserialize;

/// The app currently in the foreground, from `/query/active-app`
///
/// While a screensaver runs it is reported next to the underlying app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActiveApp {
    pub app: App,
    pub screensaver: Option<App>,
}

impl XmlDocument for ActiveApp {
    const ROOT: &'static str = "active-app";
}

impl ActiveApp {
    /// True when the home screen, not a channel, is in the foreground
    pub fn is_home(&self) -> bool {
        self.app.id.is_none()
    }
}
