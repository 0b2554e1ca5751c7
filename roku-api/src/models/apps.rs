use crate::xml::XmlDocument;
use serde::Deserialize;

/// An installed application, as listed by `/query/apps` and `/query/active-app`
///
/// ```xml
/// <app id="12" type="appl" version="4.2.81179021">Netflix</app>
/// ```
///
/// The home screen is reported without attributes (`<app>Roku</app>`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct App {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// `appl`, `menu`, `tvin` or `ssvr`
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    #[serde(rename = "@version")]
    pub version: Option<String>,
    #[serde(rename = "$text", default)]
    pub name: String,
}

impl App {
    /// Whether this entry is a TV input rather than a channel
    pub fn is_tv_input(&self) -> bool {
        self.kind.as_deref() == Some("tvin")
    }
}

/// The `<apps>` document: installed apps in device order
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppList {
    #[serde(rename = "app", default)]
    pub apps: Vec<App>,
}

impl XmlDocument for AppList {
    const ROOT: &'static str = "apps";
}

impl AppList {
    pub fn into_apps(self) -> Vec<App> {
        self.apps
    }
}
