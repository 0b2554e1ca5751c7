//! Fixed ECP endpoint URLs for a single device

/// Standard ECP port on Roku devices
pub const DEFAULT_PORT: u16 = 8060;

/// Path prefix for keypress commands; the key code is appended
pub const KEYPRESS_PATH: &str = "keypress/";
/// Path prefix for launch commands; the app id is appended
pub const LAUNCH_PATH: &str = "launch/";
pub const DEVICE_INFO_PATH: &str = "query/device-info";
pub const ACTIVE_APP_PATH: &str = "query/active-app";
pub const APPS_PATH: &str = "query/apps";
pub const MEDIA_PLAYER_PATH: &str = "query/media-player";

/// The six URLs a [`DeviceClient`](crate::DeviceClient) talks to, built once
/// from the device's host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    keypress: String,
    launch: String,
    device_info: String,
    active_app: String,
    apps: String,
    media_player: String,
}

impl Endpoints {
    pub fn new(host: &str, port: u16) -> Self {
        let base = format!("http://{}:{}", host, port);
        let url = |path: &str| format!("{}/{}", base, path);

        Self {
            keypress: url(KEYPRESS_PATH),
            launch: url(LAUNCH_PATH),
            device_info: url(DEVICE_INFO_PATH),
            active_app: url(ACTIVE_APP_PATH),
            apps: url(APPS_PATH),
            media_player: url(MEDIA_PLAYER_PATH),
            base,
        }
    }

    /// `http://{host}:{port}`
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Prefix for keypress commands, ending in `/`
    pub fn keypress(&self) -> &str {
        &self.keypress
    }

    /// Prefix for launch commands, ending in `/`
    pub fn launch(&self) -> &str {
        &self.launch
    }

    pub fn device_info(&self) -> &str {
        &self.device_info
    }

    pub fn active_app(&self) -> &str {
        &self.active_app
    }

    pub fn apps(&self) -> &str {
        &self.apps
    }

    pub fn media_player(&self) -> &str {
        &self.media_player
    }

    /// Full URL for pressing `key_code`
    pub fn keypress_url(&self, key_code: &str) -> String {
        format!("{}{}", self.keypress, key_code)
    }

    /// Full URL for launching `app_id`
    pub fn launch_url(&self, app_id: &str) -> String {
        format!("{}{}", self.launch, app_id)
    }
}
