use crate::endpoints::{Endpoints, DEFAULT_PORT};
use crate::models::{ActiveApp, App, AppList, DeviceInfo, PlayerStatus};
use crate::xml::{self, XmlDocument};
use crate::{ApiError, Key, Result};
use http_client::{HttpTransport, TransportConfig, UreqTransport};
use tracing::debug;

/// A client for one Roku device's ECP HTTP API
///
/// The client owns nothing but the device's endpoint URLs and the injected
/// transport. Every method performs exactly one blocking HTTP request and
/// returns a freshly parsed value; nothing is cached between calls.
///
/// # Example
///
/// ```rust,no_run
/// use roku_api::{DeviceClient, Key};
///
/// let client = DeviceClient::connect("192.168.1.42");
/// client.press(Key::Home)?;
///
/// let info = client.get_device_info()?;
/// println!("{} running {:?}", info.display_name(), info.software_version);
///
/// for app in client.get_app_list()? {
///     println!("{:?} {}", app.id, app.name);
/// }
/// # Ok::<(), roku_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeviceClient<T = UreqTransport> {
    transport: T,
    host: String,
    port: u16,
    endpoints: Endpoints,
}

impl DeviceClient<UreqTransport> {
    /// Create a client for `host` on the standard ECP port with default timeouts
    pub fn connect(host: &str) -> Self {
        Self::new(UreqTransport::new(), host, DEFAULT_PORT)
    }

    /// Create a client backed by a transport with the given timeouts
    pub fn with_config(host: &str, port: u16, config: &TransportConfig) -> Self {
        Self::new(UreqTransport::with_config(config), host, port)
    }
}

impl<T: HttpTransport> DeviceClient<T> {
    /// Create a client over an already-configured transport
    ///
    /// No network activity happens here; the endpoint URLs are only
    /// precomputed.
    pub fn new(transport: T, host: &str, port: u16) -> Self {
        Self {
            transport,
            host: host.to_string(),
            port,
            endpoints: Endpoints::new(host, port),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a keypress, e.g. `"Home"` or `"Lit_a"`
    pub fn press_key(&self, key_code: &str) -> Result<()> {
        self.post_command(&self.endpoints.keypress_url(key_code))
    }

    /// Send a keypress from the [`Key`] catalogue
    pub fn press(&self, key: Key) -> Result<()> {
        self.press_key(&key.code())
    }

    /// Launch the app with the given channel id
    pub fn launch_app(&self, app_id: &str) -> Result<()> {
        self.post_command(&self.endpoints.launch_url(app_id))
    }

    /// Device identity, software version and network details
    pub fn get_device_info(&self) -> Result<DeviceInfo> {
        self.query(self.endpoints.device_info())
    }

    /// The app in the foreground, plus the screensaver if one is running
    pub fn get_active_app(&self) -> Result<ActiveApp> {
        self.query(self.endpoints.active_app())
    }

    /// Installed apps, in the order the device lists them
    pub fn get_app_list(&self) -> Result<Vec<App>> {
        self.query::<AppList>(self.endpoints.apps())
            .map(AppList::into_apps)
    }

    /// Playback state and position of the media player
    pub fn get_player_status(&self) -> Result<PlayerStatus> {
        self.query(self.endpoints.media_player())
    }

    fn post_command(&self, url: &str) -> Result<()> {
        self.transport
            .post(url)
            .map_err(|e| ApiError::command(url, e))
    }

    fn query<R: XmlDocument>(&self, url: &str) -> Result<R> {
        let body = self.transport.get(url).map_err(|e| {
            debug!(%url, error = %e, "Error executing GET command");
            ApiError::query(url, e)
        })?;

        xml::parse(&body).map_err(|cause| {
            debug!(%url, %cause, "Unusable query response");
            ApiError::query(url, cause)
        })
    }
}
