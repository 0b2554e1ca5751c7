use crate::xml::XmlDocument;
use serde::Deserialize;

/// Device identity and capabilities, from `/query/device-info`
///
/// The device reports many more elements than are modelled here; unknown
/// ones are ignored. Only the identifiers every model reports are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceInfo {
    pub udn: String,
    pub serial_number: String,
    pub model_number: String,
    pub device_id: Option<String>,
    pub vendor_name: Option<String>,
    pub model_name: Option<String>,
    pub model_region: Option<String>,
    pub is_tv: Option<bool>,
    pub is_stick: Option<bool>,
    pub friendly_device_name: Option<String>,
    pub friendly_model_name: Option<String>,
    pub default_device_name: Option<String>,
    pub user_device_name: Option<String>,
    pub user_device_location: Option<String>,
    pub software_version: Option<String>,
    pub software_build: Option<String>,
    pub network_type: Option<String>,
    pub network_name: Option<String>,
    pub wifi_mac: Option<String>,
    pub ethernet_mac: Option<String>,
    pub power_mode: Option<String>,
    pub supports_suspend: Option<bool>,
    /// Seconds since boot
    pub uptime: Option<u64>,
}

impl XmlDocument for DeviceInfo {
    const ROOT: &'static str = "device-info";
}

impl DeviceInfo {
    /// Best human-readable name the device reports
    pub fn display_name(&self) -> &str {
        self.user_device_name
            .as_deref()
            .or(self.friendly_device_name.as_deref())
            .or(self.default_device_name.as_deref())
            .or(self.model_name.as_deref())
            .unwrap_or(&self.serial_number)
    }

    pub fn is_tv(&self) -> bool {
        self.is_tv.unwrap_or(false)
    }

    /// `None` when the device doesn't report a power mode
    pub fn is_powered_on(&self) -> Option<bool> {
        self.power_mode.as_deref().map(|mode| mode == "PowerOn")
    }
}
