//! Typed ECP query responses
//!
//! Each type is deserialized straight from the device's XML with
//! quick-xml's serde support and never mutated afterwards.

mod active_app;
mod apps;
mod device_info;
mod player;

pub use active_app::ActiveApp;
pub use apps::{App, AppList};
pub use device_info::DeviceInfo;
pub use player::{Buffering, PlaybackState, PlayerFormat, PlayerPlugin, PlayerStatus};
