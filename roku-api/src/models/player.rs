use crate::xml::{parse_millis, XmlDocument};
use serde::Deserialize;

/// Media player status, from `/query/media-player`
///
/// ```xml
/// <player error="false" state="play">
///   <plugin bandwidth="10000000 bps" id="12" name="Netflix"/>
///   <format audio="eac3" captions="none" drm="widevine" video="hevc"/>
///   <position>2549 ms</position>
///   <duration>5400000 ms</duration>
///   <is_live>false</is_live>
/// </player>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerStatus {
    /// Raw playback state; see [`PlayerStatus::playback_state`]
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@error")]
    pub error: Option<bool>,
    pub plugin: Option<PlayerPlugin>,
    pub format: Option<PlayerFormat>,
    pub buffering: Option<Buffering>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub runtime: Option<String>,
    pub is_live: Option<bool>,
}

/// The channel that owns the current stream
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerPlugin {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@bandwidth")]
    pub bandwidth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerFormat {
    #[serde(rename = "@audio")]
    pub audio: Option<String>,
    #[serde(rename = "@video")]
    pub video: Option<String>,
    #[serde(rename = "@captions")]
    pub captions: Option<String>,
    #[serde(rename = "@drm")]
    pub drm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Buffering {
    #[serde(rename = "@current")]
    pub current: Option<u64>,
    #[serde(rename = "@max")]
    pub max: Option<u64>,
    #[serde(rename = "@target")]
    pub target: Option<u64>,
}

/// Playback state as reported in `<player state="...">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Buffering,
    Stopped,
    Startup,
    Closed,
    Idle,
    Unknown(String),
}

impl From<&str> for PlaybackState {
    fn from(state: &str) -> Self {
        match state {
            "play" => PlaybackState::Playing,
            "pause" => PlaybackState::Paused,
            "buffer" => PlaybackState::Buffering,
            "stop" => PlaybackState::Stopped,
            "startup" => PlaybackState::Startup,
            "close" => PlaybackState::Closed,
            "none" => PlaybackState::Idle,
            other => PlaybackState::Unknown(other.to_string()),
        }
    }
}

impl XmlDocument for PlayerStatus {
    const ROOT: &'static str = "player";
}

impl PlayerStatus {
    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState::from(self.state.as_str())
    }

    pub fn is_playing(&self) -> bool {
        self.playback_state() == PlaybackState::Playing
    }

    pub fn position_ms(&self) -> Option<u64> {
        self.position.as_deref().and_then(parse_millis)
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.duration.as_deref().and_then(parse_millis)
    }

    pub fn runtime_ms(&self) -> Option<u64> {
        self.runtime.as_deref().and_then(parse_millis)
    }
}
