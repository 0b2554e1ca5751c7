//! Typed client for the Roku External Control Protocol (ECP)
//!
//! ECP is a plain HTTP API served by Roku devices on port 8060. Commands
//! (`/keypress/{key}`, `/launch/{id}`) are POSTs with an empty body; queries
//! (`/query/device-info`, `/query/active-app`, `/query/apps`,
//! `/query/media-player`) are GETs returning XML.
//!
//! This crate maps those endpoints onto [`DeviceClient`] methods and the XML
//! documents onto plain structs. HTTP itself is delegated to the private
//! `http-client` crate through the [`HttpTransport`] trait, so callers can
//! inject their own transport.
//!
//! ```rust,no_run
//! use roku_api::{DeviceClient, PlaybackState};
//!
//! let client = DeviceClient::connect("192.168.1.42");
//! let player = client.get_player_status()?;
//!
//! if player.playback_state() == PlaybackState::Playing {
//!     println!("{:?} ms in", player.position_ms());
//! }
//! # Ok::<(), roku_api::ApiError>(())
//! ```
//!
//! Errors come in two kinds: [`ApiError::CommandFailed`] for commands and
//! [`ApiError::QueryFailed`] for queries. Nothing is retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod key;
pub mod models;
pub mod xml;

pub use client::DeviceClient;
pub use endpoints::{Endpoints, DEFAULT_PORT};
pub use error::{ApiError, QueryFailure, Result};
pub use http_client::{HttpTransport, TransportConfig, TransportError, UreqTransport};
pub use key::{Key, ParseKeyError};
pub use models::{
    ActiveApp, App, AppList, Buffering, DeviceInfo, PlaybackState, PlayerFormat, PlayerPlugin,
    PlayerStatus,
};
pub use xml::XmlDocument;
