//! Catalogue of ECP key codes
//!
//! [`DeviceClient::press_key`](crate::DeviceClient::press_key) accepts any
//! key code string; [`Key`] names the ones the remote control exposes so
//! callers don't have to remember the exact spelling.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A key that can be sent to `/keypress/{key}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Home,
    Rev,
    Fwd,
    Play,
    Select,
    Left,
    Right,
    Down,
    Up,
    Back,
    InstantReplay,
    Info,
    Backspace,
    Search,
    Enter,
    FindRemote,
    VolumeDown,
    VolumeUp,
    VolumeMute,
    PowerOff,
    PowerOn,
    ChannelUp,
    ChannelDown,
    InputTuner,
    InputHDMI1,
    InputHDMI2,
    InputHDMI3,
    InputHDMI4,
    InputAV1,
    /// A single character typed into an on-screen keyboard
    Literal(char),
}

/// Every named key, in remote-control order
pub const NAMED_KEYS: [Key; 29] = [
    Key::Home,
    Key::Rev,
    Key::Fwd,
    Key::Play,
    Key::Select,
    Key::Left,
    Key::Right,
    Key::Down,
    Key::Up,
    Key::Back,
    Key::InstantReplay,
    Key::Info,
    Key::Backspace,
    Key::Search,
    Key::Enter,
    Key::FindRemote,
    Key::VolumeDown,
    Key::VolumeUp,
    Key::VolumeMute,
    Key::PowerOff,
    Key::PowerOn,
    Key::ChannelUp,
    Key::ChannelDown,
    Key::InputTuner,
    Key::InputHDMI1,
    Key::InputHDMI2,
    Key::InputHDMI3,
    Key::InputHDMI4,
    Key::InputAV1,
];

const LITERAL_PREFIX: &str = "Lit_";

impl Key {
    /// The ECP name of a named key, `None` for literals
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Key::Home => "Home",
            Key::Rev => "Rev",
            Key::Fwd => "Fwd",
            Key::Play => "Play",
            Key::Select => "Select",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Down => "Down",
            Key::Up => "Up",
            Key::Back => "Back",
            Key::InstantReplay => "InstantReplay",
            Key::Info => "Info",
            Key::Backspace => "Backspace",
            Key::Search => "Search",
            Key::Enter => "Enter",
            Key::FindRemote => "FindRemote",
            Key::VolumeDown => "VolumeDown",
            Key::VolumeUp => "VolumeUp",
            Key::VolumeMute => "VolumeMute",
            Key::PowerOff => "PowerOff",
            Key::PowerOn => "PowerOn",
            Key::ChannelUp => "ChannelUp",
            Key::ChannelDown => "ChannelDown",
            Key::InputTuner => "InputTuner",
            Key::InputHDMI1 => "InputHDMI1",
            Key::InputHDMI2 => "InputHDMI2",
            Key::InputHDMI3 => "InputHDMI3",
            Key::InputHDMI4 => "InputHDMI4",
            Key::InputAV1 => "InputAV1",
            Key::Literal(_) => return None,
        };
        Some(name)
    }

    /// The key code as it appears in the keypress URL
    ///
    /// Literal characters are percent-encoded as UTF-8 unless they are
    /// unreserved URL characters.
    pub fn code(&self) -> String {
        match self {
            Key::Literal(c) => format!("{}{}", LITERAL_PREFIX, encode_literal(*c)),
            named => named.name().unwrap_or_default().to_string(),
        }
    }
}

/// Characters sent as-is in a literal: ASCII alphanumerics and `-._~`
const LITERAL_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode_literal(c: char) -> String {
    let mut buf = [0u8; 4];
    utf8_percent_encode(c.encode_utf8(&mut buf), LITERAL_SET).to_string()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Returned when a string names no known key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key: {0}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parses a key name case-insensitively, or `Lit_x` for a single literal
    /// character, raw or percent-encoded
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(literal) = s.strip_prefix(LITERAL_PREFIX) {
            let decoded = percent_decode_str(literal)
                .decode_utf8()
                .map_err(|_| ParseKeyError(s.to_string()))?;
            let mut chars = decoded.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Literal(c)),
                _ => Err(ParseKeyError(s.to_string())),
            };
        }

        NAMED_KEYS
            .iter()
            .copied()
            .find(|key| key.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_key_codes() {
        assert_eq!(Key::Home.code(), "Home");
        assert_eq!(Key::InstantReplay.code(), "InstantReplay");
        assert_eq!(Key::InputHDMI2.code(), "InputHDMI2");
        assert_eq!(Key::VolumeMute.to_string(), "VolumeMute");
    }

    #[test]
    fn test_literal_key_codes() {
        assert_eq!(Key::Literal('a').code(), "Lit_a");
        assert_eq!(Key::Literal('7').code(), "Lit_7");
        assert_eq!(Key::Literal(' ').code(), "Lit_%20");
        assert_eq!(Key::Literal('&').code(), "Lit_%26");
        assert_eq!(Key::Literal('é').code(), "Lit_%C3%A9");
    }

    #[test]
    fn test_parse_named_keys_case_insensitive() {
        assert_eq!("Home".parse::<Key>(), Ok(Key::Home));
        assert_eq!("home".parse::<Key>(), Ok(Key::Home));
        assert_eq!("VOLUMEUP".parse::<Key>(), Ok(Key::VolumeUp));
        assert_eq!("inputhdmi1".parse::<Key>(), Ok(Key::InputHDMI1));
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!("Lit_x".parse::<Key>(), Ok(Key::Literal('x')));
        assert!("Lit_".parse::<Key>().is_err());
        assert!("Lit_ab".parse::<Key>().is_err());
    }

    #[test]
    fn test_parse_encoded_literal() {
        assert_eq!("Lit_%20".parse::<Key>(), Ok(Key::Literal(' ')));
        assert_eq!("Lit_%C3%A9".parse::<Key>(), Ok(Key::Literal('é')));
        assert_eq!("Lit_é".parse::<Key>(), Ok(Key::Literal('é')));
        assert!("Lit_%61%62".parse::<Key>().is_err());
        assert!("Lit_%FF".parse::<Key>().is_err());
    }

    #[test]
    fn test_literal_codes_round_trip() {
        for c in ['a', 'Z', '7', '-', '~', ' ', '&', '%', '/', '?', '#', '+', 'é', '日', '🎬'] {
            let key = Key::Literal(c);
            assert_eq!(key.code().parse::<Key>(), Ok(key), "literal {:?}", c);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Rewind".parse::<Key>().unwrap_err();
        assert_eq!(err, ParseKeyError("Rewind".to_string()));
        assert_eq!(err.to_string(), "Unknown key: Rewind");
    }

    #[test]
    fn test_all_named_keys_round_trip() {
        for key in NAMED_KEYS {
            let name = key.name().expect("named key");
            assert_eq!(name.parse::<Key>(), Ok(key));
        }
    }
}
