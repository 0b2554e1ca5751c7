//! XML decoding for ECP query responses.

use crate::error::QueryFailure;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

/// A response type bound to the root element of its XML document
pub trait XmlDocument: DeserializeOwned {
    /// Name of the root element, e.g. `device-info`
    const ROOT: &'static str;
}

/// Parse a response body into `T`.
///
/// An empty (or whitespace-only) body is reported as
/// [`QueryFailure::EmptyBody`]. A document whose root element is not
/// `T::ROOT`, or that quick-xml rejects (including one missing required
/// elements), is [`QueryFailure::Parse`]. There is no partially populated
/// result.
pub fn parse<T: XmlDocument>(body: &str) -> Result<T, QueryFailure> {
    if body.trim().is_empty() {
        return Err(QueryFailure::EmptyBody);
    }

    let root = root_element(body)?;
    if root != T::ROOT {
        return Err(QueryFailure::Parse(format!(
            "expected <{}> document, found <{}>",
            T::ROOT,
            root
        )));
    }

    quick_xml::de::from_str(body).map_err(|e| QueryFailure::Parse(e.to_string()))
}

/// Local name of the first element in `body`
fn root_element(body: &str) -> Result<String, QueryFailure> {
    let mut reader = Reader::from_str(body);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return Ok(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(QueryFailure::Parse("no root element".to_string())),
            Ok(_) => continue,
            Err(e) => return Err(QueryFailure::Parse(e.to_string())),
        }
    }
}

/// Parse the `"<n> ms"` durations the media player reports.
pub fn parse_millis(value: &str) -> Option<u64> {
    value
        .trim()
        .strip_suffix("ms")
        .unwrap_or(value)
        .trim()
        .parse()
        .ok()
}
