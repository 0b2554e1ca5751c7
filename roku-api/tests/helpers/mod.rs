//! Test helpers for fixture-based integration tests

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use std::fs;
use std::path::PathBuf;

/// Load an XML fixture from `tests/fixtures`
pub fn load_fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

/// Split the mock server's `host:port` into the pieces `DeviceClient::new` takes
pub fn host_and_port(server: &ServerGuard) -> (String, u16) {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address should contain a port");

    (host.to_string(), port.parse().expect("mock server port should be numeric"))
}

/// Serve `fixture` as an XML response to a GET on `path`, expecting one hit
pub fn mock_query(server: &mut ServerGuard, path: &str, fixture: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/xml; charset=\"utf-8\"")
        .with_body(load_fixture(fixture))
        .expect(1)
        .create()
}
