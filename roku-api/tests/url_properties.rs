//! Property tests for endpoint URL construction and key codes

use proptest::prelude::*;
use roku_api::{Endpoints, Key};

fn host_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d)),
        "[a-z][a-z0-9-]{0,20}(\\.[a-z][a-z0-9-]{0,10}){0,2}",
    ]
}

proptest! {
    #[test]
    fn prop_endpoint_urls_follow_base(host in host_strategy(), port in 1u16..=u16::MAX) {
        let endpoints = Endpoints::new(&host, port);
        let base = format!("http://{}:{}", host, port);

        prop_assert_eq!(endpoints.base(), base.as_str());
        prop_assert_eq!(endpoints.keypress(), format!("{}/keypress/", base));
        prop_assert_eq!(endpoints.launch(), format!("{}/launch/", base));
        prop_assert_eq!(endpoints.device_info(), format!("{}/query/device-info", base));
        prop_assert_eq!(endpoints.active_app(), format!("{}/query/active-app", base));
        prop_assert_eq!(endpoints.apps(), format!("{}/query/apps", base));
        prop_assert_eq!(endpoints.media_player(), format!("{}/query/media-player", base));
    }

    #[test]
    fn prop_command_urls_append_argument(
        host in host_strategy(),
        port in 1u16..=u16::MAX,
        arg in "[A-Za-z0-9_.]{1,24}",
    ) {
        let endpoints = Endpoints::new(&host, port);

        prop_assert_eq!(
            endpoints.keypress_url(&arg),
            format!("http://{}:{}/keypress/{}", host, port, arg)
        );
        prop_assert_eq!(
            endpoints.launch_url(&arg),
            format!("http://{}:{}/launch/{}", host, port, arg)
        );
    }

    #[test]
    fn prop_literal_key_codes_round_trip(c in any::<char>()) {
        let key = Key::Literal(c);
        let code = key.code();

        prop_assert!(code.starts_with("Lit_"));
        prop_assert!(code.is_ascii());
        prop_assert_eq!(code.parse::<Key>(), Ok(key));
    }
}
