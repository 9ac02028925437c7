//! Reading the version marker out of a downloaded release.

use std::sync::LazyLock;

use regex::bytes::Regex;

/// Version reported when a payload carries no marker.
pub const UNKNOWN_VERSION: &str = "unknown";

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"MODDY_VERSION\s*=\s*['"]([^'"]+)['"]"#).expect("valid regex")
});

/// Version found in `payload`, or [`UNKNOWN_VERSION`].
///
/// Works on raw bytes so both script and binary releases can be inspected.
pub fn marker_version(payload: &[u8]) -> String {
    MARKER
        .captures(payload)
        .map(|c| String::from_utf8_lossy(&c[1]).into_owned())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_double_and_single_quotes() {
        assert_eq!(marker_version(br#"MODDY_VERSION = "0.2.0""#), "0.2.0");
        assert_eq!(marker_version(b"x\nMODDY_VERSION='1.4.1'\n"), "1.4.1");
    }

    #[test]
    fn survives_binary_noise() {
        let mut payload = vec![0u8, 159, 146, 150];
        payload.extend_from_slice(crate::VERSION_MARKER.as_bytes());
        payload.extend_from_slice(&[255, 0]);
        assert_eq!(marker_version(&payload), crate::VERSION);
    }

    #[test]
    fn missing_marker_is_unknown() {
        assert_eq!(marker_version(b"print('hello')"), UNKNOWN_VERSION);
    }
}
