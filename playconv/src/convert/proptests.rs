//! Property-based tests for conversion round trips.

use super::existence::FakeExistenceChecker;
use super::native::{normalize_posix, normalize_windows};
use super::uri::{native_to_uri, uri_to_native};
use super::PathFormatConverter;
use crate::format::{NativeKind, PathFormat};
use crate::mount::MountCorrelation;
use proptest::prelude::*;

// Segments include spaces and URI-reserved characters on purpose.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _#%+&()\\-\\.]{1,16}".prop_filter("not a dot component", |s| s != "." && s != "..")
}

fn relative_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

fn converter() -> PathFormatConverter {
    PathFormatConverter::new(
        vec![
            MountCorrelation::new("/mnt/c", "C:"),
            MountCorrelation::new("/mnt/d", "D:"),
        ],
        FakeExistenceChecker::empty(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // posix -> windows -> posix is the identity under a registered mount
    #[test]
    fn posix_windows_round_trip(parts in relative_strategy(), drive in prop::sample::select(vec!["c", "d"])) {
        let c = converter();
        let posix = normalize_posix(&format!("/mnt/{drive}/{}", parts.join("/"))).unwrap();
        let windows = c.posix_to_windows(&posix, false).converted().unwrap();
        let back = c.windows_to_posix(&windows, false).converted().unwrap();
        prop_assert_eq!(back, posix);
    }

    // windows -> posix -> windows is the identity under a registered mount
    #[test]
    fn windows_posix_round_trip(parts in relative_strategy(), drive in prop::sample::select(vec!["C:", "D:"])) {
        let c = converter();
        let windows = normalize_windows(&format!("{drive}\\{}", parts.join("\\"))).unwrap();
        let posix = c.windows_to_posix(&windows, false).converted().unwrap();
        let back = c.posix_to_windows(&posix, false).converted().unwrap();
        prop_assert_eq!(back, windows);
    }

    // uri_to_native(native_to_uri(p)) == p for absolute posix paths
    #[test]
    fn posix_uri_round_trip(parts in relative_strategy()) {
        let posix = normalize_posix(&format!("/{}", parts.join("/"))).unwrap();
        let uri = native_to_uri(&posix, NativeKind::Posix).unwrap();
        prop_assert_eq!(uri_to_native(&uri, NativeKind::Posix), Some(posix));
    }

    // uri_to_native(native_to_uri(p)) == p for drive paths
    #[test]
    fn windows_uri_round_trip(parts in relative_strategy()) {
        let windows = normalize_windows(&format!("E:\\{}", parts.join("\\"))).unwrap();
        let uri = native_to_uri(&windows, NativeKind::Windows).unwrap();
        prop_assert_eq!(uri_to_native(&uri, NativeKind::Windows), Some(windows));
    }

    // every known-source conversion of a mapped path lands back on the original
    #[test]
    fn matrix_round_trip(parts in relative_strategy(), via in prop::sample::select(PathFormat::ALL.to_vec())) {
        let c = converter();
        let posix = normalize_posix(&format!("/mnt/c/{}", parts.join("/"))).unwrap();
        let there = c.convert_known_source(&posix, PathFormat::Posix, via).converted().unwrap();
        let back = c.convert_known_source(&there, via, PathFormat::Posix).converted();
        prop_assert_eq!(back, Some(posix));
    }
}
