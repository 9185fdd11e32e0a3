//! Property-based tests for configuration merging and defaults.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::format::PathFormat;
use proptest::prelude::*;
use std::path::PathBuf;

fn format_strategy() -> impl Strategy<Value = PathFormat> {
    prop::sample::select(PathFormat::ALL.to_vec())
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(format_strategy()),
        prop::option::of(prop::collection::vec(format_strategy(), 1..4)),
        prop::option::of("/[a-z]{1,12}(/[a-z]{1,12}){0,3}"),
    )
        .prop_map(|(source_format, types, playlist_dir)| Config {
            source_format,
            types,
            playlist_dir: playlist_dir.map(PathBuf::from),
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging an empty layer changes nothing
    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Set fields of the higher layer always win
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let merged = ConfigMerger::merge(vec![low.clone(), high.clone()]);
        prop_assert_eq!(merged.source_format, high.source_format.or(low.source_format));
        prop_assert_eq!(merged.types, high.types.or(low.types));
        prop_assert_eq!(merged.playlist_dir, high.playlist_dir.or(low.playlist_dir));
    }

    // The source format never appears among the derived export types
    #[test]
    fn default_types_exclude_source(source in format_strategy()) {
        let config = Config { source_format: Some(source), ..Default::default() };
        let types = config.effective_types();
        prop_assert_eq!(types.len(), 3);
        prop_assert!(!types.contains(&source));
    }

    // Every non-source format gets its own default destination
    #[test]
    fn default_destinations_are_distinct(source in format_strategy(), dir in "/[a-z]{1,12}(/[a-z]{1,12}){0,3}") {
        let config = Config {
            source_format: Some(source),
            playlist_dir: Some(PathBuf::from(&dir)),
            ..Default::default()
        };
        let mut seen = std::collections::HashSet::new();
        for format in PathFormat::ALL {
            let destination = config.destination_for(format).unwrap();
            prop_assert!(seen.insert(destination));
        }
    }
}
