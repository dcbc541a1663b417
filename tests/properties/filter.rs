//! Property tests for artifact id filtering.

use std::collections::BTreeSet;

use proptest::prelude::*;

use cpisync::domain::entities::ArtifactDescriptor;
use cpisync::domain::services::filter_artifacts;
use cpisync::domain::value_objects::ArtifactType;
use cpisync::CpiError;

fn ids() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[A-Za-z][A-Za-z0-9_]{0,11}", 0..12)
        .prop_map(|set| set.into_iter().collect())
}

fn descriptors(ids: &[String]) -> Vec<ArtifactDescriptor> {
    ids.iter()
        .map(|id| ArtifactDescriptor::new(id, id, ArtifactType::Integration, false))
        .collect()
}

fn ids_of(artifacts: &[ArtifactDescriptor]) -> Vec<String> {
    artifacts.iter().map(|a| a.id().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an empty filter returns every artifact in order.
    #[test]
    fn property_no_filter_is_identity(all in ids()) {
        let filtered = filter_artifacts(descriptors(&all), &[], &[], "Pkg").unwrap();
        prop_assert_eq!(ids_of(&filtered), all);
    }

    /// PROPERTY: an include list returns exactly its ids, in list order.
    #[test]
    fn property_include_selects_in_given_order(
        (all, included) in ids().prop_flat_map(|all| {
            let pick = proptest::sample::subsequence(all.clone(), 0..=all.len())
                .prop_shuffle();
            (Just(all), pick)
        })
    ) {
        let filtered = filter_artifacts(descriptors(&all), &included, &[], "Pkg").unwrap();
        if included.is_empty() {
            prop_assert_eq!(ids_of(&filtered), all);
        } else {
            prop_assert_eq!(ids_of(&filtered), included);
        }
    }

    /// PROPERTY: an exclude list keeps the rest in original order.
    #[test]
    fn property_exclude_keeps_remaining_order(
        (all, excluded) in ids().prop_flat_map(|all| {
            let pick = proptest::sample::subsequence(all.clone(), 0..=all.len());
            (Just(all), pick)
        })
    ) {
        let filtered = filter_artifacts(descriptors(&all), &[], &excluded, "Pkg").unwrap();
        let dropped: BTreeSet<&String> = excluded.iter().collect();
        let expected: Vec<String> = all.iter().filter(|id| !dropped.contains(id)).cloned().collect();
        prop_assert_eq!(ids_of(&filtered), expected);
    }

    /// PROPERTY: an id missing from the package always fails.
    #[test]
    fn property_unknown_id_fails(all in ids(), include in any::<bool>()) {
        let unknown = vec!["0_not_listed".to_string()];
        let result = if include {
            filter_artifacts(descriptors(&all), &unknown, &[], "Pkg")
        } else {
            filter_artifacts(descriptors(&all), &[], &unknown, "Pkg")
        };
        let is_unknown = matches!(result, Err(CpiError::UnknownArtifactId { .. }));
        prop_assert!(is_unknown);
    }
}
