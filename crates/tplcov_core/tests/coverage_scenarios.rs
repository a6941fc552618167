use serde_json::json;
use tplcov_core::{
    coverage_percent, extra, merge_catalogs, missing, Catalog, CardSynthesizer, Combination,
    CombinationSet, Locale, Taxonomy, TemplateEntry, TemplateSynthesizer,
};

fn scenario_taxonomy() -> Taxonomy {
    [
        ("push", Vec::new()),
        ("issues", vec!["opened".to_string(), "closed".to_string()]),
    ]
    .into_iter()
    .collect()
}

fn entry(tags: &[&str]) -> TemplateEntry {
    TemplateEntry {
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        payload: json!({ "msg_type": "interactive" }),
        ..TemplateEntry::default()
    }
}

fn scenario_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push_entry("push", entry(&["default"]));
    catalog.push_entry("issues", entry(&["opened"]));
    catalog
}

#[test]
fn scenario_a_reports_single_missing_combination() {
    let expected = scenario_taxonomy().expected_combinations();
    let actual = scenario_catalog().combinations();

    let expected_set: CombinationSet = [
        Combination::new("push", ""),
        Combination::new("issues", "opened"),
        Combination::new("issues", "closed"),
    ]
    .into_iter()
    .collect();
    assert_eq!(expected, expected_set);

    let missing_set = missing(&expected, &actual);
    assert_eq!(
        missing_set.into_iter().collect::<Vec<_>>(),
        vec![Combination::new("issues", "closed")]
    );
    assert!(extra(&expected, &actual).is_empty());
    assert_eq!(format!("{:.1}", coverage_percent(&expected, &actual)), "66.7");
}

#[test]
fn scenario_b_synthesized_entry_completes_coverage() {
    let expected = scenario_taxonomy().expected_combinations();
    let primary = scenario_catalog();

    let synthesized = CardSynthesizer::new().synthesize("issues", "closed", Locale::English);
    assert_eq!(synthesized.tags, vec!["closed"]);

    let mut candidates = Catalog::new();
    candidates.push_entry("issues", synthesized);
    let merged = merge_catalogs(&primary, &candidates).catalog;

    let actual = merged.combinations();
    assert!(missing(&expected, &actual).is_empty());
    assert_eq!(coverage_percent(&expected, &actual), 100.0);
}

#[test]
fn scenario_c_overlapping_candidate_leaves_event_unchanged() {
    let mut primary = Catalog::new();
    primary.push_entry("issues", entry(&["opened", "closed"]));
    let mut candidates = Catalog::new();
    candidates.push_entry("issues", entry(&["closed"]));

    let outcome = merge_catalogs(&primary, &candidates);
    assert_eq!(outcome.catalog.entries("issues"), primary.entries("issues"));
    assert_eq!(outcome.stats.added, 0);
    assert_eq!(outcome.stats.rejected, 1);
}

#[test]
fn scenario_d_new_event_is_added() {
    let primary = scenario_catalog();
    let mut candidates = Catalog::new();
    candidates.push_entry("star", entry(&["created"]));

    let outcome = merge_catalogs(&primary, &candidates);
    assert_eq!(
        outcome.catalog.entries("star").unwrap(),
        &[entry(&["created"])]
    );
    assert_eq!(outcome.stats.added, 1);
    assert_eq!(outcome.stats.total(), 3);
}

#[test]
fn missing_and_extra_are_disjoint_from_what_they_exclude() {
    let expected = scenario_taxonomy().expected_combinations();
    let mut catalog = scenario_catalog();
    catalog.push_entry("star", entry(&["created"]));
    let actual = catalog.combinations();

    let missing_set = missing(&expected, &actual);
    let extra_set = extra(&expected, &actual);
    let covered: CombinationSet = expected.intersection(&actual).cloned().collect();

    assert!(missing_set.is_disjoint(&covered));
    assert!(extra_set.is_disjoint(&expected));
    assert_eq!(missing_set.len() + covered.len(), expected.len());
}

#[test]
fn merging_missing_candidates_increases_coverage() {
    let taxonomy: Taxonomy = [
        ("push", Vec::new()),
        (
            "issues",
            vec![
                "opened".to_string(),
                "closed".to_string(),
                "labeled".to_string(),
            ],
        ),
        ("watch", vec!["started".to_string()]),
    ]
    .into_iter()
    .collect();
    let expected = taxonomy.expected_combinations();
    let mut catalog = scenario_catalog();
    let synthesizer = CardSynthesizer::new();

    let mut previous = coverage_percent(&expected, &catalog.combinations());
    loop {
        let gaps = missing(&expected, &catalog.combinations());
        let Some(next) = gaps.iter().next() else {
            break;
        };
        let mut candidates = Catalog::new();
        candidates.push_entry(
            next.event(),
            synthesizer.synthesize(next.event(), next.tag(), Locale::Chinese),
        );
        catalog = merge_catalogs(&catalog, &candidates).catalog;

        let current = coverage_percent(&expected, &catalog.combinations());
        assert!(current > previous);
        previous = current;
    }
    assert_eq!(previous, 100.0);
}
