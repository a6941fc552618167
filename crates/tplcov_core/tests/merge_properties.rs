use serde_json::json;
use tplcov_core::{merge_catalogs, Catalog, TemplateEntry};

fn entry(tags: &[&str], title: &str) -> TemplateEntry {
    TemplateEntry {
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        payload: json!({ "card": { "header": { "title": title } } }),
        ..TemplateEntry::default()
    }
}

fn primary() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push_entry("push", entry(&["default"], "push"));
    catalog.push_entry("issues", entry(&["opened", "reopened"], "issue opened"));
    catalog.push_entry("issues", entry(&["closed"], "issue closed"));
    catalog.push_entry("release", entry(&[], "untagged"));
    catalog
}

fn candidates() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push_entry("issues", entry(&["closed"], "generated closed"));
    catalog.push_entry("issues", entry(&["labeled"], "generated labeled"));
    catalog.push_entry("issues", entry(&["unlabeled", "opened"], "generated mixed"));
    catalog.push_entry("push", entry(&[""], "generated push"));
    catalog.push_entry("star", entry(&["created"], "generated star"));
    catalog.push_entry("release", entry(&["published"], "generated release"));
    catalog
}

#[test]
fn merge_is_idempotent() {
    let once = merge_catalogs(&primary(), &candidates());
    let twice = merge_catalogs(&once.catalog, &candidates());

    assert_eq!(twice.catalog, once.catalog);
    assert_eq!(twice.stats.added, 0);
    assert_eq!(twice.stats.retained, once.stats.total());
}

#[test]
fn merge_never_removes_or_changes_primary_entries() {
    let before = primary();
    let merged = merge_catalogs(&before, &candidates()).catalog;

    for (event, entries) in before.events() {
        let after = merged.entries(event).unwrap();
        assert!(after.len() >= entries.len());
        assert_eq!(&after[..entries.len()], entries);
    }
}

#[test]
fn merge_statistics_account_for_every_candidate() {
    let outcome = merge_catalogs(&primary(), &candidates());

    // closed, mixed (opened) and push default collide; the rest are new.
    assert_eq!(outcome.stats.retained, 4);
    assert_eq!(outcome.stats.added, 3);
    assert_eq!(outcome.stats.rejected, 3);
    assert_eq!(outcome.stats.total(), outcome.catalog.entry_count());
    assert_eq!(
        outcome.stats.added + outcome.stats.rejected,
        candidates().entry_count()
    );
}

#[test]
fn rejected_mixed_entry_drops_its_new_tags_too() {
    let merged = merge_catalogs(&primary(), &candidates()).catalog;
    let tags = merged.covered_tags("issues");

    assert!(tags.contains("labeled"));
    assert!(!tags.contains("unlabeled"));
}

#[test]
fn untagged_candidate_never_accumulates() {
    let mut primary = Catalog::new();
    primary.push_entry("issues", entry(&["opened"], "issue opened"));
    let mut loose = Catalog::new();
    loose.push_entry("issues", entry(&[], "no tags"));

    let once = merge_catalogs(&primary, &loose);
    let twice = merge_catalogs(&once.catalog, &loose);
    let thrice = merge_catalogs(&twice.catalog, &loose);

    assert_eq!(once.catalog, primary);
    assert_eq!(twice.catalog, once.catalog);
    assert_eq!(thrice.catalog.entry_count(), 1);
    assert_eq!(twice.stats.added, 0);
    assert_eq!(twice.stats.rejected, 1);
}
