use std::path::Path;
use tplcov_core::{
    CardSynthesizer, CoverageService, CoverageServiceError, DocumentError, FileCatalogRepository,
    Locale, ProjectLayout, TemplateEntry, TemplateSynthesizer,
};

const EVENTS_YAML: &str = "\
events:
  push:
  star:
    types: [created, deleted]
  issues:
    types:
      - opened
      - closed
";

const EN_CATALOG: &str = r#"// English templates
{
  "templates": {
    "push": { "payloads": [ { "tags": ["default"], "payload": { "title": "push" } } ] },
    "issues": { "payloads": [ { "tags": ["opened"], "payload": { "title": "opened" } } ] },
    "fork": { "payloads": [ { "tags": ["default"], "payload": { "title": "fork" } } ] }
  }
}
"#;

const CN_CATALOG: &str = r#"{
  "push": { "payloads": [ { "tags": ["default"], "payload": { "title": "推送" } } ] }
}
"#;

fn seed(dir: &Path) -> CoverageService<FileCatalogRepository> {
    std::fs::write(dir.join("events.yaml"), EVENTS_YAML).unwrap();
    std::fs::write(dir.join("templates.jsonc"), EN_CATALOG).unwrap();
    std::fs::write(dir.join("templates.cn.jsonc"), CN_CATALOG).unwrap();
    let layout = ProjectLayout::from_config_dir(dir);
    CoverageService::new(FileCatalogRepository::new(layout))
}

#[test]
fn analyze_synthesize_merge_reaches_full_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());

    let before = service.analyze(&Locale::ALL).unwrap();
    assert!(!before.is_complete());
    assert_eq!(before.expected_count, 5);
    let en = &before.locales[0].report;
    assert_eq!(en.missing.len(), 3);
    assert_eq!(en.extra.len(), 1);
    assert_eq!(format!("{:.1}", en.percent), "40.0");
    assert_eq!(before.locales[1].report.missing.len(), 4);

    let synthesized = service
        .synthesize(&Locale::ALL, &CardSynthesizer::new())
        .unwrap();
    assert_eq!(synthesized[0].entries, 3);
    assert_eq!(synthesized[1].entries, 4);
    assert!(synthesized.iter().all(|result| result.written));
    assert!(dir.path().join("generated_missing_templates_cn.json").exists());

    let merged = service.merge(&Locale::ALL).unwrap();
    assert_eq!(merged[0].stats.retained, 3);
    assert_eq!(merged[0].stats.added, 3);
    assert_eq!(merged[1].stats.added, 4);

    let after = service.analyze(&Locale::ALL).unwrap();
    assert!(after.is_complete());
    assert!(after
        .locales
        .iter()
        .all(|coverage| coverage.report.percent == 100.0));
    // Extra combinations are reported, never removed.
    assert_eq!(after.locales[0].report.extra.len(), 1);
}

#[test]
fn rerunning_the_pipeline_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());
    service
        .synthesize(&Locale::ALL, &CardSynthesizer::new())
        .unwrap();
    service.merge(&Locale::ALL).unwrap();
    let catalog_after_first =
        std::fs::read_to_string(dir.path().join("templates.jsonc")).unwrap();

    let second = service
        .synthesize(&Locale::ALL, &CardSynthesizer::new())
        .unwrap();
    assert!(second.iter().all(|result| !result.written && result.entries == 0));

    let remerged = service.merge(&Locale::ALL).unwrap();
    assert!(remerged.iter().all(|result| result.stats.added == 0));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("templates.jsonc")).unwrap(),
        catalog_after_first
    );
}

#[test]
fn merge_with_missing_candidates_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());
    service
        .synthesize(&[Locale::English], &CardSynthesizer::new())
        .unwrap();

    let err = service.merge(&Locale::ALL).unwrap_err();
    match err {
        CoverageServiceError::Document(DocumentError::MissingFile { path }) => {
            assert!(path.ends_with("generated_missing_templates_cn.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        std::fs::read_to_string(dir.path().join("templates.jsonc")).unwrap(),
        EN_CATALOG
    );
}

struct Untagged;

impl TemplateSynthesizer for Untagged {
    fn synthesize(&self, _event: &str, _tag: &str, _locale: Locale) -> TemplateEntry {
        TemplateEntry::default()
    }
}

#[test]
fn invalid_synthesized_entries_abort_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());

    let err = service.synthesize(&Locale::ALL, &Untagged).unwrap_err();
    assert!(matches!(
        err,
        CoverageServiceError::Synthesis {
            locale: Locale::English,
            ..
        }
    ));
    assert!(!dir.path().join("generated_missing_templates_en.json").exists());
    assert!(!dir.path().join("generated_missing_templates_cn.json").exists());
}

#[test]
fn malformed_taxonomy_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());
    std::fs::write(dir.path().join("events.yaml"), "events: [push, star").unwrap();

    let err = service.analyze(&Locale::ALL).unwrap_err();
    assert!(err.to_string().contains("events.yaml"));
}

#[test]
fn compare_lists_locale_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let service = seed(dir.path());

    let gaps = service.compare(Locale::English, Locale::Chinese).unwrap();
    let missing_events = gaps
        .missing_events
        .iter()
        .map(|gap| gap.event.as_str())
        .collect::<Vec<_>>();
    assert_eq!(missing_events, vec!["fork", "issues"]);
    assert!(gaps.partial_events.is_empty());
}
