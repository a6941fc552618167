use serde_json::json;
use tplcov_core::document::{load_catalog, load_taxonomy, write_candidates, write_catalog};
use tplcov_core::{Catalog, Combination, DocumentError, Locale, TemplateEntry};

const COMMENTED_CATALOG: &str = r#"// Template configuration file
/* Cards are rendered
   by the notifier. */
{
  "templates": {
    "push": {
      "payloads": [
        {
          "tags": ["default"], // fallback card
          "payload": {
            "msg_type": "interactive",
            "card": { "elements": [{ "url": "https://github.com/{{repository.full_name}}" }] }
          }
        }
      ]
    },
    "issues": {
      "payloads": [
        { "tags": ["opened", "reopened"], "payload": { "msg_type": "interactive" } },
        { "payload": { "note": "no tags yet" } }
      ]
    }
  }
}
"#;

#[test]
fn commented_catalog_loads_with_urls_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.jsonc");
    std::fs::write(&path, COMMENTED_CATALOG).unwrap();

    let catalog = load_catalog(&path).unwrap();
    let push = &catalog.entries("push").unwrap()[0];
    assert_eq!(
        push.payload["card"]["elements"][0]["url"],
        "https://github.com/{{repository.full_name}}"
    );

    let combinations = catalog.combinations();
    assert_eq!(combinations.len(), 3);
    assert!(combinations.contains(&Combination::new("push", "")));
    assert_eq!(catalog.entries("issues").unwrap().len(), 2);
}

#[test]
fn catalog_survives_write_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("templates.jsonc");
    std::fs::write(&source, COMMENTED_CATALOG).unwrap();
    let catalog = load_catalog(&source).unwrap();

    let target = dir.path().join("out").join("templates.cn.jsonc");
    write_catalog(&target, &catalog, Locale::Chinese).unwrap();

    let reloaded = load_catalog(&target).unwrap();
    assert_eq!(reloaded, catalog);
    assert!(std::fs::read_to_string(&target)
        .unwrap()
        .starts_with("// 中文模板配置文件"));
}

#[test]
fn candidate_documents_are_plain_json_under_templates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated_missing_templates_en.json");
    let mut candidates = Catalog::new();
    candidates.push_entry("star", TemplateEntry::for_tag("created", json!({ "a": 1 })));

    write_candidates(&path, &candidates).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["templates"]["star"]["payloads"][0]["tags"], json!(["created"]));
    assert_eq!(load_catalog(&path).unwrap(), candidates);
}

#[test]
fn missing_documents_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_taxonomy(&path).unwrap_err();
    assert!(matches!(err, DocumentError::MissingFile { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.jsonc");
    std::fs::write(&path, "{ \"push\": { \"payloads\": [ } }").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }));
}

#[test]
fn unrecognized_keys_survive_merge_and_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.jsonc");
    std::fs::write(
        &path,
        r#"{ "push": { "description": "branch pushes",
             "payloads": [ { "tags": ["default"], "name": "main push", "payload": { "a": 1 } } ] } }"#,
    )
    .unwrap();
    let primary = load_catalog(&path).unwrap();

    let merged = tplcov_core::merge_catalogs(&primary, &Catalog::new()).catalog;
    write_catalog(&path, &merged, Locale::English).unwrap();

    let reloaded = load_catalog(&path).unwrap();
    assert_eq!(reloaded, primary);
    assert_eq!(
        reloaded.event_fields("push").unwrap()["description"],
        "branch pushes"
    );
    assert_eq!(reloaded.entries("push").unwrap()[0].extra["name"], "main push");
}
