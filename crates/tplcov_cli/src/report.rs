//! Human-readable console reports.

use tplcov_core::{
    AnalyzeReport, LocaleGaps, Locale, LocaleMerge, LocaleSynthesis, DEFAULT_TAG_SENTINEL,
};

const RULE_WIDTH: usize = 80;

fn heading(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn display_tag(tag: &str) -> &str {
    if tag.is_empty() {
        "(default)"
    } else {
        tag
    }
}

pub fn print_analysis(report: &AnalyzeReport) {
    heading("Template coverage");
    println!(
        "taxonomy: {} events, {} expected combinations",
        report.taxonomy_events, report.expected_count
    );

    for coverage in &report.locales {
        let result = &coverage.report;
        println!();
        println!(
            "[{}] {} ({} combinations)",
            coverage.locale,
            coverage.catalog.display(),
            result.actual_count
        );

        if result.missing.is_empty() {
            println!("  no missing templates");
        } else {
            println!("  missing: {}", result.missing.len());
            for (event, tags) in result.missing_by_event() {
                let tags = tags.into_iter().map(display_tag).collect::<Vec<_>>();
                println!("    - {event}: {}", tags.join(", "));
            }
        }

        if result.extra.is_empty() {
            println!("  no extra templates");
        } else {
            println!("  extra (not in taxonomy): {}", result.extra.len());
            for combination in &result.extra {
                println!("    - {combination}");
            }
        }
    }

    println!();
    heading("Summary");
    for coverage in &report.locales {
        let result = &coverage.report;
        println!(
            "[{}] coverage {:.1}% ({}/{})",
            coverage.locale, result.percent, result.covered_count, result.expected_count
        );
    }
    if report.is_complete() {
        println!("all templates covered");
    } else {
        println!("templates are still missing");
    }
}

pub fn print_synthesis(results: &[LocaleSynthesis]) {
    heading("Synthesize missing templates");
    for result in results {
        if result.written {
            println!(
                "[{}] wrote {} candidate templates to {}",
                result.locale,
                result.entries,
                result.output.display()
            );
        } else {
            println!("[{}] nothing missing, skipped", result.locale);
        }
    }
    println!("review the candidates, then run `tplcov merge`");
}

pub fn print_merge(results: &[LocaleMerge]) {
    heading("Merge candidate templates");
    for result in results {
        println!("[{}] {}", result.locale, result.catalog.display());
        println!("  retained: {}", result.stats.retained);
        println!("  added:    {}", result.stats.added);
        println!("  rejected: {}", result.stats.rejected);
        println!("  total:    {}", result.stats.total());
    }
}

pub fn print_comparison(primary: Locale, secondary: Locale, gaps: &LocaleGaps) {
    heading(&format!("Templates in [{primary}] missing from [{secondary}]"));
    if !gaps.missing_events.is_empty() {
        println!("events missing entirely: {}", gaps.missing_events.len());
        for gap in &gaps.missing_events {
            println!("  - {}: {}", gap.event, gap.tags.join(", "));
        }
    }
    if !gaps.partial_events.is_empty() {
        println!("events missing some tags: {}", gaps.partial_events.len());
        for gap in &gaps.partial_events {
            println!("  - {}: {}", gap.event, gap.tags.join(", "));
        }
    }
    if gaps.is_empty() {
        println!("no differences");
    }
    println!(
        "total: {} missing, {} partial (`{}` marks the default template)",
        gaps.missing_events.len(),
        gaps.partial_events.len(),
        DEFAULT_TAG_SENTINEL
    );
}
