//! `tplcov` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, initialize logging and run one core operation.
//! - Map outcomes to exit codes usable as a CI gate.
//!
//! # Exit codes
//! - `0`: success (for `analyze`, every combination is covered).
//! - `1`: `analyze` found missing combinations.
//! - `2`: the run failed; nothing was written.

mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tplcov_core::{
    default_log_level, init_logging, resolve_locales, CardSynthesizer, CoverageService,
    FileCatalogRepository, Locale, LocalePaths, ProjectLayout, ServiceResult,
};

const EXIT_INCOMPLETE: u8 = 1;
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "tplcov", version)]
#[command(about = "Check, fill and merge localized notification template catalogs")]
struct Cli {
    /// Directory holding events.yaml and the template catalogs
    #[arg(long, global = true, default_value = "configs")]
    config_dir: PathBuf,

    /// Taxonomy document, overriding `<config-dir>/events.yaml`
    #[arg(long, global = true)]
    taxonomy: Option<PathBuf>,

    /// English catalog, overriding `<config-dir>/templates.jsonc`
    #[arg(long, global = true)]
    en_catalog: Option<PathBuf>,

    /// English candidate document, overriding the generated default
    #[arg(long, global = true)]
    en_candidates: Option<PathBuf>,

    /// Chinese catalog, overriding `<config-dir>/templates.cn.jsonc`
    #[arg(long, global = true)]
    cn_catalog: Option<PathBuf>,

    /// Chinese candidate document, overriding the generated default
    #[arg(long, global = true)]
    cn_candidates: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report missing and extra combinations and coverage per locale
    Analyze {
        /// Locale to analyze (en|cn); repeatable, all when omitted
        #[arg(long = "locale")]
        locales: Vec<String>,
    },

    /// Generate candidate templates for every missing combination
    Synthesize {
        /// Locale to synthesize (en|cn); repeatable, all when omitted
        #[arg(long = "locale")]
        locales: Vec<String>,
    },

    /// Merge generated candidates into the primary catalogs
    Merge {
        /// Locale to merge (en|cn); repeatable, all when omitted
        #[arg(long = "locale")]
        locales: Vec<String>,
    },

    /// List events and tags one locale catalog lacks relative to another
    Compare {
        #[arg(long, default_value = "en")]
        primary: String,
        #[arg(long, default_value = "cn")]
        secondary: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let layout = build_layout(&cli);
    let service = CoverageService::new(FileCatalogRepository::new(layout));

    match run(&service, cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn build_layout(cli: &Cli) -> ProjectLayout {
    let mut layout = ProjectLayout::from_config_dir(&cli.config_dir);
    if let Some(taxonomy) = &cli.taxonomy {
        layout = layout.with_taxonomy(taxonomy.clone());
    }
    let overrides = [
        (Locale::English, &cli.en_catalog, &cli.en_candidates),
        (Locale::Chinese, &cli.cn_catalog, &cli.cn_candidates),
    ];
    for (locale, catalog, candidates) in overrides {
        if catalog.is_none() && candidates.is_none() {
            continue;
        }
        let defaults = layout.locale(locale).clone();
        let paths = LocalePaths {
            catalog: catalog.clone().unwrap_or(defaults.catalog),
            candidates: candidates.clone().unwrap_or(defaults.candidates),
        };
        layout = layout.with_locale_paths(locale, paths);
    }
    layout
}

fn run(
    service: &CoverageService<FileCatalogRepository>,
    command: Command,
) -> ServiceResult<ExitCode> {
    match command {
        Command::Analyze { locales } => {
            let report = service.analyze(&resolve_locales(&locales)?)?;
            report::print_analysis(&report);
            if report.is_complete() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_INCOMPLETE))
            }
        }
        Command::Synthesize { locales } => {
            let locales = resolve_locales(&locales)?;
            let results = service.synthesize(&locales, &CardSynthesizer::new())?;
            report::print_synthesis(&results);
            Ok(ExitCode::SUCCESS)
        }
        Command::Merge { locales } => {
            let results = service.merge(&resolve_locales(&locales)?)?;
            report::print_merge(&results);
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare { primary, secondary } => {
            let primary = parse_locale(&primary)?;
            let secondary = parse_locale(&secondary)?;
            let gaps = service.compare(primary, secondary)?;
            report::print_comparison(primary, secondary, &gaps);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_locale(name: &str) -> ServiceResult<Locale> {
    let mut locales = resolve_locales(&[name])?;
    Ok(locales.remove(0))
}

#[cfg(test)]
mod tests {
    use super::{build_layout, Cli};
    use clap::Parser;
    use std::path::Path;
    use tplcov_core::Locale;

    #[test]
    fn locale_overrides_keep_other_defaults() {
        let cli = Cli::parse_from([
            "tplcov",
            "--config-dir",
            "cfg",
            "--cn-catalog",
            "zh/templates.jsonc",
            "merge",
        ]);
        let layout = build_layout(&cli);

        let cn = layout.locale(Locale::Chinese);
        assert_eq!(cn.catalog, Path::new("zh/templates.jsonc"));
        assert_eq!(
            cn.candidates,
            Path::new("cfg/generated_missing_templates_cn.json")
        );
        assert_eq!(
            layout.locale(Locale::English).catalog,
            Path::new("cfg/templates.jsonc")
        );
    }
}
