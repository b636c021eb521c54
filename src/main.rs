//! locsplice: replace named sections of a locale translation table in place.

use anyhow::Context;
use clap::Parser;
use locsplice::{config, input, scan, Edit, EditPlan};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locsplice")]
#[command(about = "Replace named sections of a locale translation table", long_about = None)]
struct Args {
    /// Translation table to patch (defaults to `target_file` from locsplice.toml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Load edit plan from JSON file
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,

    /// Locale of a single edit, e.g. en-US
    #[arg(long, requires_all = ["section", "replacement_file"])]
    locale: Option<String>,

    /// Section (or dotted path) of a single edit, e.g. landing
    #[arg(long, requires_all = ["locale", "replacement_file"])]
    section: Option<String>,

    /// File holding the replacement text of a single edit
    #[arg(long, value_name = "FILE", requires_all = ["locale", "section"])]
    replacement_file: Option<PathBuf>,

    /// Report what would change without writing the file
    #[arg(long)]
    dry_run: bool,

    /// List the locales declared in the file and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let cfg = config::Config::load()?;

    let path = args
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.target_file));
    let document = input::read_document(&path)?;

    if args.list {
        for locale in scan::list_locales(&document)? {
            info!("{locale}");
        }
        return Ok(());
    }

    let plan = build_plan(&args, &cfg)?;
    if plan.edits.is_empty() {
        warn!("No edits given: pass --plan or --locale/--section/--replacement-file");
        return Ok(());
    }

    let report = plan.apply(&document)?;
    info!("New size: {}", input::size_delta(&document, &report.document));
    info!(
        "{} of {} edits applied, {} skipped",
        report.applied(),
        report.outcomes.len(),
        report.skipped()
    );

    if args.dry_run {
        info!("Dry run: {} left untouched", path.display());
    } else if report.applied() > 0 {
        input::write_document(&path, &report.document)
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        info!("Nothing applied: {} left untouched", path.display());
    }

    Ok(())
}

/// Collect plan edits (from `--plan` or the configured plan file), then the single CLI edit.
fn build_plan(args: &Args, cfg: &config::Config) -> anyhow::Result<EditPlan> {
    let mut plan = match args.plan.clone().or_else(|| cfg.plan_path()) {
        Some(plan_path) => EditPlan::load(&plan_path)
            .with_context(|| format!("loading edit plan {}", plan_path.display()))?,
        None => EditPlan::default(),
    };

    if let (Some(locale), Some(section), Some(replacement_file)) =
        (&args.locale, &args.section, &args.replacement_file)
    {
        let replacement = fs::read_to_string(replacement_file)
            .with_context(|| format!("reading replacement {}", replacement_file.display()))?;
        plan.edits.push(Edit::new(locale, section, replacement));
    }

    Ok(plan)
}
