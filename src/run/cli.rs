use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use crate::aggregate::DualAggregator;
use crate::config::{Cli, Command, LedgerArgs};
use crate::export::AggregateExporter;
use crate::import::LedgerReader;
use crate::models::PeriodKey;
use crate::util::{format_amount, truncate};

pub(crate) fn as_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export {
            ledger,
            out_dir,
            periods_file,
            descriptions_file,
        } => cli_export(&ledger, &out_dir, &periods_file, &descriptions_file),
        Command::Summary {
            ledger,
            period,
            description,
        } => cli_summary(&ledger, period, description.as_deref()),
    }
}

fn load(ledger: &LedgerArgs) -> Result<DualAggregator> {
    let records = LedgerReader::from_path(&ledger.path)?;
    let (agg, report) = DualAggregator::ingest(records, ledger.on_error)
        .with_context(|| format!("Failed to aggregate {}", ledger.path.display()))?;

    if !report.rejected.is_empty() {
        eprintln!(
            "Skipped {} malformed row(s) ({} accepted):",
            report.rejected.len(),
            report.accepted
        );
        for rejection in &report.rejected {
            eprintln!(
                "  row {}: {} [{}]",
                rejection.position, rejection.error, rejection.raw
            );
        }
    }
    Ok(agg)
}

fn cli_export(
    ledger: &LedgerArgs,
    out_dir: &Path,
    periods_file: &str,
    descriptions_file: &str,
) -> Result<()> {
    let agg = load(ledger)?;

    // Build both documents before touching the filesystem.
    let periods = AggregateExporter::periods_document(&agg)?;
    let descriptions = AggregateExporter::descriptions_document(&agg)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    let periods_path = out_dir.join(periods_file);
    let descriptions_path = out_dir.join(descriptions_file);
    AggregateExporter::write_file(&periods, &periods_path)?;
    AggregateExporter::write_file(&descriptions, &descriptions_path)?;
    verify_round_trip(&agg, &periods_path, &descriptions_path)?;

    println!(
        "Aggregated {} transactions into {} periods and {} descriptions",
        agg.transaction_count(),
        periods.len(),
        descriptions.len()
    );
    println!("  Periods:      {}", periods_path.display());
    println!("  Descriptions: {}", descriptions_path.display());
    Ok(())
}

/// Re-read the written documents and warn if they no longer match the totals.
/// JSON numbers are floats, so amounts beyond ~15 significant digits can drift.
fn verify_round_trip(agg: &DualAggregator, periods: &Path, descriptions: &Path) -> Result<()> {
    let open = |path: &Path| {
        File::open(path).with_context(|| format!("Failed to reopen {}", path.display()))
    };
    if AggregateExporter::read_periods(open(periods)?)? != *agg.periods() {
        tracing::warn!(path = %periods.display(), "periods document lost precision");
    }
    if AggregateExporter::read_descriptions(open(descriptions)?)? != *agg.descriptions() {
        tracing::warn!(path = %descriptions.display(), "descriptions document lost precision");
    }
    Ok(())
}

fn cli_summary(
    ledger: &LedgerArgs,
    period: Option<PeriodKey>,
    description: Option<&str>,
) -> Result<()> {
    let agg = load(ledger)?;
    match (period, description) {
        (Some(key), _) => print_period(&agg, key),
        (None, Some(description)) => print_description(&agg, description),
        (None, None) => {
            print_periods(&agg);
            Ok(())
        }
    }
}

fn print_periods(agg: &DualAggregator) {
    if agg.periods().is_empty() {
        println!("No transactions");
        return;
    }

    let mut periods: Vec<_> = agg.periods().iter().collect();
    periods.sort_by_key(|(key, _)| **key);

    println!(
        "{:<18} {:>16} {:>16} {:>6}",
        "Period", "Spending", "Net", "Items"
    );
    println!("{}", "─".repeat(59));
    for (key, p) in periods {
        println!(
            "{:<18} {:>16} {:>16} {:>6}",
            key.to_string(),
            format_amount(p.total),
            format_amount(p.net()),
            p.by_description.len()
        );
    }
}

fn print_period(agg: &DualAggregator, key: PeriodKey) -> Result<()> {
    let p = agg
        .period(&key)
        .ok_or_else(|| anyhow::anyhow!("No transactions in {key}"))?;

    let mut rows: Vec<_> = p.by_description.iter().collect();
    rows.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    println!("{key}");
    println!("{}", "─".repeat(42));
    println!("  Spending:  {}", format_amount(p.total));
    println!("  Net:       {}", format_amount(p.net()));
    println!();
    println!("By Description:");
    for (description, amount) in rows {
        println!(
            "  {:<24} {:>14}",
            truncate(description, 24),
            format_amount(*amount)
        );
    }
    Ok(())
}

fn print_description(agg: &DualAggregator, description: &str) -> Result<()> {
    let d = agg
        .description(description)
        .ok_or_else(|| anyhow::anyhow!("No transactions described as '{description}'"))?;

    let mut rows: Vec<_> = d.by_period.iter().collect();
    rows.sort_by_key(|(key, _)| **key);

    println!("{description}");
    println!("{}", "─".repeat(42));
    println!("  Total:     {}", format_amount(d.total));
    println!();
    println!("By Period:");
    for (key, amount) in rows {
        println!("  {:<24} {:>14}", key.to_string(), format_amount(*amount));
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
