use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::aggregate::ErrorPolicy;
use crate::models::PeriodKey;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ledger-rollup",
    version,
    about = "Roll a dated transaction ledger up into per-month and per-description totals"
)]
pub(crate) struct Cli {
    /// Log filter for stderr diagnostics (e.g. `info`, `debug`, `ledger_rollup=trace`).
    #[arg(long, global = true, env = "LEDGER_ROLLUP_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Write the by-period and by-description documents as JSON.
    Export {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Directory the two documents are written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        #[arg(long, default_value = "transactions.json")]
        periods_file: String,

        #[arg(long, default_value = "by_desc.json")]
        descriptions_file: String,
    },
    /// Print spending and net per month, or one month's breakdown.
    Summary {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Month to break down, e.g. `2023-March`.
        #[arg(long, conflicts_with = "description")]
        period: Option<PeriodKey>,

        /// Description to show month by month (matched exactly).
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub(crate) struct LedgerArgs {
    /// Headerless CSV of `DD/MM/YYYY,description,amount` rows.
    pub(crate) path: PathBuf,

    /// What to do with a row that cannot be parsed.
    #[arg(long, value_enum, env = "LEDGER_ROLLUP_ON_ERROR", default_value_t = ErrorPolicy::Abort)]
    pub(crate) on_error: ErrorPolicy,
}
