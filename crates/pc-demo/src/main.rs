//! Pair comparison demo
//!
//! Compares a ledger entry against a bank statement line, first with a
//! hand-written comparator chain and then through a reconciliation plan.
//!
//! # Environment Variables
//!
//! - `PAIRCHECK_PLAN`: plan file to run instead of the built-in plan
//! - `PAIRCHECK_LOG`: log filter (falls back to `RUST_LOG`, default `info`)

mod config;
mod records;

use anyhow::{Context, Result};
use config::DemoConfig;
use pc_comparator::Comparator;
use pc_reconcile::ReconcilePlan;
use records::{LedgerEntry, StatementLine};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validity reported by each demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DemoOutcome {
    fluent_match: bool,
    fluent_mismatch: bool,
    plan_match: bool,
    plan_mismatch: bool,
}

fn main() -> Result<()> {
    let config = DemoConfig::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting paircheck demo");

    let outcome = run(&config)?;
    println!("fluent, matching records:      {}", outcome.fluent_match);
    println!("fluent, different reference:   {}", outcome.fluent_mismatch);
    println!("plan, matching records:        {}", outcome.plan_match);
    println!("plan, different reference:     {}", outcome.plan_mismatch);

    Ok(())
}

fn run(config: &DemoConfig) -> Result<DemoOutcome> {
    let (entry, line) = records::matching_pair();
    let mut mismatched = line.clone();
    mismatched.reference = 999;

    let fluent_match = fluent_check(entry.clone(), line.clone())?;
    let fluent_mismatch = fluent_check(entry.clone(), mismatched.clone())?;

    let plan = load_plan(config)?;
    let reconciler = records::reconciler();
    let plan_match = reconciler.run(&plan, entry.clone(), line)?;
    let plan_mismatch = reconciler.run(&plan, entry, mismatched)?;
    info!(plan = %plan.name, plan_match, plan_mismatch, "Plan runs finished");

    Ok(DemoOutcome {
        fluent_match,
        fluent_mismatch,
        plan_match,
        plan_mismatch,
    })
}

fn fluent_check(entry: LedgerEntry, line: StatementLine) -> Result<bool> {
    let comparator = Comparator::<LedgerEntry, StatementLine>::with_instances(entry, line)?;
    let valid = comparator
        .compare_present(|e| e.id, |l| l.reference)?
        .compare_equal(|e| e.memo.as_deref(), |l| l.description.as_deref())?
        .compare_present_sequence(|e| &e.amounts, |l| &l.postings)?
        .is_valid()?;

    info!(valid, "Fluent comparison finished");
    Ok(valid)
}

fn load_plan(config: &DemoConfig) -> Result<ReconcilePlan> {
    match &config.plan_path {
        Some(path) => ReconcilePlan::from_file(path)
            .with_context(|| format!("failed to load plan {}", path.display())),
        None => Ok(records::builtin_plan()?),
    }
}
