//! Sample records: a bookkeeping entry and the matching bank statement line

use pc_reconcile::{FieldRegistry, ReconcilePlan, ReconcileResult, Reconciler};

#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: u64,
    pub memo: Option<String>,
    pub amounts: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct StatementLine {
    pub reference: u64,
    pub description: Option<String>,
    pub postings: Vec<i64>,
}

/// Plan used when no plan file is configured
pub const BUILTIN_PLAN: &str = r#"
name: ledger-vs-statement
checks:
  - first: id
    second: reference
  - first: memo
    second: description
  - first: amounts
    second: postings
    kind: sequence
"#;

pub fn builtin_plan() -> ReconcileResult<ReconcilePlan> {
    ReconcilePlan::from_yaml_str(BUILTIN_PLAN)
}

pub fn reconciler() -> Reconciler<LedgerEntry, StatementLine> {
    let ledger = FieldRegistry::new()
        .scalar_field("id", |e: &LedgerEntry| Some(e.id))
        .scalar_field("memo", |e: &LedgerEntry| e.memo.clone())
        .sequence_field("amounts", |e: &LedgerEntry| Some(e.amounts.clone()));
    let statement = FieldRegistry::new()
        .scalar_field("reference", |l: &StatementLine| Some(l.reference))
        .scalar_field("description", |l: &StatementLine| l.description.clone())
        .sequence_field("postings", |l: &StatementLine| Some(l.postings.clone()));
    Reconciler::new(ledger, statement)
}

/// A ledger entry and a statement line that agree on every field
pub fn matching_pair() -> (LedgerEntry, StatementLine) {
    (
        LedgerEntry {
            id: 1,
            memo: Some("Test".to_string()),
            amounts: vec![1, 2],
        },
        StatementLine {
            reference: 1,
            description: Some("Test".to_string()),
            postings: vec![1, 2],
        },
    )
}
