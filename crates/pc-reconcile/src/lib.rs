//! Declarative reconciliation of two record types
//!
//! Each side registers its comparable fields by name in a [`FieldRegistry`].
//! A [`ReconcilePlan`], written in code or loaded from YAML/JSON, lists the
//! field pairs that must agree. A [`Reconciler`] binds two records and runs
//! the plan through a [`pc_comparator::Comparator`], so plans get the same
//! null-pairing, ordered sequence equality and short-circuit as hand-written
//! comparator chains.
//!
//! # Example
//!
//! ```
//! use pc_reconcile::{FieldRegistry, ReconcilePlan, Reconciler};
//!
//! struct LedgerEntry { id: u32, amounts: Vec<i64> }
//! struct StatementLine { reference: u32, postings: Vec<i64> }
//!
//! let ledger = FieldRegistry::new()
//!     .scalar_field("id", |e: &LedgerEntry| Some(e.id))
//!     .sequence_field("amounts", |e: &LedgerEntry| Some(e.amounts.clone()));
//! let bank = FieldRegistry::new()
//!     .scalar_field("ref", |l: &StatementLine| Some(l.reference))
//!     .sequence_field("postings", |l: &StatementLine| Some(l.postings.clone()));
//!
//! let plan = ReconcilePlan::from_yaml_str(
//!     r#"
//! name: ledger-vs-bank
//! checks:
//!   - first: id
//!     second: ref
//!   - first: amounts
//!     second: postings
//!     kind: sequence
//! "#,
//! )?;
//!
//! let entry = LedgerEntry { id: 7, amounts: vec![1200, -50] };
//! let line = StatementLine { reference: 7, postings: vec![1200, -50] };
//! assert!(Reconciler::new(ledger, bank).run(&plan, entry, line)?);
//! # Ok::<(), pc_reconcile::ReconcileError>(())
//! ```

mod error;
mod plan;
mod reconciler;
mod registry;

pub use error::{ReconcileError, ReconcileResult};
pub use plan::{CheckKind, FieldCheck, ReconcilePlan};
pub use reconciler::Reconciler;
pub use registry::{FieldRegistry, FieldResult, ScalarSelector, SequenceSelector};
