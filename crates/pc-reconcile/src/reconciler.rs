//! Runs a plan against two records through a [`Comparator`]

use crate::error::{ReconcileError, ReconcileResult};
use crate::plan::{CheckKind, FieldCheck, ReconcilePlan};
use crate::registry::FieldRegistry;
use pc_comparator::{CompareResult, Comparator};
use tracing::{debug, trace};

/// Field registries for both record types of a plan
pub struct Reconciler<A, B> {
    first: FieldRegistry<A>,
    second: FieldRegistry<B>,
}

impl<A, B> Reconciler<A, B> {
    pub fn new(first: FieldRegistry<A>, second: FieldRegistry<B>) -> Self {
        Self { first, second }
    }

    pub fn first_fields(&self) -> &FieldRegistry<A> {
        &self.first
    }

    pub fn second_fields(&self) -> &FieldRegistry<B> {
        &self.second
    }

    /// Bind `first` and `second`, run every check of `plan`, and report validity
    pub fn run(&self, plan: &ReconcilePlan, first: A, second: B) -> ReconcileResult<bool> {
        let comparator = Comparator::<A, B>::with_instances(first, second)?;
        self.apply(plan, &comparator)?;

        let valid = comparator.is_valid()?;
        debug!(plan = %plan.name, valid, "Reconciliation finished");
        Ok(valid)
    }

    /// Run the checks of `plan` on an already bound comparator
    ///
    /// Checks run in plan order and follow the comparator's short-circuit: once
    /// a pair differs, later pairs are not read. A field name that is missing
    /// from its registry, or registered with the other kind, fails the check.
    pub fn apply(&self, plan: &ReconcilePlan, comparator: &Comparator<A, B>) -> ReconcileResult<()> {
        plan.validate()?;

        for (index, check) in plan.checks.iter().enumerate() {
            trace!(
                plan = %plan.name,
                index,
                first = %check.first,
                second = %check.second_name(),
                "Running check"
            );
            self.check(check, comparator)
                .map_err(|source| ReconcileError::Check {
                    index,
                    first: check.first.clone(),
                    second: check.second_name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    fn check(&self, check: &FieldCheck, comparator: &Comparator<A, B>) -> CompareResult<()> {
        let second = check.second_name();
        match check.kind {
            CheckKind::Scalar => {
                comparator.compare_selected(
                    self.first.get_scalar(&check.first),
                    self.second.get_scalar(second),
                )?;
            }
            CheckKind::Sequence => {
                comparator.compare_selected_sequence(
                    self.first.get_sequence(&check.first),
                    self.second.get_sequence(second),
                )?;
            }
        }
        Ok(())
    }
}
