//! The fluent comparator bound to one pair of instances

use crate::error::{CompareError, CompareResult, SelectorError, Side};
use crate::pairing::{sequences_equal, Pairing};
use std::cell::Cell;
use std::convert::Infallible;
use tracing::{debug, trace};

/// Compares selected fields of a value of type `A` against a value of type `B`
///
/// Each `compare_*` call extracts one value from each bound instance and folds
/// the result into a single validity flag. The flag starts out `true`, can only
/// flip to `false`, and once `false` every later comparison is skipped without
/// running its selectors. Only [`bind`](Self::bind) resets it.
///
/// Absent values are modelled as `None`: two absent values are treated as
/// equal, one absent and one present value are unequal.
///
/// The flag lives in a [`Cell`], so comparisons take `&self` and chain. That
/// also makes the comparator `!Sync`; it is meant to be driven from one thread.
#[derive(Debug)]
pub struct Comparator<A, B> {
    instances: Option<(A, B)>,
    valid: Cell<bool>,
}

impl<A, B> Default for Comparator<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Comparator<A, B> {
    /// Create an unbound comparator; call [`bind`](Self::bind) before comparing
    pub fn new() -> Self {
        Self {
            instances: None,
            valid: Cell::new(true),
        }
    }

    /// Create a comparator already bound to `first` and `second`
    pub fn with_instances(
        first: impl Into<Option<A>>,
        second: impl Into<Option<B>>,
    ) -> CompareResult<Self> {
        let mut comparator = Self::new();
        comparator.bind(first, second)?;
        Ok(comparator)
    }

    /// Bind the two instances to compare
    ///
    /// Binding again replaces both instances and resets the comparator to
    /// valid. On error the previous binding, if any, is left as it was.
    pub fn bind(
        &mut self,
        first: impl Into<Option<A>>,
        second: impl Into<Option<B>>,
    ) -> CompareResult<()> {
        let first = first
            .into()
            .ok_or(CompareError::NullInstance { side: Side::First })?;
        let second = second
            .into()
            .ok_or(CompareError::NullInstance { side: Side::Second })?;

        if self.instances.is_some() {
            debug!(was_valid = self.valid.get(), "Rebinding comparator");
        }
        self.instances = Some((first, second));
        self.valid.set(true);
        Ok(())
    }

    /// Whether both instances have been bound
    pub fn is_bound(&self) -> bool {
        self.instances.is_some()
    }

    /// Whether every comparison so far found equal values
    pub fn is_valid(&self) -> CompareResult<bool> {
        self.instances()?;
        Ok(self.valid.get())
    }

    /// Borrow the bound instances
    pub fn instances(&self) -> CompareResult<(&A, &B)> {
        self.instances
            .as_ref()
            .map(|(first, second)| (first, second))
            .ok_or(CompareError::UnboundInstance)
    }

    /// Give back the bound instances, if any
    pub fn into_instances(self) -> Option<(A, B)> {
        self.instances
    }

    /// Compare two possibly-absent values
    pub fn compare_equal<'s, V, FA, FB>(
        &'s self,
        first: FA,
        second: FB,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> Option<V>,
        FB: FnOnce(&'s B) -> Option<V>,
        V: PartialEq,
    {
        self.compare_selected(Some(infallible(first)), Some(infallible(second)))
    }

    /// Compare two values that are always present
    pub fn compare_present<'s, V, FA, FB>(
        &'s self,
        first: FA,
        second: FB,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> V,
        FB: FnOnce(&'s B) -> V,
        V: PartialEq,
    {
        self.compare_equal(move |a| Some(first(a)), move |b| Some(second(b)))
    }

    /// Compare two scalar values through optional, fallible selectors
    ///
    /// This is the general form behind [`compare_equal`](Self::compare_equal).
    /// Preconditions are checked in order (bound, then both selectors present)
    /// before the short-circuit, so an absent selector is reported even on an
    /// invalid comparator. A selector error is returned as
    /// [`CompareError::SelectorEvaluation`] and leaves the flag untouched.
    pub fn compare_selected<'s, V, E1, E2, FA, FB>(
        &'s self,
        first: Option<FA>,
        second: Option<FB>,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> Result<Option<V>, E1>,
        FB: FnOnce(&'s B) -> Result<Option<V>, E2>,
        E1: Into<SelectorError>,
        E2: Into<SelectorError>,
        V: PartialEq,
    {
        let Some((a, b, first, second)) = self.prepare(first, second)? else {
            return Ok(self);
        };

        let v1 = first(a).map_err(|e| selector_failed(Side::First, e))?;
        let v2 = second(b).map_err(|e| selector_failed(Side::Second, e))?;

        self.fold(Pairing::of(v1, v2).resolve(|x, y| x == y), "scalar");
        Ok(self)
    }

    /// Compare two possibly-absent ordered sequences element by element
    pub fn compare_equal_sequence<'s, V, IA, IB, FA, FB>(
        &'s self,
        first: FA,
        second: FB,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> Option<IA>,
        FB: FnOnce(&'s B) -> Option<IB>,
        IA: IntoIterator<Item = V>,
        IB: IntoIterator<Item = V>,
        V: PartialEq,
    {
        self.compare_selected_sequence(Some(infallible(first)), Some(infallible(second)))
    }

    /// Compare two ordered sequences that are always present
    pub fn compare_present_sequence<'s, V, IA, IB, FA, FB>(
        &'s self,
        first: FA,
        second: FB,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> IA,
        FB: FnOnce(&'s B) -> IB,
        IA: IntoIterator<Item = V>,
        IB: IntoIterator<Item = V>,
        V: PartialEq,
    {
        self.compare_equal_sequence(move |a| Some(first(a)), move |b| Some(second(b)))
    }

    /// Compare two ordered sequences through optional, fallible selectors
    ///
    /// Both sequences are collected in full before comparing. They are equal
    /// when they have the same length and equal elements at every index.
    pub fn compare_selected_sequence<'s, V, IA, IB, E1, E2, FA, FB>(
        &'s self,
        first: Option<FA>,
        second: Option<FB>,
    ) -> CompareResult<&'s Self>
    where
        FA: FnOnce(&'s A) -> Result<Option<IA>, E1>,
        FB: FnOnce(&'s B) -> Result<Option<IB>, E2>,
        IA: IntoIterator<Item = V>,
        IB: IntoIterator<Item = V>,
        E1: Into<SelectorError>,
        E2: Into<SelectorError>,
        V: PartialEq,
    {
        let Some((a, b, first, second)) = self.prepare(first, second)? else {
            return Ok(self);
        };

        let s1: Option<Vec<V>> = first(a)
            .map_err(|e| selector_failed(Side::First, e))?
            .map(|seq| seq.into_iter().collect());
        let s2: Option<Vec<V>> = second(b)
            .map_err(|e| selector_failed(Side::Second, e))?
            .map(|seq| seq.into_iter().collect());

        self.fold(
            Pairing::of(s1, s2).resolve(|x, y| sequences_equal(&x, &y)),
            "sequence",
        );
        Ok(self)
    }

    /// Check preconditions; `None` means the call short-circuits
    fn prepare<'s, FA, FB>(
        &'s self,
        first: Option<FA>,
        second: Option<FB>,
    ) -> CompareResult<Option<(&'s A, &'s B, FA, FB)>> {
        let (a, b) = self.instances()?;
        let first = first.ok_or(CompareError::NullSelector { side: Side::First })?;
        let second = second.ok_or(CompareError::NullSelector { side: Side::Second })?;

        if !self.valid.get() {
            trace!("Comparator already invalid, skipping selectors");
            return Ok(None);
        }
        Ok(Some((a, b, first, second)))
    }

    fn fold(&self, outcome: Option<bool>, kind: &'static str) {
        match outcome {
            Some(false) => {
                debug!(kind, "Compared values differ, comparator is now invalid");
                self.valid.set(false);
            }
            Some(true) => trace!(kind, "Compared values are equal"),
            None => trace!(kind, "Both values absent"),
        }
    }
}

fn infallible<T, R>(f: impl FnOnce(T) -> R) -> impl FnOnce(T) -> Result<R, Infallible> {
    move |input| Ok(f(input))
}

fn selector_failed(side: Side, err: impl Into<SelectorError>) -> CompareError {
    CompareError::SelectorEvaluation {
        side,
        source: err.into(),
    }
}
