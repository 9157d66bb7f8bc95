//! Null-pairing and ordered sequence equality

/// How two possibly-absent values line up against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pairing<T> {
    /// Neither side produced a value; treated as trivially equal
    BothAbsent,
    /// Exactly one side produced a value; always unequal
    OneAbsent,
    /// Both sides produced a value and must be compared
    BothPresent(T, T),
}

impl<T> Pairing<T> {
    pub(crate) fn of(first: Option<T>, second: Option<T>) -> Self {
        match (first, second) {
            (None, None) => Pairing::BothAbsent,
            (Some(a), Some(b)) => Pairing::BothPresent(a, b),
            _ => Pairing::OneAbsent,
        }
    }

    /// Apply `eq` to a present pair; `None` when the pair leaves validity untouched
    pub(crate) fn resolve(self, eq: impl FnOnce(T, T) -> bool) -> Option<bool> {
        match self {
            Pairing::BothAbsent => None,
            Pairing::OneAbsent => Some(false),
            Pairing::BothPresent(a, b) => Some(eq(a, b)),
        }
    }
}

/// Ordered equality: same length and equal at every index
///
/// Stops at the first differing index.
pub(crate) fn sequences_equal<V: PartialEq>(first: &[V], second: &[V]) -> bool {
    if first.len() != second.len() {
        return false;
    }
    first.iter().zip(second).all(|(a, b)| a == b)
}
