//! Fluent equality checks between two values of different types
//!
//! A [`Comparator`] is bound to one value of type `A` and one of type `B`.
//! Callers then declare, one pair at a time, which field of `A` has to equal
//! which field of `B`, and read a single boolean at the end:
//!
//! ```
//! use pc_comparator::Comparator;
//!
//! struct Order { id: u32, items: Vec<String>, note: Option<String> }
//! struct Invoice { order_id: u32, lines: Vec<String>, remark: Option<String> }
//!
//! let order = Order { id: 1, items: vec!["tea".into()], note: None };
//! let invoice = Invoice { order_id: 1, lines: vec!["tea".into()], remark: None };
//!
//! let comparator = Comparator::<Order, Invoice>::with_instances(order, invoice)?;
//! comparator
//!     .compare_present(|o| o.id, |i| i.order_id)?
//!     .compare_present_sequence(|o| &o.items, |i| &i.lines)?
//!     .compare_equal(|o| o.note.as_deref(), |i| i.remark.as_deref())?;
//!
//! assert!(comparator.is_valid()?);
//! # Ok::<(), pc_comparator::CompareError>(())
//! ```
//!
//! Once a comparison finds a difference the comparator stays invalid and later
//! comparisons do not run their selectors.

mod comparator;
mod error;
mod pairing;

pub use comparator::Comparator;
pub use error::{CompareError, CompareResult, SelectorError, Side};
