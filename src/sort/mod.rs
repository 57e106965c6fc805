//! Comparison sorts, one module per algorithm. All operate in place on a
//! mutable slice; `merge`, `quick` and `evil` additionally need `Clone`
//! for the element temporaries they take.

pub mod bogo;
pub mod bubble;
pub mod evil;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

pub use bogo::bogo;
pub use bubble::bubble;
pub use evil::evil;
pub use heap::heap;
pub use insertion::insertion;
pub use merge::merge;
pub use quick::quick;
pub use selection::selection;
pub use shell::{shell, shell_with_gap};

pub(crate) fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
