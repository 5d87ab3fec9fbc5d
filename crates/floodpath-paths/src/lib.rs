//! **floodpath-paths** — the algorithms behind the visualizer.
//!
//! - [`FloodFill`] labels every cell of a [`floodpath_core::Field`] with its
//!   breadth-first hop distance from the start cell.
//! - [`reconstruct`] walks the labelled field from the target back toward
//!   the start, producing the displayed path.
//! - [`manhattan`] / [`sqr_euclidean`] are the distance helpers the two use.
//!
//! Both operations are synchronous and single-threaded; the flood-fill
//! engine reuses its worklist across invocations so steady-state
//! recomputation does not allocate.

mod backtrack;
mod distance;
mod flood;

pub use backtrack::reconstruct;
pub use distance::{manhattan, sqr_euclidean};
pub use flood::FloodFill;
