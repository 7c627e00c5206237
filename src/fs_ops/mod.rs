//! Filesystem operations: resolve targets, validate the plan, apply it.

mod atomic;
mod execute;
mod helpers;
mod moves;
mod resolve;
#[cfg(unix)]
mod util;
mod validate;

pub use execute::perform;
pub use moves::{Move, MoveSet};
pub use resolve::{resolve, resolve_all};
pub use validate::validate;
