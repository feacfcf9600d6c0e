//! UI widgets - self-contained panels that report interactions back to the
//! app as action values instead of mutating shared state.

pub mod career;
pub mod roster;
