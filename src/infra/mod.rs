//! Low-level building blocks shared by the protocol layer.
pub mod bits;
