//! Runtime backends for tensor computation
//!
//! numpoly ships a single host backend. The polynomial algorithms are written
//! against the operation traits in [`crate::ops`], so the backend is the only
//! place that knows how elements are laid out and iterated.

pub mod cpu;
