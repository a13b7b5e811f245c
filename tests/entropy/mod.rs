//! Byte-entropy histogram behaviour through the public API.

mod budgets;
mod determinism;
mod properties;
