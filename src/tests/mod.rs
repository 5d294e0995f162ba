//! Unit test layout mirrors the teacher crate's `src/tests/` split: one
//! file per concern, gated behind `#[cfg(test)]` at the `lib.rs` level
//! rather than scattered `#[cfg(test)] mod tests` blocks per file.

mod orchestrator_tests;
mod registry_tests;
mod stages_bom_tests;
mod stages_escape_tests;
mod stages_statistical_tests;
mod streaming_tests;
