//! Workspace-level integration tests for QuickCalc.
//!
//! The tests live in `tests/`; this crate exports nothing.
