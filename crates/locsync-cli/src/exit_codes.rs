//! Exit codes for the `locsync` binary.
//!
//! Deterministic codes so scripts and CI hooks can branch on the outcome:
//!
//! - **0**: every candidate has every reference key, or everything missing
//!   was patched and previewed under `--fix`
//! - **1**: missing keys found and not patched
//! - **2**: parse or IO failure (unusable reference, or any skipped
//!   candidate)

/// Nothing missing, or all missing keys were patched.
pub const CLEAN: u8 = 0;

/// Missing keys were reported but not patched.
pub const MISSING_KEYS: u8 = 1;

/// Parse or IO failure somewhere in the run.
pub const FAILURE: u8 = 2;
