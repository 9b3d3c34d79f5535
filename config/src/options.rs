//! Process-wide option flags.
//!
//! `enable_schema` is the preferred switch for interpreting two-part
//! identifiers as `schema.object`; `always_enable_schema` is the legacy
//! alias kept for older deployments and carries lower precedence. Both are
//! plain atomics with last-write-wins semantics; readers must tolerate
//! concurrent writers.

use std::sync::atomic::{AtomicBool, Ordering};

static ENABLE_SCHEMA: AtomicBool = AtomicBool::new(false);
static ALWAYS_ENABLE_SCHEMA: AtomicBool = AtomicBool::new(false);

pub fn enable_schema() -> bool {
    ENABLE_SCHEMA.load(Ordering::Relaxed)
}

pub fn set_enable_schema(value: bool) {
    ENABLE_SCHEMA.store(value, Ordering::Relaxed);
}

pub fn always_enable_schema() -> bool {
    ALWAYS_ENABLE_SCHEMA.load(Ordering::Relaxed)
}

pub fn set_always_enable_schema(value: bool) {
    ALWAYS_ENABLE_SCHEMA.store(value, Ordering::Relaxed);
}

/// One-shot read of both flags, taken at the boundary before resolution so
/// the resolver never touches global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsSnapshot {
    pub enable_schema: bool,
    pub always_enable_schema: bool,
}

impl OptionsSnapshot {
    pub fn read() -> Self {
        Self {
            enable_schema: enable_schema(),
            always_enable_schema: always_enable_schema(),
        }
    }
}
