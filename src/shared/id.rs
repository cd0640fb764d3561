//! Identifier generation for persisted rows.
//!
//! Ids are opaque strings of the form `<prefix>-<suffix>`, e.g. `thread-3f9a...`.

use uuid::Uuid;

/// Source of unique id suffixes.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh suffix.
    fn generate(&self) -> String;

    /// Produce a full id with the given prefix.
    fn prefixed(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.generate())
    }
}

/// Random UUID v4 suffixes in simple (dash-free) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
