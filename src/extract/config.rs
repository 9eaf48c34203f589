//! Configuration used by [`BundleExtractor`](super::BundleExtractor).

use std::num::NonZeroUsize;

/// How strictly a selected attempt is checked before concatenation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept whatever fragments the attempt resolution selected.
    ///
    /// Gaps, duplicates, or missing fragments yield a best-effort
    /// concatenation; a corrupt result only fails when it is parsed. Defects
    /// are logged at `warn` level.
    #[default]
    Lenient,
    /// Reject attempts that do not hold exactly `last_index + 1` fragments
    /// covering every index once under a single timestamp.
    Strict,
}

/// Settings that govern extraction of logical messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractionConfig {
    /// Structural checks applied to each selected attempt.
    pub validation: ValidationMode,
    /// Optional cap on a group's concatenated, still-escaped payload length
    /// in bytes. `None` leaves payloads unbounded.
    pub max_message_len: Option<NonZeroUsize>,
}

impl ExtractionConfig {
    /// Default settings: lenient validation, no size cap.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            max_message_len: None,
        }
    }

    /// Strict validation, no size cap.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            max_message_len: None,
        }
    }

    /// Return a copy with the payload cap set to `limit` bytes.
    #[must_use]
    pub const fn with_max_message_len(self, limit: NonZeroUsize) -> Self {
        Self {
            max_message_len: Some(limit),
            ..self
        }
    }
}
