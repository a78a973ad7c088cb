//! Error types for legacy-configuration handling.

use thiserror::Error;

/// Fatal signal that the configuration uses a retired syntax or schema.
///
/// This error is aimed at a human operator rather than at calling code: it is
/// never retried and cannot be recovered from programmatically. The
/// configuration file has to be edited by hand before the application will
/// start.
#[derive(Debug, Error)]
pub enum DeprecationError {
    /// A duration was written as a code-like expression such as `"3.minutes"`.
    #[error(
        "'{value}' is a legacy duration expression and is no longer evaluated; \
         replace it with the number of minutes as a plain integer"
    )]
    LegacyDurationExpression {
        /// The offending configuration value, verbatim.
        value: String,
    },
    /// A registry setting still lives in its own top-level tagged mapping.
    #[error(
        "'{setting}' is stored as a top-level mapping with a 'value' field; \
         move it under the 'registry' section as a plain value"
    )]
    LegacyRegistryLayout {
        /// Name of the setting that must be relocated.
        setting: String,
    },
}

/// Convenience alias for migration results.
pub type MigrateResult<T> = Result<T, DeprecationError>;
