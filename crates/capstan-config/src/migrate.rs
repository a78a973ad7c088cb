//! Migration helpers for configuration values written for previous releases.
//!
//! # Design
//! - Normalize what is still representable: plain minute counts in either
//!   integer or string form, and registry settings already living under the
//!   `registry` section.
//! - Refuse the constructs that used to be evaluated as code or carried
//!   per-setting metadata with a [`DeprecationError`] instead of silently
//!   reinterpreting them.
//! - Stay lenient everywhere else: unknown or absent input degrades to the
//!   caller's default, never to an error.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::error::{DeprecationError, MigrateResult};

/// Default JWT token expiration window, in minutes.
pub const DEFAULT_JWT_EXPIRATION_MINUTES: u64 = 5;

/// Registry setting holding the JWT token expiration window.
const JWT_EXPIRATION_SETTING: &str = "jwt_expiration_time";

/// Anchored shape of the retired duration syntax (`"3.minutes"`,
/// `"30.seconds"`). The match is purely textual; the expression is never
/// evaluated.
static LEGACY_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.(?:minutes?|seconds?)$").expect("legacy duration pattern is valid")
});

const SECONDS_PER_MINUTE: u64 = 60;

const fn minutes(count: u64) -> Duration {
    Duration::from_secs(count.saturating_mul(SECONDS_PER_MINUTE))
}

/// Normalize a humanized time value into a canonical duration of whole
/// minutes.
///
/// Integers and strings that parse entirely as an integer are taken as a
/// minute count. Any other value falls back to `default_minutes`; unknown
/// input is treated as unset rather than as a configuration error.
///
/// # Errors
///
/// Returns [`DeprecationError::LegacyDurationExpression`] when the value is a
/// string in the retired `"<number>.minutes"`/`"<number>.seconds"` syntax,
/// which used to be evaluated as code and would silently change meaning if
/// reinterpreted here.
pub fn normalize_duration(value: &Value, default_minutes: u64) -> MigrateResult<Duration> {
    match value {
        Value::Number(count) => {
            if let Some(count) = count.as_u64() {
                return Ok(minutes(count));
            }
            Ok(unrecognized(value, default_minutes))
        }
        Value::String(text) => {
            if let Ok(count) = text.parse::<u64>() {
                return Ok(minutes(count));
            }
            if LEGACY_EXPRESSION.is_match(text) {
                return Err(DeprecationError::LegacyDurationExpression {
                    value: text.clone(),
                });
            }
            Ok(unrecognized(value, default_minutes))
        }
        _ => Ok(unrecognized(value, default_minutes)),
    }
}

fn unrecognized(value: &Value, default_minutes: u64) -> Duration {
    warn!(
        %value,
        default_minutes,
        "unrecognized duration value, falling back to the default"
    );
    minutes(default_minutes)
}

/// Resolve a registry setting from a configuration tree, preferring the
/// current schema.
///
/// The current schema stores settings flat under the `registry` mapping; the
/// retired schema stored each setting as its own top-level mapping tagged
/// with a `value` field. A `null` under `registry` counts as absent and
/// falls through to the legacy check. Absence in both locations is `Ok(None)`
/// rather than an error; defaults belong to the caller.
///
/// # Errors
///
/// Returns [`DeprecationError::LegacyRegistryLayout`] when the setting is
/// only present in the retired top-level shape with a usable `value` field.
pub fn resolve_registry_setting<'a>(
    config: &'a Value,
    setting: &str,
) -> MigrateResult<Option<&'a Value>> {
    let current = config
        .get("registry")
        .and_then(|registry| registry.get(setting))
        .filter(|value| !value.is_null());
    if let Some(value) = current {
        return Ok(Some(value));
    }

    let legacy = config
        .get(setting)
        .and_then(Value::as_object)
        .and_then(|mapping| mapping.get("value"))
        .filter(|value| !value.is_null());
    if legacy.is_some() {
        return Err(DeprecationError::LegacyRegistryLayout {
            setting: setting.to_string(),
        });
    }

    Ok(None)
}

/// Resolve the JWT token expiration window, defaulting to
/// [`DEFAULT_JWT_EXPIRATION_MINUTES`] when the setting is absent.
///
/// # Errors
///
/// Propagates the [`DeprecationError`] from either the schema lookup or the
/// duration normalization.
pub fn jwt_expiration(config: &Value) -> MigrateResult<Duration> {
    resolve_registry_setting(config, JWT_EXPIRATION_SETTING)?.map_or_else(
        || Ok(minutes(DEFAULT_JWT_EXPIRATION_MINUTES)),
        |value| normalize_duration(value, DEFAULT_JWT_EXPIRATION_MINUTES),
    )
}
