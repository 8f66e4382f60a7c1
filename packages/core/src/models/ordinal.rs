//! Chapter ordinal normalization
//!
//! Chapter numbers (`num_id` on chapters, `chapter` and `next_chapter` on
//! nodes) arrive from the backend as either JSON numbers or JSON strings,
//! depending on how the row was authored. These deserializers parse the value
//! into a strict `i64` exactly once, at the boundary, so the rest of the
//! codebase never compares loosely-typed ordinals.
//!
//! Unparseable values are defaulted in place rather than failing the whole
//! fetch: a required ordinal becomes `0` (which never matches a real 1-based
//! chapter), an optional one becomes `None`.

use serde::{Deserialize, Deserializer};

/// Raw wire shape of an ordinal before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrdinal {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawOrdinal {
    fn normalize(self) -> Option<i64> {
        match self {
            RawOrdinal::Int(n) => Some(n),
            RawOrdinal::Float(f) => Some(f as i64),
            RawOrdinal::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

/// Deserialize a required string-or-number ordinal into `i64`.
///
/// Unparseable values normalize to `0` so a single malformed row cannot fail
/// the whole fetch; chapters are 1-based, so `0` never matches a lookup.
pub(crate) fn de_ordinal<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawOrdinal::deserialize(deserializer)?;
    Ok(raw.normalize().unwrap_or(0))
}

/// Deserialize an optional string-or-number ordinal into `Option<i64>`.
///
/// Absent, null, and unparseable values all normalize to `None`.
pub(crate) fn de_opt_ordinal<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOrdinal>::deserialize(deserializer)?;
    Ok(raw.and_then(RawOrdinal::normalize))
}
