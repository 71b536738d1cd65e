use serde::Serialize;

use crate::error::Result;

/// Renders a value as JSON, pretty-printed unless `compact`.
pub(crate) fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
