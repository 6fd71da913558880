//! Vector Codec
//!
//! Converts between the textual vector form understood by pgvector
//! (`"[v0,v1,...,vn-1]"`) and in-memory `f32` slices.
//!
//! Absence is preserved in both directions: `encode(None)` is `None` and
//! `decode(None)` / `decode(Some(""))` is `Ok(None)`, never an empty vector.
//!
//! ## Example
//!
//! ```rust
//! use vsim_domain::codec::{decode, encode};
//!
//! let text = encode(Some(&[1.0, 0.5, 0.2, 0.1])).unwrap();
//! assert_eq!(text, "[1,0.5,0.2,0.1]");
//! assert_eq!(decode(Some(&text)).unwrap(), Some(vec![1.0, 0.5, 0.2, 0.1]));
//! ```

use crate::error::{Error, Result};

const OPEN: char = '[';
const CLOSE: char = ']';
const SEPARATOR: char = ',';

/// Encode a vector as `"[v0,v1,...]"` with full float precision.
///
/// Components use Rust's shortest round-trip formatting, so decoding the
/// output yields bit-identical values for every finite component.
pub fn encode(vector: Option<&[f32]>) -> Option<String> {
    vector.map(|values| {
        let body = values
            .iter()
            .map(f32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{OPEN}{body}{CLOSE}")
    })
}

/// Decode `"[v0, v1, ...]"` into a vector.
///
/// Whitespace around components and around the brackets is ignored. The
/// brackets themselves are optional. A blank component or any component that
/// is not a number fails with [`Error::Parse`].
pub fn decode(text: Option<&str>) -> Result<Option<Vec<f32>>> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let inner = text.strip_prefix(OPEN).unwrap_or(text);
    let inner = inner.strip_suffix(CLOSE).unwrap_or(inner);

    inner
        .split(SEPARATOR)
        .enumerate()
        .map(|(index, segment)| {
            let segment = segment.trim();
            segment.parse::<f32>().map_err(|e| {
                Error::parse(format!(
                    "invalid vector component {index} ('{segment}') in '{text}': {e}"
                ))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Render a vector with one decimal place, for log output only.
pub fn format_rounded(vector: &[f32]) -> String {
    let body = vector
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{OPEN}{body}{CLOSE}")
}
