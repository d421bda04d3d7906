//! Encoding and decoding of the text payload printed into chair QR codes.
//!
//! Canonical payloads look like `CHAIRCARE:<id>:<number>`, optionally followed
//! by further `:`-separated segments (bulk-created chairs append a category).
//! Segments are not escaped, so an id or number containing `:` cannot be
//! recovered from the payload. Codes already in the field rely on this exact
//! layout, so it must not change.

use crate::config::{QR_DELIMITER, QR_PREFIX};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Chair lookup key carried by a QR payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChairIdentity {
    pub id: String,
    pub number: String,
}

impl ChairIdentity {
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
        }
    }

    /// Canonical payload for this chair.
    pub fn to_payload(&self) -> String {
        encode(&self.id, &self.number)
    }
}

/// Payload layout that a decode matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayloadFormat {
    /// `CHAIRCARE:<id>:<number>[:...]`
    Canonical,
    /// `{"type":"chair","id":...,"number":...}` from early label printers.
    LegacyJson,
    /// Unrecognized text used verbatim as both id and number.
    Raw,
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Canonical => write!(f, "canonical"),
            PayloadFormat::LegacyJson => write!(f, "legacy-json"),
            PayloadFormat::Raw => write!(f, "raw"),
        }
    }
}

/// Result of decoding a scanned payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedChair {
    #[serde(flatten)]
    pub chair: ChairIdentity,
    pub format: PayloadFormat,
}

impl DecodedChair {
    /// Raw fallbacks only echo the scanned text back; lookups may miss.
    pub fn is_low_confidence(&self) -> bool {
        self.format == PayloadFormat::Raw
    }

    pub fn id(&self) -> &str {
        &self.chair.id
    }

    pub fn number(&self) -> &str {
        &self.chair.number
    }
}

/// Build the canonical payload for a chair.
pub fn encode(chair_id: &str, chair_number: &str) -> String {
    format!("{QR_PREFIX}{chair_id}{QR_DELIMITER}{chair_number}")
}

/// Build a canonical payload with a trailing category segment.
pub fn encode_with_category(chair_id: &str, chair_number: &str, category: &str) -> String {
    format!("{}{QR_DELIMITER}{category}", encode(chair_id, chair_number))
}

/// One way of reading a payload.
struct DecodeStrategy {
    format: PayloadFormat,
    applies: fn(&str) -> bool,
    extract: fn(&str) -> Option<ChairIdentity>,
}

/// Tried in order; the first strategy that applies and extracts wins.
const STRATEGIES: [DecodeStrategy; 3] = [
    DecodeStrategy {
        format: PayloadFormat::Canonical,
        applies: is_canonical,
        extract: extract_canonical,
    },
    DecodeStrategy {
        format: PayloadFormat::LegacyJson,
        applies: |_| true,
        extract: extract_legacy_json,
    },
    DecodeStrategy {
        format: PayloadFormat::Raw,
        applies: |_| true,
        extract: extract_raw,
    },
];

/// Decode scanned text into a chair identity. Never fails.
///
/// A canonical-prefixed payload with fewer than three segments is not
/// partially extracted; it falls through to the raw fallback.
pub fn decode(payload: &str) -> DecodedChair {
    for strategy in &STRATEGIES {
        if !(strategy.applies)(payload) {
            continue;
        }
        if let Some(chair) = (strategy.extract)(payload) {
            tracing::debug!("Decoded QR payload as {}: {:?}", strategy.format, chair);
            return DecodedChair {
                chair,
                format: strategy.format,
            };
        }
    }

    // The raw strategy always extracts.
    DecodedChair {
        chair: ChairIdentity::new(payload, payload),
        format: PayloadFormat::Raw,
    }
}

fn is_canonical(payload: &str) -> bool {
    payload.starts_with(QR_PREFIX)
}

fn extract_canonical(payload: &str) -> Option<ChairIdentity> {
    let parts: Vec<&str> = payload.split(QR_DELIMITER).collect();
    if parts.len() < 3 {
        return None;
    }
    Some(ChairIdentity::new(parts[1], parts[2]))
}

fn extract_legacy_json(payload: &str) -> Option<ChairIdentity> {
    let value: Value = serde_json::from_str(payload).ok()?;
    let object = value.as_object()?;
    if object.get("type").and_then(Value::as_str) != Some("chair") {
        return None;
    }
    let id = truthy_text(object.get("id")?)?;
    let number = truthy_text(object.get("number")?)?;
    Some(ChairIdentity::new(id, number))
}

/// Text of a non-empty string or non-zero number.
///
/// Numbers render the way the label printers wrote them, so an integral
/// float like `42.0` reads as `"42"`. Booleans, objects and arrays are not
/// accepted as ids even though they are truthy; such payloads fall through
/// to the raw fallback.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64()
                    .filter(|f| *f != 0.0 && f.is_finite())
                    .map(|f| f.to_string())
            }
        }
        _ => None,
    }
}

fn extract_raw(payload: &str) -> Option<ChairIdentity> {
    Some(ChairIdentity::new(payload, payload))
}
