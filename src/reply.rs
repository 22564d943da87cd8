//! Decoding of actor replies.
//!
//! The backend's profile methods reply with candid `opt` values, which the JS
//! agent surfaces as `null` / `[]` / singleton arrays, and with sentinel status
//! strings. The bridge stringifies replies to JSON and the rules live here so
//! they stay testable on the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CallError;

/// One key/value entry of the caller's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub key: String,
    pub value: String,
}

/// What a profile mutation reported back.
///
/// The backend signals these as sentinel strings rather than variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Applied,
    AlreadyExists,
    NotFound,
}

impl ReplyStatus {
    pub fn parse(raw: &str) -> Result<Self, CallError> {
        match raw.trim() {
            "Ok" | "Ok." => Ok(ReplyStatus::Applied),
            "Data already exists." => Ok(ReplyStatus::AlreadyExists),
            "No matching element" => Ok(ReplyStatus::NotFound),
            other => Err(CallError::MalformedReply(format!(
                "unknown status reply: {other:?}"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReplyStatus::Applied => "done",
            ReplyStatus::AlreadyExists => "key already exists",
            ReplyStatus::NotFound => "no matching entry",
        }
    }
}

/// Decode a record list reply. Accepts `null`, a flat record array, or the
/// opt-wrapped `[[...]]` form.
pub fn parse_records(json: &str) -> Result<Vec<ProfileRecord>, CallError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CallError::MalformedReply(format!("record list is not JSON: {e}")))?;
    records_from_value(value)
}

fn records_from_value(value: Value) -> Result<Vec<ProfileRecord>, CallError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(mut items) => {
            // `opt vec` arrives as `[]` (none) or `[[ ...records ]]` (some).
            if items.len() == 1 && items[0].is_array() {
                return records_from_value(items.remove(0));
            }
            items
                .into_iter()
                .map(|item| {
                    serde_json::from_value::<ProfileRecord>(item)
                        .map_err(|e| CallError::MalformedReply(format!("bad record: {e}")))
                })
                .collect()
        }
        other => Err(CallError::MalformedReply(format!(
            "expected a record list, got {other}"
        ))),
    }
}

/// Unwrap an `opt text` reply (`null`, a bare string, `[]`, or `["..."]`).
pub fn parse_opt_string(json: &str) -> Result<Option<String>, CallError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CallError::MalformedReply(format!("reply is not JSON: {e}")))?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Array(mut items) => match items.len() {
            0 => Ok(None),
            1 => match items.remove(0) {
                Value::String(s) => Ok(Some(s)),
                other => Err(CallError::MalformedReply(format!(
                    "expected optional text, got [{other}]"
                ))),
            },
            n => Err(CallError::MalformedReply(format!(
                "expected optional text, got {n} elements"
            ))),
        },
        other => Err(CallError::MalformedReply(format!(
            "expected optional text, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, value: &str) -> ProfileRecord {
        ProfileRecord {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn status_sentinels_parse() {
        assert_eq!(ReplyStatus::parse("Ok").unwrap(), ReplyStatus::Applied);
        assert_eq!(ReplyStatus::parse("Ok.").unwrap(), ReplyStatus::Applied);
        assert_eq!(
            ReplyStatus::parse("Data already exists.").unwrap(),
            ReplyStatus::AlreadyExists
        );
        assert_eq!(
            ReplyStatus::parse("No matching element").unwrap(),
            ReplyStatus::NotFound
        );
    }

    #[test]
    fn unknown_status_is_malformed() {
        let err = ReplyStatus::parse("Something else").unwrap_err();
        assert!(matches!(err, CallError::MalformedReply(_)));
    }

    #[test]
    fn absent_record_lists_decode_as_empty() {
        assert_eq!(parse_records("null").unwrap(), Vec::new());
        assert_eq!(parse_records("[]").unwrap(), Vec::new());
        assert_eq!(parse_records("[[]]").unwrap(), Vec::new());
    }

    #[test]
    fn flat_record_lists_decode() {
        let got = parse_records(r#"[{"key":"bio","value":"systems"}]"#).unwrap();
        assert_eq!(got, vec![record("bio", "systems")]);
    }

    #[test]
    fn opt_wrapped_record_lists_decode() {
        let got = parse_records(
            r#"[[{"key":"bio","value":"systems"},{"key":"city","value":"Turin"}]]"#,
        )
        .unwrap();
        assert_eq!(got, vec![record("bio", "systems"), record("city", "Turin")]);
    }

    #[test]
    fn non_record_payloads_are_malformed() {
        assert!(matches!(
            parse_records("not json"),
            Err(CallError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_records("42"),
            Err(CallError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_records(r#"[{"key":"bio"}]"#),
            Err(CallError::MalformedReply(_))
        ));
    }

    #[test]
    fn opt_text_unwraps() {
        assert_eq!(parse_opt_string("null").unwrap(), None);
        assert_eq!(parse_opt_string("[]").unwrap(), None);
        assert_eq!(
            parse_opt_string(r#""w7x..aaa""#).unwrap().as_deref(),
            Some("w7x..aaa")
        );
        assert_eq!(
            parse_opt_string(r#"["Ok."]"#).unwrap().as_deref(),
            Some("Ok.")
        );
    }

    #[test]
    fn non_text_opt_is_malformed() {
        assert!(matches!(
            parse_opt_string("[1]"),
            Err(CallError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_opt_string(r#"["a","b"]"#),
            Err(CallError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_opt_string("{}"),
            Err(CallError::MalformedReply(_))
        ));
    }
}
