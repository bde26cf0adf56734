//! Custom serialization functions for request bodies.

use std::fmt::Display;
use serde::Serializer;

/// Serializes a value using its [`Display`] implementation, e.g. a numeric account ID as a
/// decimal string.
pub mod string {
    use super::*;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// Serializes a list as a single comma-joined string.
pub fn comma_separated<T, S>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<str>,
    S: Serializer,
{
    let joined = values.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    serializer.serialize_str(&joined)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Body<'a> {
        #[serde(with = "super::string")]
        account_id: u64,
        #[serde(serialize_with = "super::comma_separated")]
        item_ids: &'a [String],
    }

    #[test]
    fn serializes_request_fields() {
        let item_ids = vec!["11".to_string(), "12".to_string()];
        let body = Body {
            account_id: 42,
            item_ids: &item_ids,
        };

        assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({
            "account_id": "42",
            "item_ids": "11,12",
        }));
    }
}
