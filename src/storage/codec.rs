//! JSON record format for the persisted list.
//!
//! ```json
//! [{"id": 1718000000000, "text": "Buy milk", "completed": false}]
//! ```
//!
//! Ids may be integers or strings and are written back in the form they
//! were read; unknown fields are ignored (forward compat). Any bad record
//! rejects the whole set.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::DecodeError;
use crate::model::{Item, ItemId, TodoList};

#[derive(Deserialize)]
struct RawRecord {
    id: ItemId,
    text: String,
    completed: bool,
}

/// Serialize the full list as a JSON record array.
pub fn encode(list: &TodoList) -> Result<String, serde_json::Error> {
    serde_json::to_string(list.items())
}

/// Parse a persisted record array.
pub fn decode(raw: &str) -> Result<TodoList, DecodeError> {
    let records: Vec<RawRecord> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut items = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = record.id;
        if matches!(&id, ItemId::Text(s) if s.trim().is_empty()) {
            return Err(DecodeError::InvalidId {
                index,
                value: id.to_string(),
            });
        }
        if !seen.insert(id.clone()) {
            return Err(DecodeError::DuplicateId { id });
        }
        if record.text.trim().is_empty() {
            return Err(DecodeError::EmptyText { index });
        }
        items.push(Item {
            id,
            text: record.text,
            completed: record.completed,
        });
    }

    Ok(TodoList::from(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        let mut done = Item::new(ItemId::new(2), "Walk dog");
        done.completed = true;
        TodoList::from(vec![Item::new(ItemId::new(1), "Buy milk"), done])
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let list = sample();
        let raw = encode(&list).unwrap();
        assert_eq!(decode(&raw).unwrap(), list);
    }

    #[test]
    fn encode_uses_plain_record_fields() {
        let raw = encode(&sample()).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"text":"Buy milk","completed":false},{"id":2,"text":"Walk dog","completed":true}]"#
        );
    }

    #[test]
    fn decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn decode_keeps_string_ids_as_written() {
        let list = decode(r#"[{"id":"17","text":"a","completed":false}]"#).unwrap();
        assert_eq!(list.items()[0].id, ItemId::from("17"));
    }

    #[test]
    fn opaque_string_ids_round_trip() {
        let raw = r#"[{"id":"3f2a-uuid","text":"Keep me","completed":false},{"id":7,"text":"b","completed":true}]"#;
        let list = decode(raw).unwrap();
        assert_eq!(list.items()[0].id, ItemId::from("3f2a-uuid"));
        assert_eq!(list.items()[1].id, ItemId::new(7));
        assert_eq!(encode(&list).unwrap(), raw);
    }

    #[test]
    fn number_and_string_with_same_digits_are_distinct() {
        let raw = r#"[{"id":1,"text":"a","completed":false},{"id":"1","text":"b","completed":false}]"#;
        assert_eq!(decode(raw).unwrap().len(), 2);
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let list =
            decode(r#"[{"id":1,"text":"a","completed":true,"priority":"high"}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.items()[0].completed);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("{not json"), Err(DecodeError::Json(_))));
        assert!(matches!(decode(r#"{"id":1}"#), Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_rejects_missing_field() {
        let err = decode(r#"[{"id":1,"text":"a"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn decode_rejects_wrong_field_type() {
        let err = decode(r#"[{"id":1,"text":"a","completed":"yes"}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn decode_rejects_id_that_is_neither_integer_nor_string() {
        for id in ["-1", "1.5", "true", "null", "[1]"] {
            let raw = format!(r#"[{{"id":{id},"text":"a","completed":false}}]"#);
            assert!(matches!(decode(&raw), Err(DecodeError::Json(_))), "{id}");
        }
    }

    #[test]
    fn decode_rejects_blank_string_id() {
        let err = decode(r#"[{"id":" ","text":"a","completed":false}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidId { index: 0, .. }));
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let raw = r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":false}]"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateId { id } if id == ItemId::new(1)));

        let raw = r#"[{"id":"x","text":"a","completed":false},{"id":"x","text":"b","completed":false}]"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateId { id } if id == ItemId::from("x")));
    }

    #[test]
    fn decode_rejects_blank_text() {
        let raw = r#"[{"id":1,"text":"ok","completed":false},{"id":2,"text":"  ","completed":false}]"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyText { index: 1 }));
    }
}
