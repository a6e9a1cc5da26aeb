//! Serde adapter for `parent_note_id`
//!
//! Reads `0`, `null` and absent as `None`; writes `None` as `0`.

use super::NoteId;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(parent: &Option<NoteId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(parent.map_or(0, NoteId::value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NoteId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.filter(|&id| id != 0).map(NoteId))
}
