use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::database::object_id::ObjectId;
use crate::database::store::StoreError;

/// Opaque comment document. Only `id` is interpreted; every other field is
/// carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Comment {
    pub fn new(id: ObjectId, mut fields: Map<String, Value>) -> Self {
        // `id` is owned by the storage layer, never by the document body
        fields.remove("id");
        Self { id, fields }
    }

    /// Build from a JSON value, which must be an object
    pub fn from_document(id: ObjectId, document: Value) -> Result<Self, StoreError> {
        match document {
            Value::Object(fields) => Ok(Self::new(id, fields)),
            other => Err(StoreError::CorruptDocument {
                id: id.to_hex(),
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Row shape of the `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: String,
    pub document: Json<Value>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = StoreError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let id: ObjectId = row.id.trim().parse().map_err(|_| StoreError::CorruptDocument {
            id: row.id.clone(),
            reason: "stored id is not a valid object id".to_string(),
        })?;
        Comment::from_document(id, row.document.0)
    }
}
