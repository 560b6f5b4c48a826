use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of an object identifier once hex encoded
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// 12-byte storage-assigned identifier, rendered as 24 lower-case hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid object id: {0:?}")]
pub struct InvalidObjectId(pub String);

impl ObjectId {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Format check only; says nothing about whether a record exists
    pub fn is_valid(candidate: &str) -> bool {
        candidate.parse::<ObjectId>().is_ok()
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != OBJECT_ID_HEX_LEN {
            return Err(InvalidObjectId(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidObjectId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hex_characters() {
        assert!(ObjectId::is_valid("507f1f77bcf86cd799439011"));
        assert!(ObjectId::is_valid("507F191E810C19729DE860EA"));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!ObjectId::is_valid("bad-id"));
        assert!(!ObjectId::is_valid(""));
        assert!(!ObjectId::is_valid("507f1f77bcf86cd79943901"));
        assert!(!ObjectId::is_valid("507f1f77bcf86cd7994390111"));
        assert!(!ObjectId::is_valid("507f1f77bcf86cd79943901g"));
        // 12 arbitrary characters are not an id here
        assert!(!ObjectId::is_valid("aaaaaaaaaaaa"));
        // multi-byte characters must not slip through the length check
        assert!(!ObjectId::is_valid("éééééééééééé"));
    }

    #[test]
    fn renders_lower_case() {
        let id: ObjectId = "507F191E810C19729DE860EA".parse().unwrap();
        assert_eq!(id.to_string(), "507f191e810c19729de860ea");
    }

    #[test]
    fn serializes_as_hex_string() {
        let id: ObjectId = "507f1f77bcf86cd799439011".parse().unwrap();
        let value = serde_json::to_value(id).unwrap();
        assert_eq!(value, serde_json::json!("507f1f77bcf86cd799439011"));

        let back: ObjectId = serde_json::from_value(value).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_value::<ObjectId>(serde_json::json!("nope")).is_err());
    }
}
