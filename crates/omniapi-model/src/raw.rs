//! Raw JSON containers backing every model and params type.
//!
//! A container is built through [`RawBuilder`] (mutable phase) and then frozen
//! into [`RawData`] (read-only phase). There is no write API on `RawData`, so a
//! frozen container cannot be mutated after the fact.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{InvalidDataError, ModelResult};

pub type RawMap = Map<String, Value>;

/// Frozen key/value JSON map. Cloning shares the underlying map.
#[derive(Clone, Default, PartialEq)]
pub struct RawData(Arc<RawMap>);

impl RawData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already frozen; kept so callers can be explicit about the phase.
    pub fn freeze(self) -> Self {
        self
    }

    /// Optional read: absent and JSON `null` both read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> ModelResult<Option<T>> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|err| InvalidDataError::shape(key, err)),
        }
    }

    pub fn get_required<T: DeserializeOwned>(&self, key: &str) -> ModelResult<T> {
        self.get(key)?
            .ok_or_else(|| InvalidDataError::missing_field(key))
    }

    pub fn raw_value(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &RawMap {
        &self.0
    }

    /// Deep copy into a fresh mutable builder.
    pub fn to_builder(&self) -> RawBuilder {
        RawBuilder::from(self.0.as_ref().clone())
    }

    pub fn to_wire_value(&self) -> Value {
        Value::Object(self.0.as_ref().clone())
    }
}

impl From<RawMap> for RawData {
    fn from(map: RawMap) -> Self {
        Self(Arc::new(map))
    }
}

impl fmt::Debug for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self.0.as_ref()) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Serialize for RawData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawMap::deserialize(deserializer).map(Self::from)
    }
}

/// Mutable container used while a model or params value is being built.
#[derive(Debug, Clone, Default)]
pub struct RawBuilder {
    map: RawMap,
    error: Option<InvalidDataError>,
}

impl RawBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` leaves the key untouched; it never writes a JSON `null`.
    pub fn set<T: Serialize>(&mut self, key: &str, value: Option<T>) {
        let Some(value) = value else {
            return;
        };
        match serde_json::to_value(value) {
            Ok(value) => {
                self.map.insert(key.to_string(), value);
            }
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(InvalidDataError::serialize(key, err));
                }
            }
        }
    }

    /// Writes a JSON value verbatim, including an explicit `null`.
    pub fn set_raw(&mut self, key: impl Into<String>, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Ends the mutable phase. Fails with the first serialization error
    /// recorded by [`RawBuilder::set`].
    pub fn freeze(self) -> ModelResult<RawData> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RawData::from(self.map)),
        }
    }
}

impl From<RawMap> for RawBuilder {
    fn from(map: RawMap) -> Self {
        Self { map, error: None }
    }
}
