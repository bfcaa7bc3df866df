//! The pet catalog.
//!
//! Loads the externally supplied dataset and answers the queries the
//! table needs: lookup, distinct series, and filtering in catalog order.

use crate::error::StatError;
use crate::filter::FilterState;
use crate::pet::Pet;
use serde_json::Value;
use std::collections::BTreeSet;
use std::io::Read;

/// An ordered collection of pets.
///
/// # Examples
///
/// ```rust
/// use petstat::{FilterState, PetCatalog};
///
/// let catalog = PetCatalog::from_json_str(r#"[
///     {"id": "1", "markno": "1", "name": "Ember", "series": "Fire",
///      "jingli": 60, "gongji": 80, "fangyu": 50, "mougong": 70, "moufang": 50, "sudu": 90},
///     {"id": "2", "markno": "2", "name": "Drip", "series": "Water|Ice",
///      "jingli": 70, "gongji": 50, "fangyu": 70, "mougong": 80, "moufang": 70, "sudu": 60}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.unique_series(), vec!["Fire", "Ice", "Water"]);
///
/// let mut filter = FilterState::default();
/// filter.toggle_series("Ice", true);
/// assert_eq!(catalog.filter(&filter).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetCatalog {
    pets: Vec<Pet>,
}

impl PetCatalog {
    pub fn new(pets: Vec<Pet>) -> Self {
        Self { pets }
    }

    /// Parse a JSON dataset (array or id-keyed object; object order is kept).
    ///
    /// A bad record fails the whole load, and the error names the record
    /// (`#index` or object key) along with serde's message.
    pub fn from_json_str(json: &str) -> Result<Self, StatError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, StatError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Build from an already parsed dataset value.
    pub fn from_value(dataset: Value) -> Result<Self, StatError> {
        let pets = match dataset {
            Value::Array(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| parse_pet(entry, &format!("#{index}")))
                .collect::<Result<Vec<Pet>, _>>()?,
            Value::Object(map) => map
                .into_iter()
                .map(|(key, entry)| parse_pet(entry, &format!("{key:?}")))
                .collect::<Result<Vec<Pet>, _>>()?,
            other => {
                return Err(StatError::Dataset(format!(
                    "expected an array or an object of pets, found {}",
                    value_kind(&other)
                )))
            }
        };
        tracing::info!(pets = pets.len(), "loaded pet catalog");
        Ok(Self { pets })
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pet> {
        self.pets.iter()
    }

    /// Every distinct series label, sorted.
    pub fn unique_series(&self) -> Vec<&str> {
        self.pets
            .iter()
            .flat_map(Pet::series_list)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Pets passing `filter`, in catalog order.
    pub fn filter(&self, filter: &FilterState) -> Vec<&Pet> {
        let matched: Vec<&Pet> = self.pets.iter().filter(|pet| filter.matches(pet)).collect();
        tracing::debug!(
            matched = matched.len(),
            total = self.pets.len(),
            "filtered pet catalog"
        );
        matched
    }
}

fn parse_pet(entry: Value, position: &str) -> Result<Pet, StatError> {
    serde_json::from_value(entry)
        .map_err(|e| StatError::Dataset(format!("pet {position}: {e}")))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYED: &str = r#"{
        "b": {"id": "b", "markno": "2", "name": "Second", "series": "Water",
              "jingli": 1, "gongji": 1, "fangyu": 1, "mougong": 1, "moufang": 1, "sudu": 1},
        "a": {"id": "a", "markno": "1", "name": "First", "series": "Fire|Water",
              "jingli": 2, "gongji": 2, "fangyu": 2, "mougong": 2, "moufang": 2, "sudu": 2}
    }"#;

    #[test]
    fn test_keyed_dataset_keeps_order() {
        let catalog = PetCatalog::from_json_str(KEYED).unwrap();
        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_get_and_series() {
        let catalog = PetCatalog::from_json_str(KEYED).unwrap();
        assert_eq!(catalog.get("a").map(|p| p.name.as_str()), Some("First"));
        assert!(catalog.get("zzz").is_none());
        assert_eq!(catalog.unique_series(), vec!["Fire", "Water"]);
    }

    #[test]
    fn test_malformed_dataset() {
        let err = PetCatalog::from_json_str("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, StatError::Dataset(_)));
        assert!(PetCatalog::from_json_str("42").is_err());
    }

    #[test]
    fn test_bad_record_error_names_entry_and_field() {
        let json = r#"[
            {"id": "1", "markno": "1", "name": "Fine",
             "jingli": 1, "gongji": 1, "fangyu": 1, "mougong": 1, "moufang": 1, "sudu": 1},
            {"id": "2", "markno": "2", "name": "Broken",
             "jingli": 1, "gongji": 1, "fangyu": 1, "mougong": 1, "moufang": 1, "sudu": -5}
        ]"#;
        let message = match PetCatalog::from_json_str(json) {
            Err(StatError::Dataset(message)) => message,
            other => panic!("expected a dataset error, got {other:?}"),
        };
        assert!(message.contains("pet #1"), "{message}");
        assert!(message.contains("`sudu`"), "{message}");
        assert!(!message.contains("untagged"), "{message}");
    }

    #[test]
    fn test_bad_keyed_record_names_key() {
        let json = r#"{"x9": {"id": "x9", "markno": "9",
                              "jingli": 1, "gongji": 1, "fangyu": 1, "mougong": 1, "moufang": 1, "sudu": 1}}"#;
        let err = PetCatalog::from_json_str(json).unwrap_err().to_string();
        assert!(err.contains("pet \"x9\""), "{err}");
        assert!(err.contains("missing field `name`"), "{err}");
    }

    #[test]
    fn test_scalar_dataset_rejected() {
        let err = PetCatalog::from_json_str("42").unwrap_err();
        assert_eq!(
            err,
            StatError::Dataset("expected an array or an object of pets, found a number".to_string())
        );
    }

    #[test]
    fn test_from_reader() {
        let catalog = PetCatalog::from_reader(KEYED.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}
