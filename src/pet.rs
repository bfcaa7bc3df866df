//! Pet records as they appear in the catalog dataset.

use crate::numeric::{parse_leading_int, StatValue};
use crate::source::StatSource;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between series labels in `Pet::series`.
pub const SERIES_SEPARATOR: char = '|';

/// One pet from the dataset.
///
/// The six attributes use the dataset's field names (`jingli`, `gongji`,
/// ...). Identifiers may be given as strings or numbers. Fields the
/// calculator does not need are optional.
///
/// # Examples
///
/// ```rust
/// use petstat::{Pet, StatKind, StatSource};
///
/// let pet: Pet = serde_json::from_str(r#"{
///     "id": "12", "markno": "012", "name": "Spark",
///     "jingli": 80, "gongji": 95, "fangyu": 70,
///     "mougong": 60, "moufang": 65, "sudu": 110,
///     "series": "Electric|Light"
/// }"#).unwrap();
///
/// assert_eq!(pet.base_value(StatKind::Speed), 110);
/// assert_eq!(pet.series_list(), vec!["Electric", "Light"]);
/// assert_eq!(pet.mark_number(), Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPet")]
pub struct Pet {
    pub id: String,
    pub markno: String,
    pub name: String,
    pub name2: Option<String>,
    #[serde(rename = "jingli")]
    pub vitality: StatValue,
    #[serde(rename = "gongji")]
    pub physical_attack: StatValue,
    #[serde(rename = "fangyu")]
    pub physical_defense: StatValue,
    #[serde(rename = "mougong")]
    pub special_attack: StatValue,
    #[serde(rename = "moufang")]
    pub special_defense: StatValue,
    #[serde(rename = "sudu")]
    pub speed: StatValue,
    pub img: String,
    pub title: Option<String>,
    pub series: String,
}

/// Unchecked dataset form of `Pet`; converting range-checks each attribute.
#[derive(Deserialize)]
struct RawPet {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    markno: String,
    name: String,
    #[serde(default)]
    name2: Option<String>,
    jingli: i64,
    gongji: i64,
    fangyu: i64,
    mougong: i64,
    moufang: i64,
    sudu: i64,
    #[serde(default)]
    img: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    series: String,
}

impl TryFrom<RawPet> for Pet {
    type Error = String;

    fn try_from(raw: RawPet) -> Result<Self, Self::Error> {
        Ok(Self {
            vitality: stat_field(StatKind::Vitality, raw.jingli)?,
            physical_attack: stat_field(StatKind::PhysicalAttack, raw.gongji)?,
            physical_defense: stat_field(StatKind::PhysicalDefense, raw.fangyu)?,
            special_attack: stat_field(StatKind::SpecialAttack, raw.mougong)?,
            special_defense: stat_field(StatKind::SpecialDefense, raw.moufang)?,
            speed: stat_field(StatKind::Speed, raw.sudu)?,
            id: raw.id,
            markno: raw.markno,
            name: raw.name,
            name2: raw.name2,
            img: raw.img,
            title: raw.title,
            series: raw.series,
        })
    }
}

fn stat_field(kind: StatKind, value: i64) -> Result<StatValue, String> {
    StatValue::try_from(value).map_err(|_| {
        format!(
            "field `{}` must be a non-negative integer, found {value}",
            kind.dataset_key()
        )
    })
}

impl Pet {
    /// Series labels, skipping empty parts.
    pub fn series_list(&self) -> Vec<&str> {
        self.series
            .split(SERIES_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The catalog number parsed from `markno`, if it starts with digits.
    pub fn mark_number(&self) -> Option<i64> {
        parse_leading_int(&self.markno)
    }

    pub fn stat(&self, kind: StatKind) -> StatValue {
        self.base_value(kind)
    }
}

impl StatSource for Pet {
    fn base_value(&self, kind: StatKind) -> StatValue {
        match kind {
            StatKind::Vitality => self.vitality,
            StatKind::PhysicalAttack => self.physical_attack,
            StatKind::PhysicalDefense => self.physical_defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}
