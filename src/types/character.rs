//! Character records as stored in the catalog

use serde::{Deserialize, Serialize};

/// A field that the catalog stores either as a single string or as a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::One(value.to_string())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Many(values.into_iter().map(String::from).collect())
    }
}

/// One playable character
///
/// Every attribute is optional. Only the seven compared attributes feed the
/// comparator; the rest is carried for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub japanese_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nicknames: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    // Compared attributes
    #[serde(default)]
    pub affiliation: Option<Vec<String>>,
    #[serde(default)]
    pub nationality: Option<FieldValue>,
    #[serde(default)]
    pub appears_in: Option<Vec<String>>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub fighting_style: Option<Vec<String>>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

impl CharacterRecord {
    /// Create an empty record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Display name, empty when the record carries none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// First image file name, if any
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map(String::as_str)
    }
}
