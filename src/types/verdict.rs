//! Verdict tags and the per-guess verdict record
//!
//! Each field draws its tag from its own closed set, so a height can never
//! come back `yellow` and a blood type can never come back `older`.

use serde::{Deserialize, Serialize};

/// Display colour of one result cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tile::Green => "green",
            Tile::Yellow => "yellow",
            Tile::Red => "red",
        };
        write!(f, "{}", name)
    }
}

/// Verdict for list-valued fields (affiliation, nationality, games, fighting style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListVerdict {
    /// Same elements
    Green,
    /// At least one shared element
    Yellow,
    /// Nothing shared
    Red,
}

impl ListVerdict {
    pub fn tile(&self) -> Tile {
        match self {
            ListVerdict::Green => Tile::Green,
            ListVerdict::Yellow => Tile::Yellow,
            ListVerdict::Red => Tile::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListVerdict::Green => "green",
            ListVerdict::Yellow => "yellow",
            ListVerdict::Red => "red",
        }
    }
}

/// Verdict for single categorical values (blood type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchVerdict {
    Green,
    Red,
}

impl MatchVerdict {
    pub fn tile(&self) -> Tile {
        match self {
            MatchVerdict::Green => Tile::Green,
            MatchVerdict::Red => Tile::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchVerdict::Green => "green",
            MatchVerdict::Red => "red",
        }
    }
}

/// Verdict for height
///
/// `Higher`/`Lower` describe the candidate's value relative to the target's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeightVerdict {
    Green,
    Red,
    Higher,
    Lower,
}

impl HeightVerdict {
    pub fn tile(&self) -> Tile {
        match self {
            HeightVerdict::Green => Tile::Green,
            _ => Tile::Red,
        }
    }

    pub fn arrow(&self) -> Option<&'static str> {
        match self {
            HeightVerdict::Higher => Some("↑"),
            HeightVerdict::Lower => Some("↓"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeightVerdict::Green => "green",
            HeightVerdict::Red => "red",
            HeightVerdict::Higher => "higher",
            HeightVerdict::Lower => "lower",
        }
    }
}

/// Verdict for date of birth
///
/// `Older`/`Younger` mean the dates share a year, or share day and month.
/// The `Red*` variants carry direction without any shared component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BirthVerdict {
    Green,
    Red,
    Older,
    Younger,
    RedOlder,
    RedYounger,
}

impl BirthVerdict {
    pub fn tile(&self) -> Tile {
        match self {
            BirthVerdict::Green => Tile::Green,
            BirthVerdict::Older | BirthVerdict::Younger => Tile::Yellow,
            BirthVerdict::Red | BirthVerdict::RedOlder | BirthVerdict::RedYounger => Tile::Red,
        }
    }

    pub fn arrow(&self) -> Option<&'static str> {
        match self {
            BirthVerdict::Older | BirthVerdict::RedOlder => Some("↑"),
            BirthVerdict::Younger | BirthVerdict::RedYounger => Some("↓"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BirthVerdict::Green => "green",
            BirthVerdict::Red => "red",
            BirthVerdict::Older => "older",
            BirthVerdict::Younger => "younger",
            BirthVerdict::RedOlder => "red-older",
            BirthVerdict::RedYounger => "red-younger",
        }
    }
}

/// Result of comparing a guess against the target, one tag per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub affiliation: ListVerdict,
    pub nationality: ListVerdict,
    pub games: ListVerdict,
    pub blood_type: MatchVerdict,
    pub fighting_style: ListVerdict,
    pub height: HeightVerdict,
    pub date_of_birth: BirthVerdict,
}

/// One rendered result cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTile {
    pub label: &'static str,
    pub tag: &'static str,
    pub tile: Tile,
    pub arrow: Option<&'static str>,
}

impl VerdictRecord {
    /// Cells in display order
    pub fn tiles(&self) -> [FieldTile; 7] {
        let list = |label, v: ListVerdict| FieldTile {
            label,
            tag: v.as_str(),
            tile: v.tile(),
            arrow: None,
        };
        [
            list("Affiliation", self.affiliation),
            list("Nationality", self.nationality),
            list("Games", self.games),
            FieldTile {
                label: "Blood Type",
                tag: self.blood_type.as_str(),
                tile: self.blood_type.tile(),
                arrow: None,
            },
            list("Fighting Style", self.fighting_style),
            FieldTile {
                label: "Height",
                tag: self.height.as_str(),
                tile: self.height.tile(),
                arrow: self.height.arrow(),
            },
            FieldTile {
                label: "Birthdate",
                tag: self.date_of_birth.as_str(),
                tile: self.date_of_birth.tile(),
                arrow: self.date_of_birth.arrow(),
            },
        ]
    }

    /// True when every cell renders green
    pub fn all_green(&self) -> bool {
        self.tiles().iter().all(|t| t.tile == Tile::Green)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VerdictRecord {
        VerdictRecord {
            affiliation: ListVerdict::Yellow,
            nationality: ListVerdict::Green,
            games: ListVerdict::Red,
            blood_type: MatchVerdict::Green,
            fighting_style: ListVerdict::Green,
            height: HeightVerdict::Higher,
            date_of_birth: BirthVerdict::RedOlder,
        }
    }

    #[test]
    fn test_serializes_as_flat_kebab_case_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["affiliation"], "yellow");
        assert_eq!(json["games"], "red");
        assert_eq!(json["height"], "higher");
        assert_eq!(json["date_of_birth"], "red-older");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_birth_directional_tiles() {
        assert_eq!(BirthVerdict::Older.tile(), Tile::Yellow);
        assert_eq!(BirthVerdict::Younger.tile(), Tile::Yellow);
        assert_eq!(BirthVerdict::RedYounger.tile(), Tile::Red);
        assert_eq!(BirthVerdict::RedOlder.arrow(), Some("↑"));
        assert_eq!(BirthVerdict::Younger.arrow(), Some("↓"));
        assert_eq!(BirthVerdict::Red.arrow(), None);
    }

    #[test]
    fn test_height_directional_tiles_are_red() {
        assert_eq!(HeightVerdict::Higher.tile(), Tile::Red);
        assert_eq!(HeightVerdict::Lower.arrow(), Some("↓"));
        assert_eq!(HeightVerdict::Green.arrow(), None);
    }

    #[test]
    fn test_tiles_order_and_all_green() {
        let tiles = sample().tiles();
        let labels: Vec<_> = tiles.iter().map(|t| t.label).collect();
        assert_eq!(
            labels,
            vec!["Affiliation", "Nationality", "Games", "Blood Type", "Fighting Style", "Height", "Birthdate"]
        );
        assert!(!sample().all_green());
        assert_eq!(tiles[6].tile.to_string(), "red");
    }
}
