//! Comparator: assembles the per-field verdict for one guess
//!
//! Every field is handled by an independent pure strategy; none of them can
//! fail, so a bad value in one field never affects the others.

use crate::core::birth::compare_birth;
use crate::core::categorical::{compare_games, compare_lists, compare_values};
use crate::core::fighting_style::compare_fighting_styles;
use crate::core::height::compare_height;
use crate::core::normalize::to_sequence;
use crate::types::{CharacterRecord, VerdictRecord};

/// Stateless comparator, safe to share across threads
#[derive(Debug, Default, Clone, Copy)]
pub struct Comparator;

impl Comparator {
    /// Create new comparator
    pub fn new() -> Self {
        Self
    }

    /// Compare a guessed character against the target
    pub fn compare(&self, candidate: &CharacterRecord, target: &CharacterRecord) -> VerdictRecord {
        VerdictRecord {
            affiliation: compare_lists(
                list_or_empty(&candidate.affiliation),
                list_or_empty(&target.affiliation),
            ),
            nationality: compare_lists(
                &to_sequence(candidate.nationality.as_ref()),
                &to_sequence(target.nationality.as_ref()),
            ),
            games: compare_games(
                list_or_empty(&candidate.appears_in),
                list_or_empty(&target.appears_in),
            ),
            blood_type: compare_values(
                candidate.blood_type.as_deref(),
                target.blood_type.as_deref(),
            ),
            fighting_style: compare_fighting_styles(
                list_or_empty(&candidate.fighting_style),
                list_or_empty(&target.fighting_style),
            ),
            height: compare_height(candidate.height.as_deref(), target.height.as_deref()),
            date_of_birth: compare_birth(
                candidate.date_of_birth.as_deref(),
                target.date_of_birth.as_deref(),
            ),
        }
    }
}

/// Compare a guessed character against the target
pub fn compare(candidate: &CharacterRecord, target: &CharacterRecord) -> VerdictRecord {
    Comparator::new().compare(candidate, target)
}

fn list_or_empty(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BirthVerdict, FieldValue, HeightVerdict, ListVerdict, MatchVerdict,
    };
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn kiryu() -> CharacterRecord {
        CharacterRecord {
            affiliation: strings(&["Tojo Clan", "Dojima Family"]),
            nationality: Some(FieldValue::from("Japanese")),
            appears_in: strings(&["Yakuza 0", "Yakuza Kiwami", "Ryu Ga Gotoku Online"]),
            blood_type: Some("A".to_string()),
            fighting_style: strings(&["Brawler (Legend Style)", "Dragon of Dojima"]),
            height: Some("184 cm".to_string()),
            date_of_birth: Some("1968-06-17".to_string()),
            ..CharacterRecord::named("Kazuma Kiryu")
        }
    }

    fn majima() -> CharacterRecord {
        CharacterRecord {
            affiliation: strings(&["Tojo Clan", "Majima Family"]),
            nationality: Some(FieldValue::from(vec!["Japanese"])),
            appears_in: strings(&["Yakuza 0", "Yakuza Kiwami", "Yakuza 2"]),
            blood_type: Some("Unknown".to_string()),
            fighting_style: strings(&["Mad Dog (Legend Style)", "Thug"]),
            height: Some("180 cm".to_string()),
            date_of_birth: Some("1964-05-14".to_string()),
            ..CharacterRecord::named("Goro Majima")
        }
    }

    #[test]
    fn test_self_comparison_all_green() {
        let record = kiryu();
        let verdict = compare(&record, &record);
        assert_eq!(
            verdict,
            VerdictRecord {
                affiliation: ListVerdict::Green,
                nationality: ListVerdict::Green,
                games: ListVerdict::Green,
                blood_type: MatchVerdict::Green,
                fighting_style: ListVerdict::Green,
                height: HeightVerdict::Green,
                date_of_birth: BirthVerdict::Green,
            }
        );
        assert!(verdict.all_green());
    }

    #[test]
    fn test_mixed_verdict() {
        let verdict = compare(&kiryu(), &majima());
        assert_eq!(
            verdict,
            VerdictRecord {
                affiliation: ListVerdict::Yellow,
                nationality: ListVerdict::Green,
                games: ListVerdict::Yellow,
                blood_type: MatchVerdict::Red,
                fighting_style: ListVerdict::Yellow,
                height: HeightVerdict::Higher,
                date_of_birth: BirthVerdict::RedYounger,
            }
        );
    }

    #[test]
    fn test_empty_records() {
        let empty = CharacterRecord::default();
        let verdict = compare(&empty, &empty);
        assert_eq!(verdict.affiliation, ListVerdict::Green);
        assert_eq!(verdict.nationality, ListVerdict::Green);
        assert_eq!(verdict.games, ListVerdict::Red);
        assert_eq!(verdict.blood_type, MatchVerdict::Green);
        assert_eq!(verdict.fighting_style, ListVerdict::Green);
        assert_eq!(verdict.height, HeightVerdict::Green);
        assert_eq!(verdict.date_of_birth, BirthVerdict::Green);
    }

    #[test]
    fn test_affiliation_unknown_not_collapsed() {
        let a = CharacterRecord {
            affiliation: strings(&["Unknown"]),
            ..CharacterRecord::default()
        };
        let b = CharacterRecord::default();
        assert_eq!(compare(&a, &b).affiliation, ListVerdict::Red);
    }

    #[test]
    fn test_nationality_unknown_collapsed() {
        let a = CharacterRecord {
            nationality: Some(FieldValue::from("Unknown")),
            ..CharacterRecord::default()
        };
        let b = CharacterRecord::default();
        assert_eq!(compare(&a, &b).nationality, ListVerdict::Green);
    }
}
