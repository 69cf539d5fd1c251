//! Core types for Yakuzadle

mod character;
mod verdict;

pub use character::{CharacterRecord, FieldValue};
pub use verdict::{
    BirthVerdict, FieldTile, HeightVerdict, ListVerdict, MatchVerdict, Tile, VerdictRecord,
};
