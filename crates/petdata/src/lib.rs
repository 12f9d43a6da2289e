//! Domain model for the pet manager: the closed enumerations describing
//! talents and schools, the plain `Pet`/`Talent` records, and the one-shot
//! JSON export used to persist a collection to disk.
//!
//! The enums are flat value sets with no behaviour attached; records are
//! plain serde structs. Everything serialises with variant names in
//! SCREAMING_SNAKE form (`ULTRA_RARE`, `PIP_CHANCE`) while `Display` renders
//! the human-readable labels shown in the UI.

mod export;
mod records;
mod types;

pub use export::{save_pets, ExportError};
pub use records::{Pet, Talent};
pub use types::{Attribute, Rank, School, Stat, TalentRarity};
