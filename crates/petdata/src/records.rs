use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Attribute, School, Stat, TalentRarity};

/// A single pet record as entered by the user.
///
/// Parent ids reference other pets in the same collection and are `None` for
/// first-generation pets. `attributes` maps each trained attribute to its
/// current value; untouched attributes are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub body_type: String,
    pub school: School,
    pub current_experience: u32,
    pub parent_a_id: Option<u64>,
    pub parent_b_id: Option<u64>,
    pub name: String,
    pub attributes: BTreeMap<Attribute, i64>,
    pub splendor: i64,
    pub talents: Vec<Talent>,
}

/// A talent slot on a pet.
///
/// Card-granting talents carry the card name and count; stat-granting talents
/// carry the stat and, when the boost is school-specific, the school it
/// applies to. Fields that do not apply to a given talent are `None` and
/// serialise as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub rarity: TalentRarity,
    pub name: String,
    pub card_given: Option<String>,
    pub amount_of_cards_given: Option<u32>,
    pub attribute_given: Option<Attribute>,
    pub stat_is_school_specific: Option<bool>,
    pub stat_school: Option<School>,
    pub stat_given: Stat,
}

impl Pet {
    /// Canonical demo record, shared by the CLI `export --sample` seed and
    /// the serialisation fixtures.
    pub fn sample() -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(Attribute::Strength, 190);
        attributes.insert(Attribute::Agility, 205);
        attributes.insert(Attribute::Will, 200);

        Self {
            id: 1,
            body_type: "Frillasaur".to_string(),
            school: School::Myth,
            current_experience: 125,
            parent_a_id: None,
            parent_b_id: None,
            name: "Duke Rufus".to_string(),
            attributes,
            splendor: 3,
            talents: vec![
                Talent {
                    rarity: TalentRarity::UltraRare,
                    name: "Pain-Giver".to_string(),
                    card_given: None,
                    amount_of_cards_given: None,
                    attribute_given: None,
                    stat_is_school_specific: Some(false),
                    stat_school: None,
                    stat_given: Stat::Damage,
                },
                Talent {
                    rarity: TalentRarity::Epic,
                    name: "Myth-Giver".to_string(),
                    card_given: None,
                    amount_of_cards_given: None,
                    attribute_given: None,
                    stat_is_school_specific: Some(true),
                    stat_school: Some(School::Myth),
                    stat_given: Stat::Damage,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_serialises_with_enum_name_keys() {
        let value = serde_json::to_value(Pet::sample()).unwrap();
        assert_eq!(value["school"], "MYTH");
        assert_eq!(value["attributes"]["STRENGTH"], 190);
        assert_eq!(value["attributes"]["WILL"], 200);
        assert_eq!(value["parent_a_id"], serde_json::Value::Null);
        assert_eq!(value["talents"][0]["stat_given"], "DAMAGE");
        assert_eq!(value["talents"][0]["card_given"], serde_json::Value::Null);
    }

    #[test]
    fn name_is_a_plain_string() {
        let value = serde_json::to_value(Pet::sample()).unwrap();
        assert_eq!(value["name"], "Duke Rufus");
        assert_eq!(value["talents"][0]["name"], "Pain-Giver");
    }

    #[test]
    fn pet_round_trips() {
        let pet = Pet::sample();
        let json = serde_json::to_string(&pet).unwrap();
        let back: Pet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pet);
    }
}
