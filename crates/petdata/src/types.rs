use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity tier of a talent as shown on the talent card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalentRarity {
    Common,
    Uncommon,
    Rare,
    UltraRare,
    Epic,
}

impl fmt::Display for TalentRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::UltraRare => "Ultra-Rare",
            Self::Epic => "Epic",
        };
        f.write_str(label)
    }
}

/// The seven schools of magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum School {
    Fire,
    Ice,
    Storm,
    Life,
    Death,
    Myth,
    Balance,
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::Storm => "Storm",
            Self::Life => "Life",
            Self::Death => "Death",
            Self::Myth => "Myth",
            Self::Balance => "Balance",
        };
        f.write_str(label)
    }
}

/// Base attribute a pet trains; each attribute feeds a subset of derived stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    Strength,
    Intellect,
    Agility,
    Will,
    Power,
}

impl Attribute {
    /// Derived stats affected by this attribute, per the Wizard101 Central
    /// wiki breakdown, restricted to the stats this tool tracks.
    pub fn affects(self) -> &'static [Stat] {
        match self {
            Self::Strength => &[Stat::Damage, Stat::PipChance, Stat::Resistance],
            Self::Intellect => &[Stat::Mana, Stat::Accuracy, Stat::PipChance],
            Self::Agility => &[
                Stat::Health,
                Stat::Accuracy,
                Stat::Resistance,
                Stat::Critical,
            ],
            Self::Will => &[Stat::Damage, Stat::Health, Stat::Mana, Stat::Critical],
            Self::Power => &[
                Stat::Health,
                Stat::Mana,
                Stat::Accuracy,
                Stat::Damage,
                Stat::PipChance,
                Stat::Resistance,
                Stat::Critical,
            ],
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Strength => "Strength",
            Self::Intellect => "Intellect",
            Self::Agility => "Agility",
            Self::Will => "Will",
            Self::Power => "Power",
        };
        f.write_str(label)
    }
}

/// Derived combat stat a talent can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stat {
    Damage,
    Resistance,
    Accuracy,
    PipChance,
    Health,
    Mana,
    Critical,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Damage => "Damage",
            Self::Resistance => "Resistance",
            Self::Accuracy => "Accuracy",
            Self::PipChance => "Pip Chance",
            Self::Health => "Health",
            Self::Mana => "Mana",
            Self::Critical => "Critical Rating",
        };
        f.write_str(label)
    }
}

/// Growth stage of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Baby,
    Teen,
    Adult,
    Ancient,
    Epic,
    Mega,
    Ultra,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Baby => "Baby",
            Self::Teen => "Teen",
            Self::Adult => "Adult",
            Self::Ancient => "Ancient",
            Self::Epic => "Epic",
            Self::Mega => "Mega",
            Self::Ultra => "Ultra",
        };
        f.write_str(label)
    }
}
