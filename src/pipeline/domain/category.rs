use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of category tags attached to every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    Animal,
    Vehicle,
    Food,
    Plant,
    Electronic,
    Furniture,
    Clothing,
    Architecture,
    Nature,
    Object,
    Unknown,
}

impl CategoryTag {
    pub const ALL: [CategoryTag; 11] = [
        CategoryTag::Animal,
        CategoryTag::Vehicle,
        CategoryTag::Food,
        CategoryTag::Plant,
        CategoryTag::Electronic,
        CategoryTag::Furniture,
        CategoryTag::Clothing,
        CategoryTag::Architecture,
        CategoryTag::Nature,
        CategoryTag::Object,
        CategoryTag::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Animal => "Animal",
            CategoryTag::Vehicle => "Vehicle",
            CategoryTag::Food => "Food",
            CategoryTag::Plant => "Plant",
            CategoryTag::Electronic => "Electronic",
            CategoryTag::Furniture => "Furniture",
            CategoryTag::Clothing => "Clothing",
            CategoryTag::Architecture => "Architecture",
            CategoryTag::Nature => "Nature",
            CategoryTag::Object => "Object",
            CategoryTag::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
