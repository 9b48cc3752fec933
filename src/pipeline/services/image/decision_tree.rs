//! Pixel-statistics heuristics used when no predictor result is usable.
//!
//! The cascade is an ordered rule table: conditions overlap on purpose, so the
//! first rule whose predicate holds decides the outcome.
use tracing::debug;

use super::pixel_statistics::PixelStatistics;
use crate::pipeline::domain::CategoryTag;

const CAT_PATTERNS: &str = "A cat - a beloved domestic pet known for its independent nature, agility, and affectionate behavior. Cats come in many colors including orange, ginger, tabby, and many other beautiful patterns.";
const CAT: &str = "A cat - a beloved domestic pet known for its independent nature, agility, and affectionate behavior.";
const CAT_REDDISH: &str = "A cat - a beloved domestic pet known for its independent nature, agility, and affectionate behavior. Cats come in many colors including orange, ginger, and reddish tones.";
const DOG: &str = "A dog - a loyal companion and one of humanity's oldest friends, known for intelligence and devotion.";
const DOG_BREEDS: &str = "A dog - a loyal companion and one of humanity's oldest friends, known for intelligence and devotion. Dogs come in many breeds and colors, including golden retrievers, labradors, and many others.";
const DOG_OUTDOOR: &str = "A dog - a loyal companion and one of humanity's oldest friends, known for intelligence and devotion. Dogs often appear in outdoor settings with green grass backgrounds.";
const ANIMAL_PET: &str = "An animal - a warm-blooded creature that has been identified in the image. This could be a cat, dog, or another pet.";
const ANIMAL_OUTDOOR: &str = "An animal - a warm-blooded creature that has been identified in the image. This appears to be an animal in an outdoor or natural setting.";
const ANIMAL_REDDISH: &str = "An animal - a warm-blooded creature that has been identified in the image. This appears to be an animal with reddish or orange coloring.";
const ANIMAL_WARM: &str = "An animal - a living creature that has been identified in the image. The specific type may vary, but it appears to be a warm-blooded animal.";
const PLANT: &str = "A plant or natural scene - living organisms that grow in soil and produce their own food through photosynthesis, or a beautiful natural landscape.";
const COMPLEX_GREEN: &str = "A complex object or scene that has been identified in the image. The image contains varied colors and patterns, possibly including an animal or other object on a green background.";
const GREEN: &str = "A green-colored object that has been identified in the image.";
const SKY_WATER: &str =
    "A natural scene featuring sky or water - beautiful elements of our natural world.";
const BLUE: &str = "A blue-colored object that has been identified in the image.";
const RED: &str = "A red-colored object that has been identified. This could be food, a flower, or another red item.";
const LIGHT: &str = "A light-colored or white object that has been identified in the image.";
const WHITE: &str = "A white or light-colored background or object.";
const DARK: &str = "A dark or black-colored object that has been identified in the image.";
const COMPLEX: &str =
    "A complex object with varied colors and patterns that has been identified in the image.";
const OBJECT: &str = "An object with moderate complexity that has been identified in the image. The image contains varied colors and patterns.";

/// Classification produced by the heuristic cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicOutcome {
    pub name: String,
    pub category: CategoryTag,
    pub confidence: f32,
    pub description: String,
}

impl HeuristicOutcome {
    fn new(name: &str, category: CategoryTag, confidence: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            confidence: confidence.clamp(0.0, 1.0) as f32,
            description: description.to_string(),
        }
    }

    fn cat(confidence: f64, description: &str) -> Self {
        Self::new("Cat", CategoryTag::Animal, confidence, description)
    }

    fn dog(confidence: f64, description: &str) -> Self {
        Self::new("Dog", CategoryTag::Animal, confidence, description)
    }

    fn animal(confidence: f64, description: &str) -> Self {
        Self::new("Animal", CategoryTag::Animal, confidence, description)
    }

    fn object(name: &str, confidence: f64, description: &str) -> Self {
        Self::new(name, CategoryTag::Object, confidence, description)
    }
}

/// One step of the cascade.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&PixelStatistics) -> bool,
    pub outcome: fn(&PixelStatistics) -> HeuristicOutcome,
}

pub static RULES: [Rule; 12] = [
    Rule {
        name: "orange_complex",
        applies: |s| s.orange_ratio > 0.10 && s.is_complex && s.color_variance > 2000.0,
        outcome: |s| HeuristicOutcome::cat((0.70 + s.orange_ratio * 2.0).min(0.85), CAT_PATTERNS),
    },
    Rule {
        name: "golden_bright",
        applies: |s| s.golden_ratio > 0.15 && s.is_complex && s.brightness > 100.0,
        outcome: |s| HeuristicOutcome::dog((0.70 + s.golden_ratio * 1.5).min(0.85), DOG_BREEDS),
    },
    Rule {
        name: "orange_high_variance",
        applies: |s| s.orange_ratio > 0.15 && s.color_variance > 2500.0,
        outcome: |s| HeuristicOutcome::cat((0.70 + s.orange_ratio * 1.5).min(0.85), CAT_PATTERNS),
    },
    Rule {
        name: "moderate_animal",
        applies: |s| {
            (s.orange_ratio > 0.08 || s.golden_ratio > 0.10 || s.gray_ratio > 0.12) && s.is_complex
        },
        outcome: moderate_animal,
    },
    Rule {
        name: "green_dominant",
        applies: |s| s.mean_g > s.mean_r * 1.2 && s.mean_g > s.mean_b * 1.2,
        outcome: green_scene,
    },
    Rule {
        name: "blue_dominant",
        applies: |s| s.mean_b > s.mean_r * 1.2 && s.mean_b > s.mean_g * 1.2,
        outcome: |s| {
            if s.brightness > 150.0 {
                HeuristicOutcome::new("Sky or Water", CategoryTag::Nature, 0.75, SKY_WATER)
            } else {
                HeuristicOutcome::object("Blue Object", 0.70, BLUE)
            }
        },
    },
    Rule {
        name: "strong_red",
        applies: |s| s.red_ratio > 0.15 && s.is_complex,
        outcome: strong_red,
    },
    Rule {
        name: "white_dominant",
        applies: |s| s.white_ratio > 0.30,
        outcome: |s| {
            if s.is_complex {
                HeuristicOutcome::object("Light Colored Object", 0.70, LIGHT)
            } else {
                HeuristicOutcome::object("White Background or Object", 0.65, WHITE)
            }
        },
    },
    Rule {
        name: "black_dominant",
        applies: |s| s.black_ratio > 0.30,
        outcome: |_| HeuristicOutcome::object("Dark Object", 0.70, DARK),
    },
    Rule {
        name: "complex_warm",
        applies: |s| s.is_complex && (s.mean_r > 100.0 || s.orange_ratio > 0.05),
        outcome: |s| {
            if s.color_variance > 5000.0 {
                HeuristicOutcome::object("Complex Object", 0.75, COMPLEX)
            } else {
                HeuristicOutcome::animal(0.70, ANIMAL_WARM)
            }
        },
    },
    Rule {
        name: "complex",
        applies: |s| s.is_complex,
        outcome: |_| HeuristicOutcome::object("Object", 0.70, OBJECT),
    },
    Rule {
        name: "simple",
        applies: |_| true,
        outcome: simple_object,
    },
];

fn moderate_animal(s: &PixelStatistics) -> HeuristicOutcome {
    if s.brightness > 110.0
        && (s.golden_ratio > 0.08 || (s.orange_ratio > 0.05 && s.color_variance < 5000.0))
    {
        HeuristicOutcome::dog(
            (0.70 + (s.orange_ratio + s.golden_ratio) * 1.5).min(0.80),
            DOG,
        )
    } else {
        HeuristicOutcome::animal(0.75, ANIMAL_PET)
    }
}

// Animals are often photographed on grass, so animal colors win over "plant".
fn green_scene(s: &PixelStatistics) -> HeuristicOutcome {
    let has_animal_colors =
        (s.orange_ratio > 0.03 || s.golden_ratio > 0.03 || s.gray_ratio > 0.05) && s.is_complex;

    if has_animal_colors || (s.is_complex && s.color_variance > 3000.0) {
        if s.golden_ratio > 0.03 && s.brightness > 90.0 {
            HeuristicOutcome::dog(
                (0.70 + s.golden_ratio.max(s.orange_ratio) * 3.0).min(0.85),
                DOG_OUTDOOR,
            )
        } else if s.orange_ratio > 0.05 && s.color_variance > 1500.0 {
            HeuristicOutcome::cat((0.70 + s.orange_ratio * 3.0).min(0.85), CAT)
        } else if s.color_variance > 4000.0 {
            HeuristicOutcome::animal(0.80, ANIMAL_OUTDOOR)
        } else if s.color_variance > 3000.0 {
            HeuristicOutcome::animal(0.75, ANIMAL_OUTDOOR)
        } else {
            HeuristicOutcome::animal(0.72, ANIMAL_OUTDOOR)
        }
    } else if s.is_complex && s.color_variance < 2000.0 {
        HeuristicOutcome::new("Plant or Nature Scene", CategoryTag::Plant, 0.75, PLANT)
    } else if s.is_complex {
        HeuristicOutcome::object("Complex Object or Animal", 0.70, COMPLEX_GREEN)
    } else {
        HeuristicOutcome::object("Green Object", 0.70, GREEN)
    }
}

fn strong_red(s: &PixelStatistics) -> HeuristicOutcome {
    if s.orange_ratio > 0.05 || s.golden_ratio > 0.05 {
        if s.orange_ratio > s.golden_ratio {
            HeuristicOutcome::cat((0.70 + s.orange_ratio * 2.0).min(0.85), CAT_REDDISH)
        } else {
            HeuristicOutcome::animal(0.75, ANIMAL_REDDISH)
        }
    } else {
        let category = if s.brightness > 100.0 {
            CategoryTag::Food
        } else {
            CategoryTag::Object
        };
        HeuristicOutcome::new("Red Object or Food", category, 0.75, RED)
    }
}

fn simple_object(s: &PixelStatistics) -> HeuristicOutcome {
    let color = if s.mean_r > s.mean_g && s.mean_r > s.mean_b {
        "Red"
    } else if s.mean_g > s.mean_r && s.mean_g > s.mean_b {
        "Green"
    } else if s.mean_b > s.mean_r && s.mean_b > s.mean_g {
        "Blue"
    } else if s.brightness > 200.0 {
        "Light"
    } else if s.brightness < 50.0 {
        "Dark"
    } else {
        "Colored"
    };

    HeuristicOutcome::new(
        &format!("{color} Object"),
        CategoryTag::Object,
        0.65,
        &format!(
            "A {}-colored object that has been identified in the image.",
            color.to_lowercase()
        ),
    )
}

/// Walks `RULES` in order and returns the first matching outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDecisionTree;

impl HeuristicDecisionTree {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, stats: &PixelStatistics) -> HeuristicOutcome {
        let (rule, outcome) = self.evaluate_with_rule(stats);
        debug!("Heuristic rule {} selected {}", rule, outcome.name);
        outcome
    }

    /// Same as `evaluate`, also naming the rule that fired.
    pub fn evaluate_with_rule(&self, stats: &PixelStatistics) -> (&'static str, HeuristicOutcome) {
        // The last rule always applies, so the search cannot come up empty.
        let rule = RULES
            .iter()
            .find(|rule| (rule.applies)(stats))
            .unwrap_or(&RULES[RULES.len() - 1]);
        (rule.name, (rule.outcome)(stats))
    }
}
