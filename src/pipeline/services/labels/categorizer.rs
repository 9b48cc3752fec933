use crate::pipeline::domain::CategoryTag;

/// Keyword sets in priority order. Animal and vehicle keywords are checked
/// before the broader buckets, so "chicken" and "fish" stay animals.
pub const CATEGORY_KEYWORDS: &[(CategoryTag, &[&str])] = &[
    (
        CategoryTag::Animal,
        &[
            "cat", "dog", "bird", "horse", "cow", "pig", "sheep", "chicken", "duck", "rabbit",
            "elephant", "lion", "tiger", "bear", "wolf", "fox", "deer", "squirrel", "mouse",
            "rat", "hamster", "turtle", "snake", "lizard", "frog", "fish", "shark", "dolphin",
            "whale", "octopus", "butterfly", "bee", "spider", "ant", "sloth", "penguin", "zebra",
            "giraffe", "monkey", "ape", "gorilla", "panda", "koala", "kangaroo", "hedgehog",
            "raccoon", "skunk", "badger", "kitten", "puppy", "retriever", "terrier", "spaniel",
            "poodle", "labrador", "beagle", "collie", "hound",
        ],
    ),
    (
        CategoryTag::Vehicle,
        &[
            "car", "truck", "bus", "bicycle", "bike", "motorcycle", "airplane", "train", "boat",
            "ship", "van", "suv", "taxi", "scooter", "helicopter", "jet", "subway", "tram",
            "ferry", "yacht", "cruise", "tractor", "ambulance", "fire truck",
        ],
    ),
    (
        CategoryTag::Food,
        &[
            "apple", "banana", "orange", "bread", "pizza", "burger", "sandwich", "cake",
            "cookie", "ice cream", "coffee", "tea", "milk", "cheese", "meat", "chicken", "beef",
            "pork", "fish", "rice", "pasta", "noodle", "soup", "salad", "vegetable", "fruit",
            "berry", "grape", "strawberry",
        ],
    ),
    (
        CategoryTag::Plant,
        &[
            "flower", "rose", "tree", "plant", "leaf", "grass", "bush", "shrub", "fern",
            "cactus", "mushroom", "herb", "vegetable", "garden",
        ],
    ),
    (
        CategoryTag::Electronic,
        &[
            "computer", "laptop", "phone", "smartphone", "tablet", "television", "tv", "camera",
            "monitor", "keyboard", "mouse", "speaker", "headphone", "microphone", "radio",
            "remote", "charger", "battery",
        ],
    ),
    (
        CategoryTag::Furniture,
        &[
            "chair", "table", "desk", "sofa", "couch", "bed", "cabinet", "shelf", "wardrobe",
            "dresser", "stool", "bench", "ottoman",
        ],
    ),
    (
        CategoryTag::Clothing,
        &[
            "shirt", "pants", "dress", "jacket", "coat", "hat", "cap", "shoe", "sneaker", "boot",
            "sock", "glove", "scarf", "tie", "belt",
        ],
    ),
    (
        CategoryTag::Architecture,
        &[
            "house", "building", "tower", "skyscraper", "church", "temple", "bridge", "monument",
            "statue", "castle", "palace",
        ],
    ),
    (
        CategoryTag::Nature,
        &[
            "mountain", "hill", "valley", "river", "lake", "ocean", "beach", "forest", "jungle",
            "desert", "snow", "ice", "cloud", "sunset", "sunrise",
        ],
    ),
];

/// Maps a label to its category by substring match; the first matching
/// category in `CATEGORY_KEYWORDS` wins, anything else is an `Object`.
pub fn categorize_label(label: &str) -> CategoryTag {
    let label = label.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| label.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(CategoryTag::Object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_known_labels() {
        assert_eq!(categorize_label("golden retriever"), CategoryTag::Animal);
        assert_eq!(categorize_label("fire truck"), CategoryTag::Vehicle);
        assert_eq!(categorize_label("unknown_widget"), CategoryTag::Object);
        assert_eq!(categorize_label("Espresso Coffee"), CategoryTag::Food);
        assert_eq!(categorize_label("sunflower"), CategoryTag::Plant);
        assert_eq!(categorize_label("laptop"), CategoryTag::Electronic);
        assert_eq!(categorize_label("ottoman"), CategoryTag::Furniture);
        assert_eq!(categorize_label("sneakers"), CategoryTag::Clothing);
        assert_eq!(categorize_label("castle"), CategoryTag::Architecture);
        assert_eq!(categorize_label("volcano mountain"), CategoryTag::Nature);
    }

    #[test]
    fn recognizes_dog_breeds() {
        assert_eq!(categorize_label("golden_retriever"), CategoryTag::Animal);
        assert_eq!(categorize_label("Yorkshire terrier"), CategoryTag::Animal);
    }

    #[test]
    fn earlier_categories_win() {
        // "chicken" and "fish" are both animals and food; animal comes first.
        assert_eq!(categorize_label("chicken"), CategoryTag::Animal);
        assert_eq!(categorize_label("fish dish"), CategoryTag::Animal);
        // "mouse" is checked as an animal before electronics.
        assert_eq!(categorize_label("mouse device"), CategoryTag::Animal);
        // "vegetable" appears in both food and plant lists.
        assert_eq!(categorize_label("vegetable"), CategoryTag::Food);
    }

    #[test]
    fn matches_substrings_inside_words() {
        // "scat" contains "cat"; "ice cream" is food before "ice" in nature.
        assert_eq!(categorize_label("scatter plot"), CategoryTag::Animal);
        assert_eq!(categorize_label("ice cream"), CategoryTag::Food);
    }
}
