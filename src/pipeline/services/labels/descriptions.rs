use super::formatter::format_label;

const GENERIC_DESCRIPTION: &str = "an interesting object that has been identified in the image.";

/// Ordered keyword predicates; the first entry whose keywords match picks the sentence.
const DESCRIPTION_TEMPLATES: &[(&[&str], &str)] = &[
    (
        &["cat"],
        "a beloved domestic pet known for its independent nature, agility, and affectionate behavior.",
    ),
    (
        &["dog"],
        "a loyal companion and one of humanity's oldest friends, known for intelligence and devotion.",
    ),
    (
        &["bird"],
        "a feathered creature capable of flight, known for its beautiful songs and diverse species.",
    ),
    (
        &["horse"],
        "a majestic animal known for its strength, speed, and long history with humans.",
    ),
    (
        &["fish", "shark"],
        "an aquatic creature that lives in water, known for its diverse species and adaptations.",
    ),
    (
        &["apple", "fruit"],
        "a nutritious food item that provides vitamins and energy.",
    ),
    (
        &["pizza", "burger"],
        "a popular food item enjoyed by people around the world.",
    ),
    (
        &["car", "vehicle"],
        "a motorized vehicle designed for transportation on roads.",
    ),
    (
        &["bicycle", "bike"],
        "a human-powered vehicle with two wheels, great for exercise and transportation.",
    ),
    (
        &["flower", "rose"],
        "a beautiful flowering plant that adds color and fragrance to gardens and bouquets.",
    ),
    (
        &["tree"],
        "a large plant that provides oxygen, shade, and habitat for many creatures.",
    ),
    (
        &["computer", "laptop"],
        "an electronic device used for computing, communication, and entertainment.",
    ),
    (
        &["phone", "smartphone"],
        "a portable electronic device used for communication and many other functions.",
    ),
];

pub fn describe_label(label: &str) -> String {
    let lowered = label.to_lowercase();
    let name = format_label(label);

    let sentence = DESCRIPTION_TEMPLATES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, sentence)| *sentence)
        .unwrap_or(GENERIC_DESCRIPTION);

    format!("A {name} - {sentence}")
}
