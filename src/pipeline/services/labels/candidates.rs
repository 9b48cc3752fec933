use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const HYPOTHESIS_TEMPLATE: &str = "a photo of {}";

const RAW_CANDIDATES: &[&str] = &[
    // Animals
    "animal", "cat", "dog", "bird", "horse", "cow", "pig", "sheep", "chicken", "duck",
    "rabbit", "elephant", "lion", "tiger", "bear", "wolf", "fox", "deer", "squirrel",
    "mouse", "rat", "hamster", "turtle", "snake", "lizard", "frog", "fish", "shark",
    "dolphin", "whale", "octopus", "butterfly", "bee", "spider", "ant", "sloth",
    "penguin", "polar bear", "zebra", "giraffe", "monkey", "panda", "koala", "kangaroo",
    "hedgehog", "raccoon", "skunk", "badger", "owl", "eagle", "hawk", "parrot", "goat",
    "lobster", "crab", "seal", "otter",
    // Vehicles
    "vehicle", "car", "truck", "bus", "bicycle", "bike", "motorcycle", "airplane", "train",
    "boat", "ship", "van", "suv", "taxi", "scooter", "helicopter", "jet", "subway", "tram",
    "tractor", "ambulance", "fire truck", "rocket", "spaceship",
    // Electronics and appliances
    "phone", "smartphone", "tablet", "laptop", "computer", "television", "camera", "speaker",
    "headphones", "microphone", "keyboard", "mouse device", "game console", "drone",
    "washing machine", "refrigerator", "microwave", "air conditioner", "fan",
    // Household objects and furniture
    "book", "book jacket", "bookshelf", "magazine", "comic book", "notebook", "textbook",
    "pen", "pencil", "paintbrush", "scissors", "ruler", "calculator", "lamp", "light bulb",
    "chair", "stool", "sofa", "couch", "table", "desk", "bed", "cabinet", "dresser", "shelf",
    "mirror", "clock", "watch", "backpack", "suitcase", "umbrella", "bucket", "bottle", "cup",
    "mug", "plate", "bowl", "spoon", "fork", "knife", "toothbrush", "towel", "pillow", "blanket",
    "basket", "laundry basket", "trash can", "vacuum cleaner", "broom", "mop", "door", "window",
    "curtain", "plant pot", "flower vase",
    // Clothing and accessories
    "clothing", "shirt", "t-shirt", "jacket", "coat", "dress", "skirt", "jeans", "shorts",
    "sweater", "hoodie", "suit", "tie", "scarf", "gloves", "hat", "cap", "helmet", "shoes",
    "sneakers", "boots", "sandals", "socks", "belt", "bag", "wallet", "watch accessory",
    // Food and drink
    "food", "apple", "banana", "orange", "grape", "strawberry", "watermelon", "pineapple",
    "pizza", "burger", "sandwich", "hot dog", "fries", "salad", "soup", "steak", "fish dish",
    "sushi", "rice", "noodles", "pasta", "cake", "cupcake", "cookie", "ice cream", "donut",
    "bread", "bagel", "croissant", "cheese", "egg", "chocolate", "coffee", "tea", "juice",
    "soda", "water bottle", "wine glass",
    // Plants and nature
    "plant", "tree", "flower", "rose", "sunflower", "cactus", "grass", "leaf", "forest",
    "mountain", "river", "lake", "ocean", "beach", "desert", "snow", "cloud", "sky", "sunset",
    "sunrise", "rainbow", "volcano", "waterfall", "rock", "stone",
    // Sports and leisure
    "ball", "football", "basketball", "soccer ball", "baseball bat", "tennis racket", "golf club",
    "skateboard", "surfboard", "snowboard", "bicycle helmet", "yoga mat", "dumbbell", "treadmill",
    // Musical instruments
    "guitar", "piano", "violin", "drum", "trumpet", "saxophone", "flute", "clarinet", "oboe",
    "microphone",
    // Buildings and places
    "house", "building", "apartment", "castle", "palace", "temple", "church", "bridge", "tower",
    "skyscraper", "stadium", "school", "classroom", "kitchen", "bedroom", "bathroom", "office",
    "library", "bookstore", "laboratory", "factory", "warehouse",
    // Tools and equipment
    "tool", "hammer", "screwdriver", "wrench", "drill", "saw", "knife tool", "pliers", "axe",
    "shovel", "rake", "ladder", "tape measure", "toolbox",
    // Toys and games
    "toy", "doll", "teddy bear", "lego", "puzzle", "board game", "playing card", "kite",
    "balloon",
    // Misc
    "art", "painting", "sculpture", "camera tripod", "fireplace", "gift", "present", "flag",
    "traffic light", "stop sign", "street sign", "parking meter", "bench park", "fountain",
    "shopping cart", "shopping bag", "baby stroller", "bicycle basket",
];

static LABEL_CANDIDATES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    RAW_CANDIDATES
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
});

/// Sorted, deduplicated candidate labels handed to the zero-shot predictor.
pub fn label_candidates() -> &'static [&'static str] {
    LABEL_CANDIDATES.as_slice()
}
