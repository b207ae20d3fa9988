//! Closed keyword vocabularies shared by every extractor. Built once at
//! startup and never mutated, so they are safe to share across concurrent
//! requests without locking.

use once_cell::sync::Lazy;
use regex::Regex;

/// Room type phrases, scanned longest-first so specific phrases win over
/// their substrings ("double room" before "room"). Each entry carries the
/// canonical label it resolves to; the bare bed-count words collapse onto
/// their full room phrases.
pub static ROOM_TYPES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut entries = vec![
        ("suite", "suite"),
        ("single room", "single room"),
        ("double room", "double room"),
        ("triple room", "triple room"),
        ("quad room", "quad room"),
        ("family room", "family room"),
        ("room", "room"),
        ("shared room", "shared room"),
        ("private room", "private room"),
        ("studio room", "studio room"),
        ("apartment", "apartment"),
        ("studio", "studio"),
        ("villa", "villa"),
        ("bungalow", "bungalow"),
        ("cottage", "cottage"),
        ("penthouse", "penthouse"),
        ("loft", "loft"),
        ("cabin", "cabin"),
        ("chalet", "chalet"),
        ("mansion", "mansion"),
        ("duplex", "duplex"),
        ("guesthouse", "guesthouse"),
        ("hostel", "hostel"),
        ("single", "single room"),
        ("double", "double room"),
        ("triple", "triple room"),
        ("quad", "quad room"),
    ];
    entries.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.len()));
    entries
});

/// Word-boundary-safe pattern per room type entry, in scan order.
pub static ROOM_TYPE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    ROOM_TYPES
        .iter()
        .map(|(phrase, canonical)| (*canonical, word_pattern(phrase)))
        .collect()
});

/// Abbreviations resolved to their canonical phrases before type matching.
pub static ROOM_TYPE_SYNONYMS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("dbl", "double"),
        ("sgl", "single"),
        ("twn", "twin"),
        ("trpl", "triple"),
        ("apt", "apartment"),
        ("bdr", "bedroom"),
    ]
    .iter()
    .map(|(abbr, full)| (word_pattern(abbr), *full))
    .collect()
});

/// The one board phrase that would otherwise leak a spurious "room" type.
pub static ROOM_ONLY: Lazy<Regex> = Lazy::new(|| word_pattern("room only"));

/// Categories are not mutually exclusive; every contained entry is returned.
pub static ROOM_CATEGORIES: &[&str] = &[
    "deluxe",
    "superior",
    "executive",
    "club",
    "presidential",
    "classic",
    "junior",
    "luxury",
    "economy",
    "standard",
    "budget",
    "accessible",
    "family-friendly",
    "romantic",
    "honeymoon",
    "business class",
    "premium",
    "boutique",
    "historic",
    "modern",
    "oceanfront",
    "beachfront",
    "communicating",
    "connected",
    "high floor",
    "low floor",
    "balcony",
    "penthouse",
];

/// Declared order decides ties: the first contained entry wins.
pub static BOARD_TYPES: &[&str] = &[
    "room only",
    "bed and breakfast",
    "half board",
    "full board",
    "all inclusive",
    "self catering",
    "board basis",
    "breakfast included",
    "dinner included",
    "lunch included",
    "breakfast & dinner",
    "full pension",
    "breakfast for 2",
    "free breakfast",
    "complimentary breakfast",
    "no meals",
    "meal plan available",
    "kitchenette",
    "full kitchen",
];

pub static VIEWS: &[&str] = &[
    "city view",
    "sea view",
    "garden view",
    "courtyard view",
    "mountain view",
    "beachfront",
    "pool view",
    "lake view",
    "river view",
    "panoramic view",
    "ocean view",
    "forest view",
    "park view",
    "street view",
    "skyline view",
    "terrace view",
    "courtyard area",
];

/// Bed phrases, longest-first so "california king bed" is tried before
/// "king bed" and "king".
pub static BED_TYPES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut entries = vec![
        "single bed",
        "double bed",
        "queen bed",
        "king bed",
        "twin bed",
        "bunk bed",
        "double sofa bed",
        "sofa bed",
        "futon",
        "murphy bed",
        "queen",
        "king",
        "full bed",
        "california king bed",
        "kingsize",
        "queensize",
        "day bed",
        "trundle bed",
        "extra bed",
        "cot",
        "rollaway bed",
        "single sofa bed",
        "sofabed",
    ];
    entries.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
    entries
});

/// Bed pattern per entry: an optional leading quantity digit, the phrase
/// itself, and a tolerated plural "s".
pub static BED_TYPE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    BED_TYPES
        .iter()
        .map(|phrase| {
            let escaped = regex::escape(phrase).replace(' ', r"\s+");
            let pattern = format!(r"(?:\b(\d+)\s+)?\b{escaped}s?\b");
            (*phrase, Regex::new(&pattern).unwrap())
        })
        .collect()
});

pub static AMENITIES: &[&str] = &[
    "wifi",
    "air conditioning",
    "heating",
    "kitchen",
    "workspace",
    "gym",
    "pool",
    "free parking",
    "pet-friendly",
    "washer",
    "dryer",
    "balcony",
    "fireplace",
    "accessible",
    "elevator",
    "security",
    "private entrance",
    "smoke alarm",
    "carbon monoxide alarm",
    "first aid kit",
    "safety card",
    "fire extinguisher",
    "no smoking",
    "beach access",
    "ski-in/ski-out",
    "spa",
    "hot tub",
    "waterfront",
    "executive",
    "terrace",
    "smart tv",
    "streaming services",
    "mini-bar",
    "coffee maker",
    "soundproofing",
    "private pool",
    "plunge pool",
    "bidet",
    "jacuzzi",
    "ensuite bathroom",
    "patio",
    "garden access",
    "roof access",
    "private dock",
    "hammock",
    "game console",
    "board games",
    "book collection",
    "club access",
];

/// Word-boundary pattern for a phrase, spaces matching any run of
/// whitespace.
fn word_pattern(phrase: &str) -> Regex {
    let escaped = regex::escape(phrase).replace(' ', r"\s+");
    Regex::new(&format!(r"\b{escaped}\b")).unwrap()
}
