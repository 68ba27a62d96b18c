use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Sentinel mood name asking for a random mood.
pub const RANDOM: &str = "random";

/// Eye and tongue glyphs for a figure. Both are two columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub eyes: &'static str,
    pub tongue: &'static str,
}

impl Mood {
    const fn new(eyes: &'static str, tongue: &'static str) -> Self {
        Self { eyes, tongue }
    }
}

impl Default for Mood {
    fn default() -> Self {
        DEFAULT
    }
}

pub const DEFAULT: Mood = Mood::new("oo", "  ");

static MOODS: LazyLock<BTreeMap<&'static str, Mood>> = LazyLock::new(|| {
    BTreeMap::from([
        ("borg", Mood::new("==", "  ")),
        ("dead", Mood::new("xx", "U ")),
        ("greedy", Mood::new("$$", "  ")),
        ("paranoid", Mood::new("@@", "  ")),
        ("stoned", Mood::new("**", "U ")),
        ("tired", Mood::new("--", "  ")),
        ("wired", Mood::new("OO", "  ")),
        ("young", Mood::new("..", "  ")),
    ])
});

pub fn get(name: &str) -> Option<Mood> {
    MOODS.get(name).copied()
}

/// Looks up a mood, falling back to the default glyphs for empty,
/// unknown or `random` names.
pub fn resolve(name: Option<&str>) -> Mood {
    name.and_then(get).unwrap_or(DEFAULT)
}

pub fn exists(name: &str) -> bool {
    MOODS.contains_key(name)
}

/// All mood names in sorted order.
pub fn names() -> Vec<&'static str> {
    MOODS.keys().copied().collect()
}

pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    let names = names();
    names[rng.gen_range(0..names.len())]
}
