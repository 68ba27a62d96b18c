use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::errors::{RenderError, RenderResult};

/// Cow used when nothing else is requested.
pub const DEFAULT: &str = "default";

/// Sentinel cow name asking for a random cow.
pub const RANDOM: &str = "random";

macro_rules! cows {
    ($($name:literal),* $(,)?) => {
        [$(($name, include_str!(concat!("cows/", $name, ".cow")))),*]
    };
}

static COWS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from(cows![
        "bud-frogs",
        "bunny",
        "default",
        "dragon",
        "elephant",
        "head-in",
        "hellokitty",
        "kitty",
        "koala",
        "moose",
        "mutilated",
        "sheep",
        "small",
        "tux",
        "udder",
    ])
});

/// Template for `name`, if the catalog has it.
pub fn get(name: &str) -> RenderResult<&'static str> {
    COWS.get(name)
        .copied()
        .ok_or_else(|| RenderError::UnknownCharacter(name.to_string()))
}

pub fn exists(name: &str) -> bool {
    COWS.contains_key(name)
}

/// All cow names in sorted order.
pub fn names() -> Vec<&'static str> {
    COWS.keys().copied().collect()
}

pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    let names = names();
    names[rng.gen_range(0..names.len())]
}

/// Maps the `random` sentinel to a concrete cow; other names pass through.
pub fn resolve<'a, R: rand::Rng + ?Sized>(name: &'a str, rng: &mut R) -> &'a str {
    if name == RANDOM {
        random(rng)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{render_figure, Face};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_exists() {
        assert!(exists("default"));
        assert!(exists("dragon"));
        assert!(!exists("nonexistent"));
        assert!(!exists(""));
        assert!(!exists(RANDOM));
    }

    #[test]
    fn test_unknown_cow() {
        assert_eq!(
            get("nonexistent"),
            Err(RenderError::UnknownCharacter("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_names_sorted_and_complete() {
        let names = names();
        assert_eq!(names.len(), 15);
        assert_eq!(names.first(), Some(&"bud-frogs"));
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_every_template_renders() {
        let face = Face {
            eyes: "oo",
            tongue: "  ",
            thoughts: "\\",
        };
        for name in names() {
            let template = get(name).unwrap();
            let out = render_figure(name, template, &face)
                .unwrap_or_else(|e| panic!("{name} failed to render: {e}"));
            assert!(!out.contains("$thoughts"), "{name}");
            assert!(out.ends_with('\n'), "{name} should end with a newline");
        }
    }

    #[test]
    fn test_resolve_random() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(resolve("dragon", &mut rng), "dragon");
        assert_eq!(resolve("nonexistent", &mut rng), "nonexistent");
        for _ in 0..32 {
            assert!(exists(resolve(RANDOM, &mut rng)));
        }
    }
}
