//! The fixed pool of suggested player names.
//!
//! Entering name entry pre-fills one suggestion per player, sampled
//! without replacement so a group never starts with duplicates. Names are
//! free text afterwards; players can edit, clear, or duplicate them.

use crate::core::GameRng;

/// Suggested names offered on the name-entry screen.
pub const NAME_POOL: [&str; 35] = [
    "Unicorn", "Ninja", "Rainbow", "Pirate", "Dragon", "Banana", "Robot", "Princess",
    "Superstar", "Kitty", "Wizard", "Dino", "Captain", "Pumpkin", "Starfish",
    "Koala", "Rocket", "Zebra", "Panda", "Sparkle", "Gummy Bear", "Jellyfish",
    "Laser Cat", "Choco Chip", "Bubble", "Cupcake", "Tornado", "Pickle", "Giggles",
    "Rainbow Fox", "Mango", "Marshmallow", "Tiger Cub", "Snowball", "Happy Hippo",
];

/// Sample `count` suggested names.
///
/// Sampling is without replacement while the pool lasts, so requests within
/// normal configuration bounds (at most 6 players against a 35-name pool)
/// are always distinct. A degenerate request larger than the pool wraps
/// around and repeats rather than failing.
#[must_use]
pub fn suggest(count: usize, rng: &mut GameRng) -> Vec<String> {
    let mut order: Vec<usize> = (0..NAME_POOL.len()).collect();
    rng.shuffle(&mut order);

    (0..count)
        .map(|i| NAME_POOL[order[i % order.len()]].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_count_and_membership() {
        let mut rng = GameRng::new(7);
        let names = suggest(6, &mut rng);

        assert_eq!(names.len(), 6);
        for name in &names {
            assert!(NAME_POOL.contains(&name.as_str()));
        }
    }

    #[test]
    fn test_suggest_distinct_within_pool() {
        let mut rng = GameRng::new(7);
        let names = suggest(NAME_POOL.len(), &mut rng);

        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), NAME_POOL.len());
    }

    #[test]
    fn test_suggest_deterministic_per_seed() {
        let a = suggest(4, &mut GameRng::new(42));
        let b = suggest(4, &mut GameRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_suggest_beyond_pool_repeats() {
        let mut rng = GameRng::new(1);
        let names = suggest(NAME_POOL.len() + 3, &mut rng);

        assert_eq!(names.len(), NAME_POOL.len() + 3);
        // Wrap-around mirrors the shuffled order.
        assert_eq!(names[NAME_POOL.len()], names[0]);
        assert_eq!(names[NAME_POOL.len() + 2], names[2]);
    }
}
