use rand::seq::SliceRandom;
use rand::Rng;

/// Shown when the computer takes its turn.
pub const TAUNTS: &[&str] = &[
    "I'm making my move!",
    "Thinking...",
    "Your move, human!",
    "I see your strategy.",
    "Think you can beat me?",
    "This will be interesting!",
    "Your turn!",
    "Hmm, interesting.",
    "Let's see what you got!",
    "I'm ready for this.",
    "Here goes nothing.",
    "Bring it on!",
    "I won't go easy on you!",
];

pub fn random_taunt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TAUNTS.choose(rng).copied().unwrap_or("Thinking...")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_taunt_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(TAUNTS.contains(&random_taunt(&mut rng)));
        }
    }

    #[test]
    fn test_taunts_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..200).map(|_| random_taunt(&mut rng)).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_same_seed_same_taunts() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(random_taunt(&mut a), random_taunt(&mut b));
        }
    }
}
