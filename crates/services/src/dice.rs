use eggsy_core::rng::Dice;
use rand::Rng;

/// `rand`-backed dice used outside of tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn chance(&mut self, p: f64) -> bool {
        rand::rng().random_bool(p.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_extremes_are_deterministic() {
        let mut dice = ThreadDice;
        assert!(!dice.chance(0.0));
        assert!(dice.chance(1.0));
    }

    #[test]
    fn pick_index_stays_in_range() {
        let mut dice = ThreadDice;
        for _ in 0..100 {
            assert!(dice.pick_index(6) < 6);
        }
    }
}
