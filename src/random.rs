use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const MODULUS: i64 = i32::MAX as i64;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for tie-breaking between equally scored moves.
///
/// Injected into the engine so production games use a real random source while tests and
/// simulations can replay the exact same choices.
pub trait RandomGenerator: Default {
    /// Returns a number in `from..to`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks a uniformly random element of `items`, or `None` if it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_range(0, items.len() as i32) as usize;
        items.get(index)
    }
}

/// Thread-local generator from the `rand` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic linear congruential generator.
///
/// Any `i64` is a valid seed; it is reduced modulo `i32::MAX` so the state update never
/// overflows.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    state: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(MODULUS),
        }
    }

    fn step(&mut self) -> i64 {
        self.state = (self.state * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.state
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.step() % (to - from) as i64) as i32 + from
    }
}
