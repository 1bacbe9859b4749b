//! Addition question generation.

use rand::Rng;

/// Generate an addition question with operands drawn from an injected RNG.
///
/// Both operands are drawn independently and uniformly from
/// `[1, ceiling + 5]`. Injecting the RNG keeps generation reproducible
/// under a seeded `StdRng` in tests.
pub fn generate_addition_question<R: Rng>(rng: &mut R, ceiling: u32) -> String {
    let upper = ceiling.saturating_add(5);
    let a = rng.gen_range(1..=upper);
    let b = rng.gen_range(1..=upper);
    format!("What is {a} + {b}?")
}

/// Generate an addition question using the thread-local RNG.
pub fn generate_next_addition_question(ceiling: u32) -> String {
    generate_addition_question(&mut rand::thread_rng(), ceiling)
}
