use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Build the generator handed to the array generator.
///
/// A fixed seed makes the whole benchmark input reproducible; `None` draws
/// the seed from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
