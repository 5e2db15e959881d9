mod log_capture;

pub use log_capture::{capture_logs, LogCapture};

use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{distributions::Alphanumeric, random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seed for `scope`, read once from the env var of the same name or drawn at
/// random. Printed so a failing run can be replayed.
fn resolve_seed(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = env::var(scope)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, scope);
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(resolve_seed(scope)?))
}

/// A `(latitude, longitude)` pair within the valid geographic bounds.
pub fn random_coordinates(rng: &mut impl Rng) -> (f64, f64) {
    (rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

pub fn random_label(rng: &mut impl Rng, prefix: &str) -> String {
    let suffix = rng
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>();
    format!("{prefix}-{suffix}")
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{get_seeded_rng_from_scope, random_coordinates, random_label, resolve_seed, seeds};

    #[test]
    fn test_get_seeded_rng_from_scope() {
        // Given
        let scope = "test_get_seeded_rng_from_scope";
        let seed = 1u64;
        env::set_var(scope, seed.to_string());

        // When
        get_seeded_rng_from_scope(scope).unwrap();

        // Then
        assert!(seeds().read().unwrap().contains_key(scope));
        assert_eq!(seed, resolve_seed(scope).unwrap())
    }

    #[test]
    fn test_random_helpers() {
        // Given
        let mut rng = get_seeded_rng_from_scope("test_random_helpers").unwrap();

        // When
        let (latitude, longitude) = random_coordinates(&mut rng);
        let label = random_label(&mut rng, "courier");

        // Then
        assert!((-90.0..=90.0).contains(&latitude));
        assert!((-180.0..=180.0).contains(&longitude));
        assert!(label.starts_with("courier-"));
        assert_eq!("courier-".len() + 6, label.len());
    }
}
