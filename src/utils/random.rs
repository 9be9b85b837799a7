//! Random fixtures for tests. One seeded generator per process; set
//! `TEST_SEED` to replay a failing run.

use std::sync::{LazyLock, Mutex};

use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    models::{CreateProductRequest, ProductStatus},
    repository::{CreateProductParams, ProductRow},
};

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

static RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    let seed = std::env::var("TEST_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    Mutex::new(StdRng::seed_from_u64(seed))
});

fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let mut rng = RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut rng)
}

pub fn string(length: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    with_rng(|rng| {
        (0..length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect()
    })
}

pub fn product_name() -> String {
    format!("{} {}", string(6, ALPHABET), string(6, ALPHABET))
}

pub fn product_description() -> String {
    string(20, ALPHABET)
}

pub fn product_price() -> String {
    format!("{}.{}", string(3, "123456789"), string(2, "0123456789"))
}

pub fn product_id() -> i32 {
    with_rng(|rng| rng.random_range(1..1000))
}

pub fn product_status() -> ProductStatus {
    const STATUSES: [ProductStatus; 3] = [
        ProductStatus::Available,
        ProductStatus::OutOfStock,
        ProductStatus::Inactive,
    ];
    with_rng(|rng| STATUSES[rng.random_range(0..STATUSES.len())])
}

pub fn create_request() -> CreateProductRequest {
    CreateProductRequest {
        name: product_name(),
        price: product_price(),
        description: product_description(),
    }
}

pub fn create_params() -> CreateProductParams {
    create_request().to_params()
}

pub fn product_row() -> ProductRow {
    let created_at = Utc::now() - Duration::minutes(with_rng(|rng| rng.random_range(1..10_000)));
    ProductRow {
        id: product_id(),
        name: product_name(),
        price: product_price(),
        description: product_description(),
        status: product_status(),
        created_at,
        updated_at: created_at + Duration::seconds(with_rng(|rng| rng.random_range(0..3600))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_valid_price;

    #[test]
    fn fixtures_satisfy_validation() {
        for _ in 0..50 {
            assert!(is_valid_price(&product_price()));
            assert!(create_request().validate().is_ok());
            assert!(product_id() >= 1);
        }
    }
}
