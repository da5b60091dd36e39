//! Record identifiers: short random alphanumeric strings.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 6;

/// Generate a random identifier of [`ID_LENGTH`] characters from `[A-Za-z0-9]`.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Generate identifiers until one is not `taken`.
///
/// 62^6 candidates make a retry rare for collections of this size.
pub fn generate_unique(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = generate();
        if !taken(&candidate) {
            return candidate;
        }
        tracing::debug!(candidate = %candidate, "identifier collision, regenerating");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_generate_length_and_alphabet() {
        for _ in 0..100 {
            let id = generate();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_unique_retries_on_collision() {
        let calls = Cell::new(0);
        let id = generate_unique(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert_eq!(id.len(), ID_LENGTH);
    }
}
