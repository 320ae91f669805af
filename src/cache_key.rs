//! Obscured cache keys for creature names.
//!
//! Filenames must not reveal the creature, so the name is hashed. The key is
//! the last 7 hex characters of the SHA-224 digest of the UTF-8 name.

use sha2::{Digest, Sha224};

/// Length of a cache key in hex characters
pub const CACHE_KEY_LEN: usize = 7;

/// Compute the cache key for a creature name
pub fn cache_key(name: &str) -> String {
    let digest = hex::encode(Sha224::digest(name.as_bytes()));
    digest[digest.len() - CACHE_KEY_LEN..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        assert_eq!(cache_key("Pikachu"), "64f4cf1");
        assert_eq!(cache_key("Raichu"), "0dee764");
    }

    #[test]
    fn test_key_stability() {
        assert_eq!(cache_key("Bulbasaur"), cache_key("Bulbasaur"));
    }

    #[test]
    fn test_different_names() {
        assert_ne!(cache_key("Pikachu"), cache_key("Raichu"));
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(cache_key("pikachu"), cache_key("Pikachu"));
    }

    #[test]
    fn test_key_format() {
        for name in ["Pikachu", "", "Nidoran♀", "Mr. Mime"] {
            let key = cache_key(name);
            assert_eq!(key.len(), CACHE_KEY_LEN);
            assert!(key
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }
}
