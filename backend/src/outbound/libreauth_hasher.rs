//! Argon2 password hashing through `libreauth`.
//!
//! Hashes are PHC strings carrying their own algorithm parameters and scheme
//! version, so verification rebuilds the hasher from the stored string.

use libreauth::pass::{Algorithm, HashBuilder};

use crate::domain::{PASSWORD_MAX, PasswordHash};
use crate::domain::ports::{PasswordHashError, PasswordHasher};

const PWD_ALGORITHM: Algorithm = Algorithm::Argon2;
// Bump when the hasher settings change so old hashes stay identifiable.
const PWD_SCHEME_VERSION: usize = 1;
const PWD_MIN_LEN: usize = 1;

/// [`PasswordHasher`] backed by libreauth's Argon2 implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibreauthPasswordHasher;

impl PasswordHasher for LibreauthPasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let hasher = HashBuilder::new()
            .algorithm(PWD_ALGORITHM)
            .version(PWD_SCHEME_VERSION)
            .min_len(PWD_MIN_LEN)
            .max_len(PASSWORD_MAX)
            .finalize()
            .map_err(|err| PasswordHashError::hash(format!("{err:?}")))?;
        hasher
            .hash(password)
            .map(PasswordHash::from_phc)
            .map_err(|err| PasswordHashError::hash(format!("{err:?}")))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let checker = HashBuilder::from_phc(hash.as_str())
            .map_err(|err| PasswordHashError::malformed_hash(format!("{err:?}")))?;
        Ok(checker.is_valid(password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> PasswordHash {
        LibreauthPasswordHasher.hash("pw1").expect("hashing succeeds")
    }

    #[rstest]
    fn hash_is_not_plaintext(stored: PasswordHash) {
        assert_ne!(stored.as_str(), "pw1");
        assert!(stored.as_str().starts_with('$'));
    }

    #[rstest]
    #[case("pw1", true)]
    #[case("pw2", false)]
    #[case("", false)]
    fn verify_matches_only_the_original(
        stored: PasswordHash,
        #[case] attempt: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            LibreauthPasswordHasher.verify(attempt, &stored).expect("parsable hash"),
            expected
        );
    }

    #[rstest]
    fn longest_accepted_password_hashes() {
        let password = "p".repeat(PASSWORD_MAX);
        let stored = LibreauthPasswordHasher.hash(&password).expect("within bounds");
        assert!(LibreauthPasswordHasher.verify(&password, &stored).expect("parsable hash"));
    }

    #[rstest]
    fn hashes_are_salted() {
        let first = LibreauthPasswordHasher.hash("same").expect("hash");
        let second = LibreauthPasswordHasher.hash("same").expect("hash");
        assert_ne!(first.as_str(), second.as_str());
    }

    #[rstest]
    fn malformed_hash_is_reported() {
        let err = LibreauthPasswordHasher
            .verify("pw1", &PasswordHash::from_phc("plaintext"))
            .expect_err("not a phc string");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }
}
