/*
    Seed derivation from a mnemonic phrase.

    seed = PBKDF2-HMAC-SHA512(phrase, "mnemonic" || passphrase, 2048 rounds, 64 bytes)
*/

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::hash;
use super::{
    Mnemonic,
    MnemonicErr
};

/// Salt prefix for seed derivation.
pub const SEED_SALT_PREFIX: &str = "mnemonic";
/// PBKDF2 iteration count.
pub const SEED_PBKDF2_ROUNDS: u32 = 2048;
/// Seed length in bytes.
pub const SEED_LEN: usize = 64;

/**
    A 512 bit seed for hierarchical key derivation.
*/
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl Mnemonic {
    /**
        Stretches the phrase and passphrase into a seed.

        The phrase is fully validated first and any validation error is
        returned as is. An empty passphrase is allowed.
    */
    pub fn generate_seed(&self, passphrase: &str) -> Result<Seed, MnemonicErr> {
        self.validate()?;

        let salt = Zeroizing::new(format!("{}{}", SEED_SALT_PREFIX, passphrase));
        let mut seed = Seed([0; SEED_LEN]);

        trace!(rounds = SEED_PBKDF2_ROUNDS, "deriving seed");
        hash::pbkdf2_hmac_sha512(self.phrase().as_bytes(), salt.as_bytes(), SEED_PBKDF2_ROUNDS, &mut seed.0)?;

        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn trezor_vector() {
        let seed = Mnemonic::from_phrase(ZERO_12).generate_seed("TREZOR").unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn empty_passphrase() {
        let seed = Mnemonic::from_phrase(ZERO_12).generate_seed("").unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn deterministic_and_passphrase_sensitive() {
        let m = Mnemonic::from_phrase(ZERO_12);
        let a = m.generate_seed("TREZOR").unwrap();
        let b = m.generate_seed("TREZOR").unwrap();
        let c = m.generate_seed("trezor").unwrap();

        assert!(a == b);
        assert!(a != c);
        assert_eq!(a.to_vec().len(), SEED_LEN);
    }

    #[test]
    fn invalid_mnemonic_gives_no_seed() {
        let bad_count = Mnemonic::from_phrase("abandon abandon");
        assert!(matches!(bad_count.generate_seed(""), Err(MnemonicErr::InvalidWordsCount(2))));

        let bad_word = Mnemonic::from_phrase(&ZERO_12.replace("about", "abut"));
        assert!(matches!(bad_word.generate_seed(""), Err(MnemonicErr::InvalidWord { position: 11 })));

        let bad_checksum = Mnemonic::from_phrase(&ZERO_12.replace("about", "any"));
        assert!(matches!(bad_checksum.generate_seed(""), Err(MnemonicErr::ChecksumMismatch)));
    }
}
