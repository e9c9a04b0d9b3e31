/*
    Random entropy for new mnemonics.

    Only the bit lengths listed in PhraseLength are accepted.
*/

use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

use crate::{
    bip39::{
        MnemonicErr,
        PhraseLength
    },
    OsRng
};

/**
    Generates `bit_len` bits of entropy using OsRng.
*/
pub fn generate(bit_len: usize) -> Result<Vec<u8>, MnemonicErr> {
    generate_with(&mut OsRng, bit_len)
}

/**
    Generates `bit_len` bits of entropy from the given random source.

    Nothing is returned if the length is not permitted or the source fails.
*/
pub fn generate_with<R>(rng: &mut R, bit_len: usize) -> Result<Vec<u8>, MnemonicErr>
where R: RngCore + CryptoRng
{
    let length = PhraseLength::from_entropy_bits(bit_len)?;
    trace!(bits = bit_len, "generating entropy");

    let mut bytes: Vec<u8> = vec![0; length.entropy_bytes()];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        bytes.zeroize();
        return Err(MnemonicErr::Rng(e))
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 { 0 }
        fn next_u64(&mut self) -> u64 { 0 }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for x in dest.iter_mut() { *x = 0; }
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn valid_lengths() {
        for bits in [128, 160, 192, 224, 256].iter() {
            let entropy = generate(*bits).unwrap();
            assert_eq!(entropy.len() * 8, *bits);
        }
    }

    #[test]
    fn invalid_lengths() {
        for bits in [127, 129, 159, 161, 191, 193, 223, 225, 255, 257].iter() {
            assert!(matches!(
                generate(*bits),
                Err(MnemonicErr::InvalidEntropyLength(b)) if b == *bits
            ));
        }
    }

    #[test]
    fn injected_source_is_used() {
        let a = generate_with(&mut StdRng::seed_from_u64(7), 256).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(7), 256).unwrap();
        let c = generate_with(&mut StdRng::seed_from_u64(8), 256).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn source_failure_is_propagated() {
        assert!(matches!(generate_with(&mut FailingRng, 128), Err(MnemonicErr::Rng(_))));
    }

    #[test]
    fn length_is_checked_before_the_source() {
        assert!(matches!(
            generate_with(&mut FailingRng, 100),
            Err(MnemonicErr::InvalidEntropyLength(100))
        ));
    }
}
