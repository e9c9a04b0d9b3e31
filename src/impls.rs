/*
    This module combines all the boilerplate
    implementations of fmt::Display and more.

    Debug output never includes words or seed bytes.
*/

use crate::bip39::{
    Mnemonic,
    PhraseLength,
    Seed
};
use std::fmt;

/*
    bip39 module impls
*/
impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
         .field("words", &self.word_count())
         .finish_non_exhaustive()
    }
}

impl fmt::LowerHex for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in self.as_bytes().iter() {
            write!(f, "{:02x}", x)?;
        }
        Ok(())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl fmt::Display for PhraseLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} words", self.word_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_formatting() {
        let m = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(m.to_string(), m.phrase());
        assert_eq!(format!("{:?}", m), "Mnemonic { words: 12, .. }");
    }

    #[test]
    fn seed_formatting() {
        let seed = Mnemonic::from_entropy(&[0u8; 16]).unwrap().generate_seed("TREZOR").unwrap();
        assert_eq!(seed.to_string(), hex::encode(seed.as_bytes()));
        assert_eq!(format!("{:x}", seed), seed.to_string());
        assert_eq!(format!("{:?}", seed), "Seed(..)");
    }

    #[test]
    fn phrase_length_formatting() {
        assert_eq!(PhraseLength::TwentyOne.to_string(), "21 words");
    }
}
