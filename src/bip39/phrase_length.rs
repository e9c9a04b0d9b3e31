/*
    The permitted mnemonic sizes.

    Every size is derived from the entropy length:
        checksum bits = entropy bits / 32
        words         = (entropy bits + checksum bits) / 11

    Both entropy generation and mnemonic validation check lengths
    against this one table.
*/

use super::{
    MnemonicErr,
    WORD_BIT_LEN
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseLength {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour
}

impl PhraseLength {
    pub const ALL: [PhraseLength; 5] = [
        PhraseLength::Twelve,
        PhraseLength::Fifteen,
        PhraseLength::Eighteen,
        PhraseLength::TwentyOne,
        PhraseLength::TwentyFour
    ];

    /**
        Entropy size in bits.
    */
    pub fn entropy_bits(self) -> usize {
        match self {
            PhraseLength::Twelve => 128,
            PhraseLength::Fifteen => 160,
            PhraseLength::Eighteen => 192,
            PhraseLength::TwentyOne => 224,
            PhraseLength::TwentyFour => 256
        }
    }

    pub fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /**
        Checksum size in bits. One bit per 32 bits of entropy,
        equivalently one bit per 3 words.
    */
    pub fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn word_count(self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / WORD_BIT_LEN
    }

    /**
        Looks up the row for an entropy size given in bits.
    */
    pub fn from_entropy_bits(bits: usize) -> Result<Self, MnemonicErr> {
        Self::ALL.iter()
            .copied()
            .find(|x| x.entropy_bits() == bits)
            .ok_or(MnemonicErr::InvalidEntropyLength(bits))
    }

    /**
        Looks up the row for a phrase of `count` words.
    */
    pub fn from_word_count(count: usize) -> Result<Self, MnemonicErr> {
        Self::ALL.iter()
            .copied()
            .find(|x| x.word_count() == count)
            .ok_or(MnemonicErr::InvalidWordsCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_bip39() {
        let expected: [(usize, usize, usize); 5] = [
            (128, 4, 12),
            (160, 5, 15),
            (192, 6, 18),
            (224, 7, 21),
            (256, 8, 24)
        ];

        for (length, (ent, cs, words)) in PhraseLength::ALL.iter().zip(expected.iter()) {
            assert_eq!(length.entropy_bits(), *ent);
            assert_eq!(length.checksum_bits(), *cs);
            assert_eq!(length.word_count(), *words);
            assert_eq!(length.entropy_bytes() * 8, *ent);
        }
    }

    #[test]
    fn checksum_is_one_bit_per_three_words() {
        for length in PhraseLength::ALL.iter() {
            let n = length.word_count();
            assert_eq!(length.checksum_bits(), n / 3);
            assert_eq!(length.entropy_bits(), n * 11 - n / 3);
            assert_eq!(length.checksum_bits(), n * 11 / 33);
        }
    }

    #[test]
    fn lookups_round_trip() {
        for length in PhraseLength::ALL.iter() {
            assert_eq!(PhraseLength::from_entropy_bits(length.entropy_bits()).unwrap(), *length);
            assert_eq!(PhraseLength::from_word_count(length.word_count()).unwrap(), *length);
        }
    }

    #[test]
    fn unknown_sizes_are_rejected() {
        for bits in [0, 8, 127, 129, 159, 161, 191, 193, 223, 225, 255, 257, 512].iter() {
            assert!(matches!(
                PhraseLength::from_entropy_bits(*bits),
                Err(MnemonicErr::InvalidEntropyLength(b)) if b == *bits
            ));
        }

        for count in [0, 1, 11, 13, 16, 19, 25, 48].iter() {
            assert!(matches!(
                PhraseLength::from_word_count(*count),
                Err(MnemonicErr::InvalidWordsCount(c)) if c == *count
            ));
        }
    }
}
