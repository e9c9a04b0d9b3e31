use std::{
    convert::Infallible,
    str::FromStr
};

use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    entropy,
    hash,
    util::{
        bits_at,
        BitWriter
    },
    OsRng
};
use super::{
    lang,
    MnemonicErr,
    PhraseLength,
    WORD_BIT_LEN
};

/**
    A mnemonic phrase.

    Only the space separated words are stored. A phrase built with
    from_phrase is not checked until it is decoded, validated or
    turned into a seed.
*/
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String
}

impl Mnemonic {
    /**
        Creates a random mnemonic of the given length using OsRng.
    */
    pub fn new(length: PhraseLength) -> Result<Self, MnemonicErr> {
        Self::new_with(&mut OsRng, length)
    }

    /**
        Creates a random mnemonic of the given length from the given random source.
    */
    pub fn new_with<R>(rng: &mut R, length: PhraseLength) -> Result<Self, MnemonicErr>
    where R: RngCore + CryptoRng
    {
        let entropy = Zeroizing::new(entropy::generate_with(rng, length.entropy_bits())?);
        Self::from_entropy(&entropy)
    }

    /**
        Creates a random mnemonic with `count` words.
        Fails unless `count` is 12, 15, 18, 21 or 24.
    */
    pub fn from_words_count(count: usize) -> Result<Self, MnemonicErr> {
        Self::new(PhraseLength::from_word_count(count)?)
    }

    /**
        Encodes entropy as a mnemonic.

        The entropy is followed by the leading (entropy bits / 32) bits of
        its SHA-256 hash, then cut into 11-bit groups that index the wordlist.
    */
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, MnemonicErr> {
        let length = PhraseLength::from_entropy_bits(entropy.len() * 8)?;
        let checksum_len = length.checksum_bits();

        //entropy || checksum
        let mut bits = BitWriter::with_capacity(length.word_count() * WORD_BIT_LEN);
        entropy.iter().for_each(|x| bits.push(*x as u32, 8));
        bits.push(checksum(entropy, checksum_len) as u32, checksum_len);

        let words: Vec<&str> = (0..length.word_count())
            .map(|i| lang::word_at(bits_at(bits.as_bytes(), i * WORD_BIT_LEN, WORD_BIT_LEN)))
            .collect();

        debug!(words = words.len(), "encoded mnemonic");
        Ok(Self {
            phrase: words.join(" ")
        })
    }

    /**
        Wraps an existing phrase without checking it.
    */
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            phrase: phrase.to_string()
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /**
        The words of the phrase, split on single spaces.
    */
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /**
        The table row matching the number of words, if there is one.
    */
    pub fn phrase_length(&self) -> Option<PhraseLength> {
        PhraseLength::from_word_count(self.word_count()).ok()
    }

    /**
        Decodes the phrase back into the entropy it was built from.
    */
    pub fn to_entropy(&self) -> Result<Vec<u8>, MnemonicErr> {
        let mut entropy = self.decode()?;
        Ok(std::mem::take(&mut *entropy))
    }

    /**
        Checks the word count, that every word is in the wordlist and the checksum.
        Errors are reported in that order.
    */
    pub fn validate(&self) -> Result<(), MnemonicErr> {
        self.decode().map(|_| ())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /**
        Rebuilds the entropy from the phrase and checks it against the
        trailing checksum bits.
    */
    fn decode(&self) -> Result<Zeroizing<Vec<u8>>, MnemonicErr> {
        let words: Vec<&str> = self.words().collect();
        let length = PhraseLength::from_word_count(words.len())?;

        let mut bits = BitWriter::with_capacity(words.len() * WORD_BIT_LEN);
        for (position, word) in words.iter().enumerate() {
            let index = lang::index_of(word).ok_or(MnemonicErr::InvalidWord { position })?;
            bits.push(index as u32, WORD_BIT_LEN);
        }

        //The checksum takes 1 of every 33 bits
        let checksum_len = bits.len() / 33;
        let entropy_len = bits.len() - checksum_len;
        debug_assert_eq!(checksum_len, length.checksum_bits());

        let entropy = Zeroizing::new(bits.as_bytes()[..entropy_len / 8].to_vec());
        if bits_at(bits.as_bytes(), entropy_len, checksum_len) != checksum(&entropy, checksum_len) {
            return Err(MnemonicErr::ChecksumMismatch)
        }

        Ok(entropy)
    }
}

/**
    The leading `len` bits of SHA-256(entropy).
*/
fn checksum(entropy: &[u8], len: usize) -> u16 {
    bits_at(&hash::sha256(entropy), 0, len)
}

impl From<&str> for Mnemonic {
    fn from(phrase: &str) -> Self {
        Self::from_phrase(phrase)
    }
}

impl From<String> for Mnemonic {
    fn from(phrase: String) -> Self {
        Self { phrase }
    }
}

impl FromStr for Mnemonic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_phrase(s))
    }
}
