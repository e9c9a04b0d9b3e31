/*
    This module implements the BIP-39 standard
    for mnemonic phrases.

    Entropy of 128 to 256 bits is extended with a SHA-256 checksum and
    split into 11-bit groups, each naming one word of the English wordlist.
    The phrase and an optional passphrase stretch into a 64 byte seed.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki
*/

pub mod lang;
mod mnemonic;
mod phrase_length;
mod seed;

pub use mnemonic::Mnemonic as Mnemonic;
pub use phrase_length::PhraseLength as PhraseLength;
pub use seed::Seed as Seed;

/// Number of bits encoded by one word.
pub const WORD_BIT_LEN: usize = 11;

/**
    Errors returned by entropy generation, mnemonic decoding and seed derivation.
*/
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MnemonicErr {
    #[error("invalid entropy length: {0} bits, expected 128, 160, 192, 224 or 256")]
    InvalidEntropyLength(usize),

    #[error("invalid word count: {0}, expected 12, 15, 18, 21 or 24")]
    InvalidWordsCount(usize),

    #[error("word at position {position} is not in the wordlist")]
    InvalidWord { position: usize },

    #[error("mnemonic checksum does not match")]
    ChecksumMismatch,

    #[error("invalid bit string: {0}")]
    InvalidBitString(String),

    #[error("PBKDF2 key derivation failed")]
    KeyDerivation,

    #[error(transparent)]
    Rng(#[from] rand::Error)
}
