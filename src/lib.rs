/*
    Library implementing the BIP-0039 standard
    for mnemonic codes.

    Converts entropy into a phrase of words from the English wordlist,
    decodes and validates phrases back into entropy, and stretches a
    phrase plus passphrase into a 64 byte seed for BIP-32 wallets.

    References:
        - BIP-0039 (https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)

        - Trezor reference vectors (https://github.com/trezor/python-mnemonic/blob/master/vectors.json)
            used by the test suite

    Every operation is a pure function of its inputs apart from entropy
    generation, which reads the OS random source. Nothing is cached and
    the wordlist is a read only static, so all types are Send + Sync.
*/

//Outward facing modules
pub mod bip39;
pub mod entropy;
pub mod util;
pub mod prelude;

//Modules for internal use
mod hash;
mod impls;

//Dependencies
use rand::rngs::OsRng;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::{Sha256, Sha512, Digest};

pub use bip39::{
    Mnemonic,
    MnemonicErr,
    PhraseLength,
    Seed
};

pub type Result<T> = std::result::Result<T, MnemonicErr>;
