/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_mnemonic::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    bip39::{
        MnemonicErr,
        Mnemonic,
        PhraseLength,
        Seed,
        WORD_BIT_LEN,
        lang::{
            index_of,
            word_at,
            WORDS
        }
    },

    entropy::{
        generate as generate_entropy,
        generate_with as generate_entropy_with
    },

    util::{
        bytes_to_bits,
        bits_to_bytes
    }

};
