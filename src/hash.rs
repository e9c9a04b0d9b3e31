/*
    Hash functions used by the mnemonic codec and seed derivation.
*/

use crate::{
    bip39::MnemonicErr,
    pbkdf2, Hmac, Sha256, Sha512, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/**
    PBKDF2 with HMAC-SHA512 as the pseudo random function. Fills `out`.
*/
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<(), MnemonicErr> {
    pbkdf2::<Hmac<Sha512>>(password, salt, rounds, out).map_err(|_| MnemonicErr::KeyDerivation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_answer() {
        assert_eq!(
            crate::util::bytes_to_bits(&sha256(b"abc")[0..2]),
            "1011101001111000"
        );
        assert_eq!(sha256([0u8; 16])[0], 0x37);
    }

    #[test]
    fn pbkdf2_sha512_known_answer() {
        //PBKDF2-HMAC-SHA512("password", "salt", 1, 64)
        let mut out = [0u8; 64];
        pbkdf2_hmac_sha512(b"password", b"salt", 1, &mut out).unwrap();
        assert_eq!(
            hex::encode(&out[..]),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }
}
