/*
    Helpers for moving between bytes and their bit representation.

    The string helpers render bits as '0'/'1' digits. The codec itself
    packs and reads bits with integer operations through BitWriter and
    bits_at, which keep the same group boundaries (8-bit bytes, 11-bit
    word indices and the trailing checksum).
*/

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bip39::MnemonicErr;

/**
    Expands each byte into 8 binary digits, most significant bit first.
*/
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    bytes.iter().map(|x| format!("{:08b}", x)).collect::<String>()
}

/**
    Packs a string of binary digits back into bytes, 8 digits per byte.

    The length must be a multiple of 8 and only '0' and '1' are accepted.
*/
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>, MnemonicErr> {
    if bits.len() % 8 != 0 {
        return Err(MnemonicErr::InvalidBitString(
            format!("length {} is not a multiple of 8", bits.len())
        ))
    }

    let mut bytes: Vec<u8> = Vec::with_capacity(bits.len() / 8);
    for (i, chunk) in bits.as_bytes().chunks(8).enumerate() {
        let mut byte: u8 = 0;
        for (j, digit) in chunk.iter().enumerate() {
            byte = match digit {
                b'0' => byte << 1,
                b'1' => (byte << 1) | 1,
                _ => return Err(MnemonicErr::InvalidBitString(
                    format!("non-binary digit at offset {}", i * 8 + j)
                ))
            };
        }
        bytes.push(byte);
    }

    Ok(bytes)
}

/**
    Reads `width` bits (at most 16) starting at bit `offset`, most significant first.

    Callers guarantee the range lies inside `bytes`.
*/
pub(crate) fn bits_at(bytes: &[u8], offset: usize, width: usize) -> u16 {
    debug_assert!(width <= 16);
    (offset..offset + width).fold(0u16, |acc, i| {
        let bit = (bytes[i / 8] >> (7 - i % 8)) & 1;
        (acc << 1) | bit as u16
    })
}

/// Append-only bit buffer. Unused bits of the final byte stay zero.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    len: usize
}

impl BitWriter {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0
        }
    }

    /**
        Appends the low `width` bits of `value`, most significant first.
    */
    pub fn push(&mut self, value: u32, width: usize) {
        for i in (0..width).rev() {
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
