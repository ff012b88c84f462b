//! AES-CFB8 stream cipher
//!
//! CFB with an 8-bit feedback segment: every byte of keystream is the first byte of the AES
//! encryption of a 16-byte shift register, the register then drops its oldest byte and takes the
//! ciphertext byte. The block cipher is always run in the encryption direction, for both
//! encryption and decryption. Output length always equals input length, no padding.
use crate::codec::hex_to_bytes;
use crate::consts::{AES128_KEY_LEN, AES192_KEY_LEN, AES256_KEY_LEN, AES_BLOCK_LEN, AES_IV_LEN};
use crate::{ErrorKind, VectorTrait};
use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use alloc::vec::Vec;

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with_bincode", derive(bincode::Encode, bincode::Decode))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    #[inline]
    pub fn from_encrypt(encrypt: bool) -> Self {
        if encrypt {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        }
    }
}

/// Validated key and IV
///
/// The key length selects AES-128, AES-192 or AES-256. Lengths are never truncated or padded.
#[derive(Clone)]
pub struct CipherParams {
    key: Vec<u8>,
    iv: [u8; AES_IV_LEN],
    cipher: BlockCipher,
}

impl CipherParams {
    /// Errors:
    ///
    /// * **InvalidKeyLength** key is not 16, 24 or 32 bytes
    /// * **InvalidIVLength** IV is not 16 bytes
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, ErrorKind> {
        let cipher = BlockCipher::new(key).map_err(|e| {
            warn!("rejected cipher key of {} bytes", key.len());
            e
        })?;
        let iv: [u8; AES_IV_LEN] = iv.try_into().map_err(|_| {
            warn!("rejected cipher IV of {} bytes", iv.len());
            ErrorKind::InvalidIVLength
        })?;
        Ok(Self {
            key: key.to_vec(),
            iv,
            cipher,
        })
    }

    /// Key and IV given as hex strings
    ///
    /// Errors: same as [`CipherParams::new`], plus **MalformedHex**
    pub fn from_hex(key_hex: &str, iv_hex: &str) -> Result<Self, ErrorKind> {
        Self::new(&hex_to_bytes(key_hex)?, &hex_to_bytes(iv_hex)?)
    }

    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    #[inline]
    pub fn iv(&self) -> &[u8; AES_IV_LEN] {
        &self.iv
    }
}

impl PartialEq for CipherParams {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.iv == other.iv
    }
}

impl Eq for CipherParams {}

// the key is never printed
impl core::fmt::Debug for CipherParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherParams")
            .field("key_len", &self.key.len())
            .field("iv", &self.iv)
            .finish()
    }
}

#[derive(Clone)]
enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    fn new(key: &[u8]) -> Result<Self, ErrorKind> {
        match key.len() {
            AES128_KEY_LEN => Ok(BlockCipher::Aes128(Aes128::new(GenericArray::from_slice(key)))),
            AES192_KEY_LEN => Ok(BlockCipher::Aes192(Aes192::new(GenericArray::from_slice(key)))),
            AES256_KEY_LEN => Ok(BlockCipher::Aes256(Aes256::new(GenericArray::from_slice(key)))),
            _ => Err(ErrorKind::InvalidKeyLength),
        }
    }

    #[inline]
    fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_LEN]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            BlockCipher::Aes128(c) => c.encrypt_block(block),
            BlockCipher::Aes192(c) => c.encrypt_block(block),
            BlockCipher::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// Resumable CFB8 state
///
/// Feeding a buffer in several parts gives the same output as feeding it at once, so a firmware
/// image can be processed window by window.
#[derive(Clone)]
pub struct Cfb8 {
    cipher: BlockCipher,
    register: [u8; AES_BLOCK_LEN],
    direction: Direction,
}

impl Cfb8 {
    pub fn new(params: &CipherParams, direction: Direction) -> Self {
        Self {
            cipher: params.cipher.clone(),
            register: params.iv,
            direction,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn process_byte(&mut self, input: u8) -> u8 {
        let mut keystream = self.register;
        self.cipher.encrypt_block(&mut keystream);
        let output = input ^ keystream[0];
        let feedback = match self.direction {
            Direction::Encrypt => output,
            Direction::Decrypt => input,
        };
        self.register.copy_within(1.., 0);
        self.register[AES_BLOCK_LEN - 1] = feedback;
        output
    }

    /// Process the buffer in place
    pub fn apply(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.process_byte(*b);
        }
    }

    /// Process the data, pushing the output to the vector
    ///
    /// On **OOB** the cipher state has already consumed the bytes which were written.
    pub fn apply_into<V: VectorTrait<u8>>(
        &mut self,
        data: &[u8],
        result: &mut V,
    ) -> Result<(), ErrorKind> {
        for b in data {
            let out = self.process_byte(*b);
            result.push(out)?;
        }
        Ok(())
    }
}

/// One-shot AES-CFB8
pub fn aes_cfb8(direction: Direction, data: &[u8], params: &CipherParams) -> Vec<u8> {
    let mut result = data.to_vec();
    Cfb8::new(params, direction).apply(&mut result);
    result
}

/// One-shot AES-CFB8 with the IV and key given as hex strings
///
/// Errors:
///
/// * **MalformedHex** IV or key are not valid hex
/// * **InvalidKeyLength** / **InvalidIVLength**
pub fn aes_cfb8_hex(
    direction: Direction,
    data: &[u8],
    iv_hex: &str,
    key_hex: &str,
) -> Result<Vec<u8>, ErrorKind> {
    let params = CipherParams::from_hex(key_hex, iv_hex)?;
    Ok(aes_cfb8(direction, data, &params))
}

/// Errors:
///
/// * **InvalidKeyLength** key is not 16, 24 or 32 bytes
/// * **InvalidIVLength** IV is not 16 bytes
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let params = CipherParams::new(key, iv)?;
    Ok(aes_cfb8(Direction::Encrypt, plaintext, &params))
}

/// Errors: same as [`encrypt`]
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let params = CipherParams::new(key, iv)?;
    Ok(aes_cfb8(Direction::Decrypt, ciphertext, &params))
}
