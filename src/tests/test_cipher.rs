use crate::cipher::*;
use crate::codec::{hex_to_bytes, to_hex};
use crate::ErrorKind;
use cfb8::cipher::{AsyncStreamCipher, KeyIvInit};
use rand::Rng;

const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
const NIST_PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d";

// NIST SP 800-38A, F.3.7 / F.3.9 / F.3.11
const NIST_VECTORS: [(&str, &str); 3] = [
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3b79424c9c0dd436bace9e0ed4586a4f32b9",
    ),
    (
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        "cda2521ef0a905ca44cd057cbf0d47a0678a",
    ),
    (
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        "dc1f1a8520a64db55fcc8ac554844e889700",
    ),
];

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn test_cipher_nist_vectors() {
    let plaintext = hex_to_bytes(NIST_PLAINTEXT).unwrap();
    for (key, expected) in NIST_VECTORS {
        let params = CipherParams::from_hex(key, NIST_IV).unwrap();
        let ciphertext = aes_cfb8(Direction::Encrypt, &plaintext, &params);
        assert_eq!(to_hex(&ciphertext), expected);
        assert_eq!(aes_cfb8(Direction::Decrypt, &ciphertext, &params), plaintext);
        let via_hex =
            aes_cfb8_hex(Direction::from_encrypt(true), &plaintext, NIST_IV, key).unwrap();
        assert_eq!(via_hex, ciphertext);
    }
}

#[test]
fn test_cipher_matches_reference() {
    let mut rng = rand::thread_rng();
    let iv = random_bytes(16);
    for key_len in [16, 24, 32] {
        let key = random_bytes(key_len);
        let data = random_bytes(rng.gen_range(0, 200));
        let ours = encrypt(&data, &key, &iv).unwrap();
        let mut reference = data.clone();
        match key_len {
            16 => cfb8::Encryptor::<aes::Aes128>::new_from_slices(&key, &iv)
                .unwrap()
                .encrypt(&mut reference),
            24 => cfb8::Encryptor::<aes::Aes192>::new_from_slices(&key, &iv)
                .unwrap()
                .encrypt(&mut reference),
            _ => cfb8::Encryptor::<aes::Aes256>::new_from_slices(&key, &iv)
                .unwrap()
                .encrypt(&mut reference),
        }
        assert_eq!(ours, reference);
    }
}

#[test]
fn test_cipher_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let key = random_bytes([16, 24, 32][rng.gen_range(0, 3)]);
        let iv = random_bytes(16);
        let plaintext = random_bytes(rng.gen_range(0, 100));
        let ciphertext = encrypt(&plaintext, &key, &iv).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());
        assert_eq!(decrypt(&ciphertext, &key, &iv).unwrap(), plaintext);
        // deterministic
        assert_eq!(encrypt(&plaintext, &key, &iv).unwrap(), ciphertext);
    }
}

#[test]
fn test_cipher_empty_input() {
    let key = [0u8; 16];
    let iv = [0u8; 16];
    assert!(encrypt(&[], &key, &iv).unwrap().is_empty());
    assert!(decrypt(&[], &key, &iv).unwrap().is_empty());
}

#[test]
fn test_cipher_invalid_params() {
    let iv = [0u8; 16];
    for len in [0, 8, 15, 17, 31, 33, 64] {
        assert_eq!(
            encrypt(b"x", &vec![0; len], &iv),
            Err(ErrorKind::InvalidKeyLength)
        );
    }
    for len in [0, 8, 15, 17, 32] {
        assert_eq!(
            decrypt(b"x", &[0; 16], &vec![0; len]),
            Err(ErrorKind::InvalidIVLength)
        );
    }
    assert_eq!(
        CipherParams::from_hex("zz", NIST_IV).unwrap_err(),
        ErrorKind::MalformedHex
    );
    assert_eq!(
        aes_cfb8_hex(Direction::Encrypt, b"x", "0001", NIST_VECTORS[0].0),
        Err(ErrorKind::InvalidIVLength)
    );
}

#[test]
fn test_cipher_resumable() {
    let params = CipherParams::new(&random_bytes(32), &random_bytes(16)).unwrap();
    let image = random_bytes(1000);
    let expected = aes_cfb8(Direction::Encrypt, &image, &params);
    let mut enc = Cfb8::new(&params, Direction::Encrypt);
    assert_eq!(enc.direction(), Direction::Encrypt);
    let mut ciphertext = Vec::new();
    for window in image.chunks(20) {
        let mut buf = window.to_vec();
        enc.apply(&mut buf);
        ciphertext.extend_from_slice(&buf);
    }
    assert_eq!(ciphertext, expected);
    let mut dec = Cfb8::new(&params, Direction::Decrypt);
    let mut plaintext = Vec::new();
    for window in ciphertext.chunks(7) {
        dec.apply_into(window, &mut plaintext).unwrap();
    }
    assert_eq!(plaintext, image);
}

#[test]
fn test_cipher_self_synchronizing() {
    // a corrupted ciphertext byte garbles at most the next 16 bytes
    let params = CipherParams::new(&random_bytes(16), &random_bytes(16)).unwrap();
    let plaintext = random_bytes(64);
    let mut ciphertext = aes_cfb8(Direction::Encrypt, &plaintext, &params);
    ciphertext[10] ^= 0x01;
    let decrypted = aes_cfb8(Direction::Decrypt, &ciphertext, &params);
    assert_eq!(decrypted[..10], plaintext[..10]);
    assert_ne!(decrypted[10], plaintext[10]);
    assert_eq!(decrypted[27..], plaintext[27..]);
}

#[cfg(feature = "heapless")]
#[test]
fn test_cipher_apply_into_oob() {
    let params = CipherParams::new(&[1; 16], &[2; 16]).unwrap();
    let mut enc = Cfb8::new(&params, Direction::Encrypt);
    let mut buf: heapless::Vec<u8, 4> = heapless::Vec::new();
    assert_eq!(enc.apply_into(&[0; 5], &mut buf), Err(ErrorKind::OOB));
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_cipher_params_debug_hides_key() {
    let params = CipherParams::new(&[0xab; 16], &[0; 16]).unwrap();
    assert_eq!(params.key(), &[0xab; 16]);
    assert_eq!(params.iv(), &[0; 16]);
    let s = format!("{:?}", params);
    assert!(s.contains("key_len: 16"));
    assert!(!s.contains("171"));
}

#[test]
fn test_cipher_params_reuse() {
    let params = CipherParams::new(&random_bytes(24), &random_bytes(16)).unwrap();
    let copy = params.clone();
    assert_eq!(copy, params);
    let data = random_bytes(100);
    let mut a = Cfb8::new(&params, Direction::Encrypt);
    let mut b = Cfb8::new(&copy, Direction::Encrypt);
    let mut out_a = data.clone();
    let mut out_b = data.clone();
    a.apply(&mut out_a);
    b.apply(&mut out_b);
    assert_eq!(out_a, out_b);
    // each state starts from the IV
    assert_eq!(aes_cfb8(Direction::Encrypt, &data, &params), out_a);
    assert_ne!(
        CipherParams::new(params.key(), &[0; 16]).unwrap(),
        params
    );
}
