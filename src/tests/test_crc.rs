use crate::crc::*;
use crate::ErrorKind;
use crc16::{State, MODBUS};
use rand::Rng;

#[test]
fn test_crc_check_value() {
    assert_eq!(crc16(b"123456789"), 0x4B37);
    assert_eq!(crc16(&[]), 0xFFFF);
    assert_eq!(crc16_hex("01030000000a").unwrap(), "c5cd");
    assert_eq!(crc16_hex("01 03 00 00 00 0A").unwrap(), "c5cd");
    assert_eq!(crc16_hex("0103x"), Err(ErrorKind::MalformedHex));
}

#[test]
fn test_crc_matches_reference() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let len = rng.gen_range(0, 300);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(crc16(&data), State::<MODBUS>::calculate(&data));
        // determinism
        assert_eq!(crc16(&data), crc16(&data));
    }
}

#[test]
fn test_crc_single_bit_flip() {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..64).map(|_| rng.gen()).collect();
    let crc = crc16(&data);
    for byte in 0..data.len() {
        for bit in 0..8 {
            let mut flipped = data.clone();
            flipped[byte] ^= 1 << bit;
            assert_ne!(crc16(&flipped), crc, "flip at byte {} bit {}", byte, bit);
        }
    }
}

#[test]
fn test_crc_update() {
    let data = b"0123456789abcdef";
    for split in 0..=data.len() {
        let (a, b) = data.split_at(split);
        assert_eq!(crc16_update(crc16(a), b), crc16(data));
    }
}

#[test]
fn test_crc_append_verify() {
    let payload = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0a];
    let mut framed = Vec::new();
    append_crc16(&payload, &mut framed).unwrap();
    assert_eq!(framed, vec![0x01, 0x03, 0x00, 0x00, 0x00, 0x0a, 0xc5, 0xcd]);
    assert!(verify_crc16(&framed));
    framed[2] = 0x01;
    assert!(!verify_crc16(&framed));
    assert!(!verify_crc16(&[0xff]));
    // CRC of nothing
    assert!(verify_crc16(&[0xff, 0xff]));
}

#[cfg(feature = "heapless")]
#[test]
fn test_crc_append_oob() {
    let mut buf: heapless::Vec<u8, 7> = heapless::Vec::new();
    assert_eq!(
        append_crc16(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0a], &mut buf),
        Err(ErrorKind::OOB)
    );
}
