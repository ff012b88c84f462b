#![no_main]

use arbitrary::Arbitrary;
use hexlink::{codec, frame, Endianness};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzInput<'a> {
    Raw(&'a [u8]),
    Hex(&'a str),
    Number { hex: &'a str, little: bool },
}

fuzz_target!(|data: FuzzInput| {
    // we only care about panics so we can ignore results
    match data {
        FuzzInput::Raw(buf) => {
            if let Ok(fields) = frame::decode(buf) {
                let reencoded = frame::encode(fields.status, &fields.data).unwrap();
                assert_eq!(reencoded.len(), buf.len());
                assert_eq!(fields.crc_valid, reencoded == buf);
            }
        }
        FuzzInput::Hex(s) => {
            let _ = frame::decode_hex(s);
            let _ = codec::swap_endianness_hex(s, 2);
            let _ = codec::hex_to_ascii(s);
        }
        FuzzInput::Number { hex, little } => {
            let endian = Endianness::from_little(little);
            let _ = codec::hex_to_decimal(hex, endian);
            let _ = codec::hex_to_signed_decimal(hex, endian);
            let _ = codec::hex_to_float(hex, endian);
        }
    }
});
