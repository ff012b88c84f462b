mod test_cipher;
mod test_crc;
