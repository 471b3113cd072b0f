//! Tests for validating base64 decoding (DecodeMode::Strict).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use textcodec_base64::{create_decoder, decode_with, Base64Error, DecodeOptions};

fn strict(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64Error> {
    decode_with(input, &DecodeOptions::strict())
}

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    let decode2 = create_decoder(DecodeOptions::strict());

    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = STANDARD.encode(&blob);
        assert_eq!(strict(&encoded).unwrap(), blob);
        assert_eq!(decode2(encoded.as_bytes()).unwrap(), blob);
    }
}

#[test]
fn accepts_line_breaks() {
    assert_eq!(strict("Zm9v\nYmFy\n").unwrap(), b"foobar");
    assert_eq!(strict("Zm9v\r\nYmE=\r\n").unwrap(), b"fooba");
    assert_eq!(strict(" \tZg==").unwrap(), b"f");
}

#[test]
fn rejects_noise() {
    assert_eq!(
        strict("Zm9v!YmFy"),
        Err(Base64Error::InvalidCharacter {
            byte: b'!',
            position: 4
        })
    );
    assert_eq!(
        strict("Zm-v"),
        Err(Base64Error::InvalidCharacter {
            byte: b'-',
            position: 2
        })
    );
    assert!(matches!(
        strict(b"Zm9v\xff"),
        Err(Base64Error::InvalidCharacter { byte: 0xff, .. })
    ));
}

#[test]
fn rejects_data_after_padding() {
    assert_eq!(strict("QQ=Q"), Err(Base64Error::InvalidPadding { position: 3 }));
    assert_eq!(
        strict("QQ==QQ=="),
        Err(Base64Error::InvalidPadding { position: 4 })
    );
}

#[test]
fn rejects_excess_padding() {
    assert_eq!(strict("QQ==="), Err(Base64Error::InvalidPadding { position: 4 }));
    assert_eq!(strict("QUJD="), Err(Base64Error::InvalidPadding { position: 4 }));
    assert_eq!(strict("QUI=="), Err(Base64Error::InvalidPadding { position: 3 }));
}

#[test]
fn rejects_dangling_sextet() {
    assert_eq!(strict("Q"), Err(Base64Error::InvalidLength { sextets: 1 }));
    assert_eq!(strict("Zm9vY"), Err(Base64Error::InvalidLength { sextets: 5 }));
    assert_eq!(strict("Q=="), Err(Base64Error::InvalidLength { sextets: 1 }));
}

#[test]
fn accepts_unpadded_tail() {
    assert_eq!(strict("Zm9vYg").unwrap(), b"foob");
    assert_eq!(strict("Zm9vYmE").unwrap(), b"fooba");
}

#[test]
fn empty_input() {
    assert_eq!(strict("").unwrap(), b"");
    assert_eq!(strict("\n").unwrap(), b"");
}

#[test]
fn error_messages() {
    assert_eq!(
        Base64Error::InvalidCharacter {
            byte: b'!',
            position: 4
        }
        .to_string(),
        "invalid base64 character 0x21 at position 4"
    );
    assert_eq!(
        Base64Error::InvalidLength { sextets: 5 }.to_string(),
        "base64 input of 5 sextets ends in an incomplete byte"
    );
}
