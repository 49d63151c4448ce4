use affine_crypto::errors::AffineCryptoError;
use affine_crypto::{Key, decrypt, encrypt};

use fake::Fake;
use fake::faker::lorem::en::Sentence;

#[test]
fn happy_flow() -> Result<(), AffineCryptoError> {
    let key = Key::try_with(5, 8)?;

    let cipher = key.encrypt("HELLO WORLD")?;
    assert_eq!(cipher, "QBJJYDKYMJX");

    let decoded = key.decrypt(&cipher)?;
    assert_eq!(decoded, "HELLO WORLD");

    Ok(())
}

#[test]
fn roundtrip_with_second_key() -> Result<(), AffineCryptoError> {
    let original = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    let cipher = encrypt(original, 2, 3)?;
    assert_ne!(cipher, original);
    assert_eq!(decrypt(&cipher, 2, 3)?, original);

    Ok(())
}

#[test]
fn roundtrip_random_sentences() -> Result<(), AffineCryptoError> {
    for _ in 0..32 {
        let key = Key::random();
        let original: String = Sentence(3..12).fake();

        let cipher = encrypt(&original, key.a, key.b)?;
        let decoded = decrypt(&cipher, key.a, key.b)?;

        assert_eq!(decoded, original.to_uppercase());
    }

    Ok(())
}

#[test]
fn encryption_is_case_insensitive() -> Result<(), AffineCryptoError> {
    assert_eq!(
        encrypt("hello world", 5, 8)?,
        encrypt("HELLO WORLD", 5, 8)?
    );

    Ok(())
}

#[test]
fn invalid_key_is_reported_not_transformed() {
    let err = encrypt("HELLO WORLD", 9, 5).unwrap_err();
    assert!(matches!(err, AffineCryptoError::InvalidKey { a: 9, gcd: 9 }));

    let err = decrypt("QBJJYDKYMJX", 9, 5).unwrap_err();
    assert!(matches!(err, AffineCryptoError::InvalidKey { a: 9, gcd: 9 }));

    assert!(Key::try_with(9, 5).is_err());
}
