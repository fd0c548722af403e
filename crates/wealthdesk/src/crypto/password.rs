// Password hashing for login and fund passwords.
//
// scrypt with N=16384, r=16, p=1, dkLen=64 and a random 16-byte salt.
// Stored as "hex(salt):hex(key)".

use rand::RngCore;
use scrypt::{scrypt, Params};
use subtle::ConstantTimeEq;

use wealthdesk_core::error::StoreError;

/// Hash a password. Output format is `salt:key`, both hex-encoded.
pub fn hash_password(password: &str) -> Result<String, StoreError> {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    let salt_hex = hex::encode(salt);

    let key = derive_key(password, &salt_hex)?;
    Ok(format!("{}:{}", salt_hex, hex::encode(key)))
}

/// Verify a password against a `hash_password` output. Comparison is
/// constant-time.
pub fn verify_password(hash: &str, password: &str) -> Result<bool, StoreError> {
    let (salt, key_hex) = hash
        .split_once(':')
        .ok_or_else(|| StoreError::Crypto("invalid password hash format".into()))?;

    let expected = hex::decode(key_hex)
        .map_err(|e| StoreError::Crypto(format!("invalid hex in password hash: {e}")))?;
    let derived = derive_key(password, salt)?;

    Ok(derived.ct_eq(&expected).into())
}

fn derive_key(password: &str, salt: &str) -> Result<Vec<u8>, StoreError> {
    // N=16384 → log2(N)=14
    let params = Params::new(14, 16, 1, 64)
        .map_err(|e| StoreError::Crypto(format!("invalid scrypt params: {e}")))?;

    let mut output = vec![0u8; 64];
    scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)
        .map_err(|e| StoreError::Crypto(format!("scrypt failed: {e}")))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("fund-secret-1").unwrap();
        let (salt, key) = hash.split_once(':').unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(key.len(), 128);

        assert!(verify_password(&hash, "fund-secret-1").unwrap());
        assert!(!verify_password(&hash, "fund-secret-2").unwrap());
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password(&a, "same").unwrap());
        assert!(verify_password(&b, "same").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("not-a-hash", "pw").is_err());
    }
}
