//! Session token generation.

/// Generate a cryptographically random session token
/// (32 bytes → hex-encoded, 64 characters).
///
/// The token is stored as-is in the session slot; it is opaque and
/// carries no claims.
pub fn generate_session_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_hex_chars() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_session_token(), generate_session_token());
    }
}
