use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::HotelError;

/// Access token claims: subject username and expiry (seconds since epoch).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, HotelError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// A malformed stored hash counts as a mismatch.
pub fn check_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

/// Check a login attempt. A missing user still pays for one bcrypt
/// verification against `dummy_hash`, and never succeeds.
pub fn verify_credentials(password: &str, stored_hash: Option<&str>, dummy_hash: &str) -> bool {
    match stored_hash {
        Some(hashed) => check_password(password, hashed),
        None => {
            let _ = check_password(password, dummy_hash);
            false
        }
    }
}

/// Issue an HS256 bearer token for `username`, valid for `ttl_minutes`.
pub fn issue_token(username: &str, secret: &str, ttl_minutes: i64) -> Result<String, HotelError> {
    let exp = Duration::try_minutes(ttl_minutes)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| {
            HotelError::Internal(format!("token ttl of {ttl_minutes} minutes is out of range"))
        })?
        .timestamp();
    let claims = Claims {
        sub: username.to_string(),
        exp: usize::try_from(exp).unwrap_or(0),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation};

    #[test]
    fn password_round_trip() {
        let hashed = hash_password("hunter2", 4).unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(check_password("hunter2", &hashed));
        assert!(!check_password("hunter3", &hashed));
    }

    #[test]
    fn malformed_hash_does_not_match() {
        assert!(!check_password("anything", "not-a-bcrypt-hash"));
    }

    #[test]
    fn unknown_user_never_verifies_even_against_a_matching_dummy() {
        let dummy = hash_password("pw", 4).unwrap();
        assert!(!verify_credentials("pw", None, &dummy));
        assert!(verify_credentials("pw", Some(&dummy), &dummy));
        assert!(!verify_credentials("nope", Some(&dummy), &dummy));
    }

    #[test]
    fn token_carries_subject_and_future_expiry() {
        let token = issue_token("alice", "secret", 45).unwrap();
        let data = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, "alice");

        let now = Utc::now().timestamp() as usize;
        assert!(data.claims.exp > now + 44 * 60);
        assert!(data.claims.exp <= now + 45 * 60 + 1);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = issue_token("alice", "secret", 45).unwrap();
        let result = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
