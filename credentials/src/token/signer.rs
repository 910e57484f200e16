use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Signs and verifies access tokens with HS256.
///
/// The secret should be at least 32 bytes and must come from configuration,
/// never from source code.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenSigner {
    const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a signer.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret
    /// * `validity_hours` - Lifetime of every issued token
    pub fn new(secret: &[u8], validity_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validity: Duration::hours(validity_hours),
        }
    }

    /// Issue a token for `subject`, valid from now.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims could not be encoded or signed
    pub fn sign(&self, subject: &str) -> Result<String, TokenError> {
        let claims = AccessClaims::new(subject, Utc::now(), self.validity);

        encode(&Header::new(Self::ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify signature and expiry of a token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `Invalid` - Malformed token or bad signature
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(Self::ALGORITHM);

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new(SECRET, 24);

        let token = signer.sign("account-1").expect("Failed to sign token");
        assert!(!token.is_empty());

        let claims = signer.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let signer = TokenSigner::new(SECRET, 24);
        let other = TokenSigner::new(b"another_secret_at_least_32_bytes!!", 24);

        let token = signer.sign("account-1").expect("Failed to sign token");

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let signer = TokenSigner::new(SECRET, -1);

        let token = signer.sign("account-1").expect("Failed to sign token");

        assert!(matches!(signer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_garbage() {
        let signer = TokenSigner::new(SECRET, 24);

        assert!(signer.verify("invalid.token.here").is_err());
    }
}
