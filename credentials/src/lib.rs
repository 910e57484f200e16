//! Credential primitives for account services
//!
//! Provides the two cryptographic building blocks an account service needs:
//! - Password hashing and comparison (Argon2id, PHC string format)
//! - Access token signing and verification (HS256 JWT)
//!
//! Services wrap these types in adapters that implement their own domain ports,
//! so the domain never depends on this crate directly.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.matches("my_password", &hash).unwrap());
//! assert!(!hasher.matches("other_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use credentials::TokenSigner;
//!
//! let signer = TokenSigner::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = signer.sign("6f1c0a52-7d0e-4bb8-9a53-9a1b1d0c2f10").unwrap();
//! let claims = signer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "6f1c0a52-7d0e-4bb8-9a53-9a1b1d0c2f10");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenSigner;
