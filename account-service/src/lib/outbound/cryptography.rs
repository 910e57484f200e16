pub mod password;
pub mod token;

pub use password::Argon2Adapter;
pub use token::JwtAdapter;
