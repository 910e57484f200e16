pub mod cryptography;
pub mod repositories;
pub mod validators;
