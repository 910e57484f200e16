pub mod account;
pub mod log;
pub mod memory;

pub use account::PostgresAccountRepository;
pub use log::PostgresLogErrorRepository;
pub use memory::InMemoryAccountRepository;
pub use memory::InMemoryLogErrorRepository;
