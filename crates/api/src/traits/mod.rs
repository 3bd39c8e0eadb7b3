//! Trait definitions implemented by pqkex algorithms

pub mod key_exchange;
pub mod serialize;

pub use key_exchange::KeyExchange;
pub use serialize::Serialize;
