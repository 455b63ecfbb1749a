//! Storage implementations for the sale repository

pub mod in_memory;

pub use in_memory::InMemorySaleRepository;
