//! Infrastructure Layer

pub mod in_memory;
pub mod seed;
