//! Infrastructure Layer

pub mod in_memory;
