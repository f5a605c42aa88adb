pub mod types;
pub mod error;

#[cfg(test)]
mod types_test;
