pub mod addressing;
pub mod decoder;
pub mod flags;
pub mod opcodes;

#[cfg(test)]
pub mod opcodes_tests;
