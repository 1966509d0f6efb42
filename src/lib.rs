//! 6502 opcode reference chart.
//!
//! A static table of the 151 documented NMOS 6502 opcodes, a decoder that
//! turns a 3-byte instruction sample into display text, and renderers that
//! lay the 256 byte values out as a 16x16 chart.
//!
//! ```rust
//! use opcode_chart::{decode, lookup};
//!
//! let dis = decode(&[0x4C, 0xA5, 0xB6]).unwrap();
//! assert_eq!(dis.text(), "JMP $B6A5");
//! assert!(lookup(0x02).is_none());
//! ```

pub mod chart;
pub mod cpu;
pub mod error;
pub mod trace;

// Re-exports
pub use chart::Chart;
pub use cpu::addressing::AddressingMode;
pub use cpu::decoder::{decode, DecodeError, Disassembly};
pub use cpu::flags::{FlagEffects, Flags};
pub use cpu::opcodes::{lookup, CyclePenalty, Opcode, Timing};
pub use error::ChartError;
