//! Documented NMOS 6502 opcodes.
//!
//! Source: https://www.masswerk.at/6502/6502_instruction_set.html
//!
//! Cycle footnotes from that reference map onto [`CyclePenalty`]:
//!   *  : +1 cycle if a page boundary is crossed
//!   ** : +1 cycle if the branch is taken on the same page,
//!        +2 cycles if it is taken to a different page
use super::addressing::AddressingMode;
use super::flags::{FlagEffects, Flags};
use log::debug;
use once_cell::sync::Lazy;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CyclePenalty {
    None,
    PageCrossed,
    Branch,
}

impl CyclePenalty {
    /// Footnote number used by the reference tables (0 = no footnote)
    pub const fn footnote(&self) -> u8 {
        match self {
            CyclePenalty::None => 0,
            CyclePenalty::PageCrossed => 1,
            CyclePenalty::Branch => 2,
        }
    }

    pub const fn marker(&self) -> &'static str {
        match self {
            CyclePenalty::None => "",
            CyclePenalty::PageCrossed => "+",
            CyclePenalty::Branch => "++",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timing {
    pub base: u8,
    pub penalty: CyclePenalty,
}

impl Timing {
    pub const fn new(base: u8, penalty: CyclePenalty) -> Self {
        Self { base, penalty }
    }

    /// `base + 10 * footnote`, the compact form used by older opcode charts
    pub const fn packed(&self) -> u8 {
        self.base + 10 * self.penalty.footnote()
    }

    /// Worst case cycle count, penalty included
    pub const fn max_cycles(&self) -> u8 {
        self.base + self.penalty.footnote()
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.base, self.penalty.marker())
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub code: u8,
    pub name: &'static str,
    pub size: u8,
    pub timing: Timing,
    pub mode: AddressingMode,
    pub flags: FlagEffects,
}

impl Opcode {
    pub const fn new(
        code: u8,
        name: &'static str,
        size: u8,
        timing: Timing,
        mode: AddressingMode,
        flags: FlagEffects,
    ) -> Self {
        Self {
            code,
            name,
            size,
            timing,
            mode,
            flags,
        }
    }
}

const fn cyc(base: u8) -> Timing {
    Timing::new(base, CyclePenalty::None)
}

const fn cyc_page(base: u8) -> Timing {
    Timing::new(base, CyclePenalty::PageCrossed)
}

const fn cyc_branch(base: u8) -> Timing {
    Timing::new(base, CyclePenalty::Branch)
}

const NONE: Flags = Flags::empty();
const N: Flags = Flags::NEGATIVE;
const V: Flags = Flags::OVERFLOW;
const D: Flags = Flags::DECIMAL_MODE;
const I: Flags = Flags::INTERRUPT_DISABLE;
const C: Flags = Flags::CARRY;
const ZC: Flags = Flags::ZERO.union(Flags::CARRY);
const NZ: Flags = Flags::NEGATIVE.union(Flags::ZERO);
const NZC: Flags = NZ.union(Flags::CARRY);
const NVZ: Flags = NZ.union(Flags::OVERFLOW);
const NVZC: Flags = NZC.union(Flags::OVERFLOW);
// Pulled from the stack; break and bit 5 are ignored
const STACK: Flags = NVZC.union(Flags::DECIMAL_MODE).union(Flags::INTERRUPT_DISABLE);

#[rustfmt::skip]
pub const OPCODES: &[Opcode] = &[
    // Software-defined interrupt
    Opcode::new(0x00, "BRK", 1, cyc(7),        AddressingMode::Implied,     FlagEffects::sets(I)),

    // General NOP
    Opcode::new(0xEA, "NOP", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::NONE),

    // Transfers
    Opcode::new(0xAA, "TAX", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0xA8, "TAY", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0x8A, "TXA", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0x98, "TYA", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0xBA, "TSX", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0x9A, "TXS", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::NONE),

    // Flags
    Opcode::new(0xF8, "SED", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::sets(D)),
    Opcode::new(0x78, "SEI", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::sets(I)),
    Opcode::new(0x38, "SEC", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::sets(C)),
    Opcode::new(0xD8, "CLD", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::clears(D)),
    Opcode::new(0x58, "CLI", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::clears(I)),
    Opcode::new(0x18, "CLC", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::clears(C)),
    Opcode::new(0xB8, "CLV", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::clears(V)),

    // Loads
    Opcode::new(0xA9, "LDA", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0xA5, "LDA", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0xB5, "LDA", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xAD, "LDA", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0xBD, "LDA", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xB9, "LDA", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZ)),
    Opcode::new(0xA1, "LDA", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xB1, "LDA", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NZ)),

    Opcode::new(0xA2, "LDX", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0xA6, "LDX", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0xB6, "LDX", 2, cyc(4),        AddressingMode::ZeroPageY,   FlagEffects::modifies(NZ)),
    Opcode::new(0xAE, "LDX", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0xBE, "LDX", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZ)),

    Opcode::new(0xA0, "LDY", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0xA4, "LDY", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0xB4, "LDY", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xAC, "LDY", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0xBC, "LDY", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),

    // Stores
    Opcode::new(0x85, "STA", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::NONE),
    Opcode::new(0x95, "STA", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::NONE),
    Opcode::new(0x8D, "STA", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::NONE),
    Opcode::new(0x9D, "STA", 3, cyc(5),        AddressingMode::AbsoluteX,   FlagEffects::NONE),
    Opcode::new(0x99, "STA", 3, cyc(5),        AddressingMode::AbsoluteY,   FlagEffects::NONE),
    Opcode::new(0x81, "STA", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::NONE),
    Opcode::new(0x91, "STA", 2, cyc(6),        AddressingMode::IndirectY,   FlagEffects::NONE),

    Opcode::new(0x86, "STX", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::NONE),
    Opcode::new(0x96, "STX", 2, cyc(4),        AddressingMode::ZeroPageY,   FlagEffects::NONE),
    Opcode::new(0x8E, "STX", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::NONE),

    Opcode::new(0x84, "STY", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::NONE),
    Opcode::new(0x94, "STY", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::NONE),
    Opcode::new(0x8C, "STY", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::NONE),

    // Stack
    Opcode::new(0x48, "PHA", 1, cyc(3),        AddressingMode::Implied,     FlagEffects::NONE),
    Opcode::new(0x08, "PHP", 1, cyc(3),        AddressingMode::Implied,     FlagEffects::NONE),
    Opcode::new(0x68, "PLA", 1, cyc(4),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0x28, "PLP", 1, cyc(4),        AddressingMode::Implied,     FlagEffects::modifies(STACK)),

    // Shifts
    Opcode::new(0x0A, "ASL", 1, cyc(2),        AddressingMode::Accumulator, FlagEffects::modifies(NZC)),
    Opcode::new(0x06, "ASL", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0x16, "ASL", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZC)),
    Opcode::new(0x0E, "ASL", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),
    Opcode::new(0x1E, "ASL", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::modifies(NZC)),

    Opcode::new(0x4A, "LSR", 1, cyc(2),        AddressingMode::Accumulator, FlagEffects::new(N, NONE, ZC)),
    Opcode::new(0x46, "LSR", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::new(N, NONE, ZC)),
    Opcode::new(0x56, "LSR", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::new(N, NONE, ZC)),
    Opcode::new(0x4E, "LSR", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::new(N, NONE, ZC)),
    Opcode::new(0x5E, "LSR", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::new(N, NONE, ZC)),

    // Rotates
    Opcode::new(0x2A, "ROL", 1, cyc(2),        AddressingMode::Accumulator, FlagEffects::modifies(NZC)),
    Opcode::new(0x26, "ROL", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0x36, "ROL", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZC)),
    Opcode::new(0x2E, "ROL", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),
    Opcode::new(0x3E, "ROL", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::modifies(NZC)),

    Opcode::new(0x6A, "ROR", 1, cyc(2),        AddressingMode::Accumulator, FlagEffects::modifies(NZC)),
    Opcode::new(0x66, "ROR", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0x76, "ROR", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZC)),
    Opcode::new(0x6E, "ROR", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),
    Opcode::new(0x7E, "ROR", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::modifies(NZC)),

    // Increments
    Opcode::new(0xE6, "INC", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0xF6, "INC", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xEE, "INC", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0xFE, "INC", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),

    Opcode::new(0xE8, "INX", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0xC8, "INY", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),

    // Decrements
    Opcode::new(0xC6, "DEC", 2, cyc(5),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0xD6, "DEC", 2, cyc(6),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0xCE, "DEC", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0xDE, "DEC", 3, cyc(7),        AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),

    Opcode::new(0xCA, "DEX", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),
    Opcode::new(0x88, "DEY", 1, cyc(2),        AddressingMode::Implied,     FlagEffects::modifies(NZ)),

    // Compares
    Opcode::new(0xC9, "CMP", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZC)),
    Opcode::new(0xC5, "CMP", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0xD5, "CMP", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZC)),
    Opcode::new(0xCD, "CMP", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),
    Opcode::new(0xDD, "CMP", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZC)),
    Opcode::new(0xD9, "CMP", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZC)),
    Opcode::new(0xC1, "CMP", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NZC)),
    Opcode::new(0xD1, "CMP", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NZC)),

    Opcode::new(0xE0, "CPX", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZC)),
    Opcode::new(0xE4, "CPX", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0xEC, "CPX", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),

    Opcode::new(0xC0, "CPY", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZC)),
    Opcode::new(0xC4, "CPY", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZC)),
    Opcode::new(0xCC, "CPY", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZC)),

    // Maths
    Opcode::new(0x69, "ADC", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NVZC)),
    Opcode::new(0x65, "ADC", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NVZC)),
    Opcode::new(0x75, "ADC", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0x6D, "ADC", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NVZC)),
    Opcode::new(0x7D, "ADC", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0x79, "ADC", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NVZC)),
    Opcode::new(0x61, "ADC", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0x71, "ADC", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NVZC)),

    Opcode::new(0xE9, "SBC", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NVZC)),
    Opcode::new(0xE5, "SBC", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NVZC)),
    Opcode::new(0xF5, "SBC", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0xED, "SBC", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NVZC)),
    Opcode::new(0xFD, "SBC", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0xF9, "SBC", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NVZC)),
    Opcode::new(0xE1, "SBC", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NVZC)),
    Opcode::new(0xF1, "SBC", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NVZC)),

    // Logic
    Opcode::new(0x29, "AND", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0x25, "AND", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0x35, "AND", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x2D, "AND", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0x3D, "AND", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x39, "AND", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZ)),
    Opcode::new(0x21, "AND", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x31, "AND", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NZ)),

    Opcode::new(0x09, "ORA", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0x05, "ORA", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0x15, "ORA", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x0D, "ORA", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0x1D, "ORA", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x19, "ORA", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZ)),
    Opcode::new(0x01, "ORA", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x11, "ORA", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NZ)),

    Opcode::new(0x49, "EOR", 2, cyc(2),        AddressingMode::Immediate,   FlagEffects::modifies(NZ)),
    Opcode::new(0x45, "EOR", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NZ)),
    Opcode::new(0x55, "EOR", 2, cyc(4),        AddressingMode::ZeroPageX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x4D, "EOR", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NZ)),
    Opcode::new(0x5D, "EOR", 3, cyc_page(4),   AddressingMode::AbsoluteX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x59, "EOR", 3, cyc_page(4),   AddressingMode::AbsoluteY,   FlagEffects::modifies(NZ)),
    Opcode::new(0x41, "EOR", 2, cyc(6),        AddressingMode::IndirectX,   FlagEffects::modifies(NZ)),
    Opcode::new(0x51, "EOR", 2, cyc_page(5),   AddressingMode::IndirectY,   FlagEffects::modifies(NZ)),

    Opcode::new(0x24, "BIT", 2, cyc(3),        AddressingMode::ZeroPage,    FlagEffects::modifies(NVZ)),
    Opcode::new(0x2C, "BIT", 3, cyc(4),        AddressingMode::Absolute,    FlagEffects::modifies(NVZ)),

    // Branches
    Opcode::new(0x10, "BPL", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0x30, "BMI", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0x50, "BVC", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0x70, "BVS", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0x90, "BCC", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0xB0, "BCS", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0xD0, "BNE", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),
    Opcode::new(0xF0, "BEQ", 2, cyc_branch(2), AddressingMode::Relative,    FlagEffects::NONE),

    // Jumps and subroutines
    Opcode::new(0x4C, "JMP", 3, cyc(3),        AddressingMode::Absolute,    FlagEffects::NONE),
    Opcode::new(0x6C, "JMP", 3, cyc(5),        AddressingMode::Indirect,    FlagEffects::NONE),

    Opcode::new(0x20, "JSR", 3, cyc(6),        AddressingMode::Absolute,    FlagEffects::NONE),
    Opcode::new(0x60, "RTS", 1, cyc(6),        AddressingMode::Implied,     FlagEffects::NONE),
    Opcode::new(0x40, "RTI", 1, cyc(6),        AddressingMode::Implied,     FlagEffects::modifies(STACK)),
];

pub static OPCODE_TABLE: Lazy<[Option<&'static Opcode>; 256]> = Lazy::new(build_table);

/// Places every documented opcode at its byte value. Undefined slots stay `None`.
pub fn build_table() -> [Option<&'static Opcode>; 256] {
    let mut table: [Option<&'static Opcode>; 256] = [None; 256];
    for opcode in OPCODES {
        let slot = &mut table[opcode.code as usize];
        debug_assert!(slot.is_none(), "opcode {:#04x} listed twice", opcode.code);
        *slot = Some(opcode);
    }
    debug!(
        "opcode table built: {} defined, {} undefined",
        OPCODES.len(),
        table.len() - OPCODES.len()
    );
    table
}

pub fn lookup(code: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[code as usize]
}

/// Defined opcodes in byte order
pub fn defined_opcodes() -> impl Iterator<Item = &'static Opcode> {
    OPCODE_TABLE.iter().filter_map(|entry| *entry)
}
