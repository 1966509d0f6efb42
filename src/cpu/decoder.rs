use super::addressing::AddressingMode;
use super::flags::FlagEffects;
use super::opcodes::{self, Opcode, Timing};
use thiserror::Error;

/// Operand text shown for branches; targets are never resolved
pub const BRANCH_PLACEHOLDER: &str = "lbl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Undefined opcode: ${0:02X}")]
    UndefinedOpcode(u8),
}

/// A single decoded instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub operand: String,
    pub mode: AddressingMode,
    pub size: u8,
    pub timing: Timing,
    pub flags: FlagEffects,
}

impl Disassembly {
    pub fn instruction_len(&self) -> usize {
        self.size as usize
    }

    /// Assembly text, e.g. `LDA ($A5), Y`
    pub fn text(&self) -> String {
        if self.operand.is_empty() {
            self.mnemonic.to_string()
        } else {
            format!("{} {}", self.mnemonic, self.operand)
        }
    }
}

/// Decodes the instruction at the start of `bytes`.
///
/// Two operand bytes are always read, whatever the real instruction length.
pub fn decode(bytes: &[u8; 3]) -> Result<Disassembly, DecodeError> {
    let code = bytes[0];
    let opcode = opcodes::lookup(code).ok_or(DecodeError::UndefinedOpcode(code))?;
    Ok(disassemble(opcode, [bytes[1], bytes[2]]))
}

fn disassemble(opcode: &'static Opcode, operand: [u8; 2]) -> Disassembly {
    Disassembly {
        opcode: opcode.code,
        mnemonic: opcode.name,
        operand: format_operand(opcode.mode, operand),
        mode: opcode.mode,
        size: opcode.size,
        timing: opcode.timing,
        flags: opcode.flags,
    }
}

pub fn format_operand(mode: AddressingMode, operand: [u8; 2]) -> String {
    let byte = operand[0];
    let word = u16::from_le_bytes(operand);

    match mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Relative => BRANCH_PLACEHOLDER.to_string(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${:02X}", byte),
        AddressingMode::ZeroPage => format!("${:02X}", byte),
        AddressingMode::ZeroPageX => format!("${:02X}, X", byte),
        AddressingMode::ZeroPageY => format!("${:02X}, Y", byte),
        AddressingMode::Absolute => format!("${:04X}", word),
        AddressingMode::AbsoluteX => format!("${:04X}, X", word),
        AddressingMode::AbsoluteY => format!("${:04X}, Y", word),
        AddressingMode::Indirect => format!("(${:04X})", word),
        AddressingMode::IndirectX => format!("(${:02X}, X)", byte),
        AddressingMode::IndirectY => format!("(${:02X}), Y", byte),
    }
}
