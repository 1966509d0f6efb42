#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Relative, // The branch instructions exclusively use this mode
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect, // Only JMP supports this mode
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implied,
        AddressingMode::Relative,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Number of operand bytes following the opcode
    pub const fn operand_len(&self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }

    pub const fn instruction_len(&self) -> u8 {
        1 + self.operand_len()
    }

    /// Short label printed in a chart cell
    pub const fn chart_name(&self) -> &'static str {
        match self {
            AddressingMode::Implied => "Implied",
            AddressingMode::Relative => "Relative",
            AddressingMode::Accumulator => "Accum",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::ZeroPage => "ZeroPage",
            AddressingMode::ZeroPageX => "ZeroPage,X",
            AddressingMode::ZeroPageY => "ZeroPage,Y",
            AddressingMode::Absolute => "Abs",
            AddressingMode::AbsoluteX => "Abs,X",
            AddressingMode::AbsoluteY => "Abs,Y",
            AddressingMode::Indirect => "(Ind)",
            AddressingMode::IndirectX => "(Ind,X)",
            AddressingMode::IndirectY => "(Ind),Y",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_lengths() {
        assert_eq!(AddressingMode::Implied.operand_len(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_len(), 0);
        assert_eq!(AddressingMode::Relative.operand_len(), 1);
        assert_eq!(AddressingMode::Immediate.operand_len(), 1);
        assert_eq!(AddressingMode::IndirectX.operand_len(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_len(), 1);
        assert_eq!(AddressingMode::Indirect.operand_len(), 2);
        assert_eq!(AddressingMode::AbsoluteY.operand_len(), 2);
    }

    #[test]
    fn test_instruction_len_range() {
        for mode in AddressingMode::ALL {
            let len = mode.instruction_len();
            assert!((1..=3).contains(&len), "{:?} has length {}", mode, len);
        }
    }

    #[test]
    fn test_chart_names_are_unique() {
        let mut names: Vec<&str> = AddressingMode::ALL.iter().map(|m| m.chart_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), AddressingMode::ALL.len());
    }
}
