#[cfg(test)]
mod test {
    use crate::cpu::addressing::AddressingMode;
    use crate::cpu::flags::Flags;
    use crate::cpu::opcodes::{
        build_table, defined_opcodes, lookup, CyclePenalty, Timing, OPCODES,
    };
    use std::collections::HashSet;

    #[rustfmt::skip]
    const DOCUMENTED: [u8; 151] = [
        0x00, 0x01, 0x05, 0x06, 0x08, 0x09, 0x0A, 0x0D, 0x0E, 0x10, 0x11, 0x15,
        0x16, 0x18, 0x19, 0x1D, 0x1E, 0x20, 0x21, 0x24, 0x25, 0x26, 0x28, 0x29,
        0x2A, 0x2C, 0x2D, 0x2E, 0x30, 0x31, 0x35, 0x36, 0x38, 0x39, 0x3D, 0x3E,
        0x40, 0x41, 0x45, 0x46, 0x48, 0x49, 0x4A, 0x4C, 0x4D, 0x4E, 0x50, 0x51,
        0x55, 0x56, 0x58, 0x59, 0x5D, 0x5E, 0x60, 0x61, 0x65, 0x66, 0x68, 0x69,
        0x6A, 0x6C, 0x6D, 0x6E, 0x70, 0x71, 0x75, 0x76, 0x78, 0x79, 0x7D, 0x7E,
        0x81, 0x84, 0x85, 0x86, 0x88, 0x8A, 0x8C, 0x8D, 0x8E, 0x90, 0x91, 0x94,
        0x95, 0x96, 0x98, 0x99, 0x9A, 0x9D, 0xA0, 0xA1, 0xA2, 0xA4, 0xA5, 0xA6,
        0xA8, 0xA9, 0xAA, 0xAC, 0xAD, 0xAE, 0xB0, 0xB1, 0xB4, 0xB5, 0xB6, 0xB8,
        0xB9, 0xBA, 0xBC, 0xBD, 0xBE, 0xC0, 0xC1, 0xC4, 0xC5, 0xC6, 0xC8, 0xC9,
        0xCA, 0xCC, 0xCD, 0xCE, 0xD0, 0xD1, 0xD5, 0xD6, 0xD8, 0xD9, 0xDD, 0xDE,
        0xE0, 0xE1, 0xE4, 0xE5, 0xE6, 0xE8, 0xE9, 0xEA, 0xEC, 0xED, 0xEE, 0xF0,
        0xF1, 0xF5, 0xF6, 0xF8, 0xF9, 0xFD, 0xFE,
    ];

    #[test]
    fn test_defined_set_matches_documented_instructions() {
        let documented: HashSet<u8> = DOCUMENTED.iter().copied().collect();
        for code in 0..=255u8 {
            assert_eq!(
                lookup(code).is_some(),
                documented.contains(&code),
                "opcode ${:02X}",
                code
            );
        }
        assert_eq!(defined_opcodes().count(), 151);
    }

    #[test]
    fn test_lookup_returns_entry_for_its_own_code() {
        for code in 0..=255u8 {
            if let Some(opcode) = lookup(code) {
                assert_eq!(opcode.code, code);
            }
        }
    }

    #[test]
    fn test_no_duplicate_codes() {
        let codes: HashSet<u8> = OPCODES.iter().map(|op| op.code).collect();
        assert_eq!(codes.len(), OPCODES.len());
    }

    #[test]
    fn test_fifty_six_mnemonics() {
        let names: HashSet<&str> = OPCODES.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), 56);
        for name in names {
            assert_eq!(name.len(), 3);
            assert!(name.chars().all(|c| c.is_ascii_uppercase()), "{}", name);
        }
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for op in OPCODES {
            assert!((1..=3).contains(&op.size), "{} ${:02X}", op.name, op.code);
            assert_eq!(
                op.size,
                op.mode.instruction_len(),
                "{} ${:02X} {:?}",
                op.name,
                op.code,
                op.mode
            );
        }
    }

    #[test]
    fn test_flag_sets_are_disjoint() {
        for op in OPCODES {
            let effects = op.flags;
            assert!(!effects.cleared.intersects(effects.set), "{}", op.name);
            assert!(!effects.cleared.intersects(effects.modified), "{}", op.name);
            assert!(!effects.set.intersects(effects.modified), "{}", op.name);
        }
    }

    #[test]
    fn test_branches_use_relative_mode_and_branch_timing() {
        for op in OPCODES {
            let is_branch = op.mode == AddressingMode::Relative;
            assert_eq!(is_branch, op.timing.penalty == CyclePenalty::Branch, "{}", op.name);
            if is_branch {
                assert!(op.name.starts_with('B'));
                assert_eq!(op.timing.base, 2);
                assert!(op.flags.is_none());
            }
        }
        let branches = OPCODES
            .iter()
            .filter(|op| op.mode == AddressingMode::Relative)
            .count();
        assert_eq!(branches, 8);
    }

    #[test]
    fn test_page_cross_penalty_only_on_indexed_reads() {
        for op in OPCODES.iter().filter(|op| op.timing.penalty == CyclePenalty::PageCrossed) {
            assert!(
                matches!(
                    op.mode,
                    AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
                ),
                "{} {:?}",
                op.name,
                op.mode
            );
        }
        // Stores and read-modify-write always pay the fixed cost
        let sta_abs_x = lookup(0x9D).unwrap();
        assert_eq!(sta_abs_x.timing, Timing::new(5, CyclePenalty::None));
        let inc_abs_x = lookup(0xFE).unwrap();
        assert_eq!(inc_abs_x.timing, Timing::new(7, CyclePenalty::None));
    }

    #[test]
    fn test_packed_timing() {
        assert_eq!(lookup(0x69).unwrap().timing.packed(), 2);
        assert_eq!(lookup(0x7D).unwrap().timing.packed(), 14);
        assert_eq!(lookup(0x71).unwrap().timing.packed(), 15);
        assert_eq!(lookup(0x90).unwrap().timing.packed(), 22);
        assert_eq!(lookup(0x90).unwrap().timing.max_cycles(), 4);
    }

    #[test]
    fn test_timing_display() {
        assert_eq!(lookup(0x00).unwrap().timing.to_string(), "7");
        assert_eq!(lookup(0xB9).unwrap().timing.to_string(), "4+");
        assert_eq!(lookup(0xF0).unwrap().timing.to_string(), "2++");
    }

    #[test]
    fn test_flag_effects_of_notable_instructions() {
        let lsr = lookup(0x4A).unwrap();
        assert_eq!(lsr.flags.cleared, Flags::NEGATIVE);
        assert_eq!(lsr.flags.modified, Flags::ZERO | Flags::CARRY);

        let brk = lookup(0x00).unwrap();
        assert_eq!(brk.flags.set, Flags::INTERRUPT_DISABLE);

        let bit = lookup(0x24).unwrap();
        assert_eq!(bit.flags.modified, Flags::NEGATIVE | Flags::OVERFLOW | Flags::ZERO);

        let plp = lookup(0x28).unwrap();
        assert!(!plp.flags.modified.contains(Flags::BREAK));
        assert!(!plp.flags.modified.contains(Flags::UNUSED));
        assert_eq!(plp.flags, lookup(0x40).unwrap().flags);

        assert_eq!(lookup(0x18).unwrap().flags.cleared, Flags::CARRY);
        assert_eq!(lookup(0xF8).unwrap().flags.set, Flags::DECIMAL_MODE);
    }

    #[test]
    fn test_build_table_is_idempotent() {
        let first = build_table();
        let second = build_table();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_undefined_opcodes() {
        for code in [0x02, 0x03, 0x1A, 0x80, 0x89, 0x9C, 0x9E, 0xEB, 0xFF] {
            assert!(lookup(code).is_none(), "${:02X}", code);
        }
    }
}
