use bitflags::bitflags;

bitflags! {
    /* https://www.nesdev.org/wiki/Status_flags
            7  bit  0
        ---- ----
        NV1B DIZC
        |||| ||||
        |||| |||+- Carry
        |||| ||+-- Zero
        |||| |+--- Interrupt Disable
        |||| +---- Decimal
        |||+------ (No CPU effect; see: the B flag)
        ||+------- (No CPU effect; always pushed as 1)
        |+-------- Overflow
        +--------- Negative
     */
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const CARRY             = 1<<0;
        const ZERO              = 1<<1;
        const INTERRUPT_DISABLE = 1<<2;
        const DECIMAL_MODE      = 1<<3;
        const BREAK             = 1<<4;
        const UNUSED            = 1<<5;
        const OVERFLOW          = 1<<6;
        const NEGATIVE          = 1<<7;
    }
}

impl Flags {
    /// Status register bits from bit 7 down to bit 0, with their chart letter
    pub const BY_BIT: [(Flags, char); 8] = [
        (Flags::NEGATIVE, 'N'),
        (Flags::OVERFLOW, 'V'),
        (Flags::UNUSED, '-'),
        (Flags::BREAK, 'B'),
        (Flags::DECIMAL_MODE, 'D'),
        (Flags::INTERRUPT_DISABLE, 'I'),
        (Flags::ZERO, 'Z'),
        (Flags::CARRY, 'C'),
    ];

    /// Renders the set as eight letters, upper case for members, lower case otherwise
    pub fn letters(&self) -> String {
        Flags::BY_BIT
            .iter()
            .map(|(flag, letter)| {
                if self.contains(*flag) {
                    *letter
                } else {
                    letter.to_ascii_lowercase()
                }
            })
            .collect()
    }
}

/// How a single instruction treats each status flag.
///
/// A flag belongs to at most one of the three sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FlagEffects {
    /// Unconditionally cleared
    pub cleared: Flags,
    /// Unconditionally set
    pub set: Flags,
    /// Computed from the result
    pub modified: Flags,
}

impl FlagEffects {
    pub const NONE: FlagEffects = FlagEffects::new(Flags::empty(), Flags::empty(), Flags::empty());

    pub const fn new(cleared: Flags, set: Flags, modified: Flags) -> Self {
        assert!(
            cleared.bits() & set.bits() == 0,
            "a flag cannot be both cleared and set"
        );
        assert!(
            cleared.bits() & modified.bits() == 0,
            "a flag cannot be both cleared and modified"
        );
        assert!(
            set.bits() & modified.bits() == 0,
            "a flag cannot be both set and modified"
        );
        Self {
            cleared,
            set,
            modified,
        }
    }

    pub const fn clears(flags: Flags) -> Self {
        FlagEffects::new(flags, Flags::empty(), Flags::empty())
    }

    pub const fn sets(flags: Flags) -> Self {
        FlagEffects::new(Flags::empty(), flags, Flags::empty())
    }

    pub const fn modifies(flags: Flags) -> Self {
        FlagEffects::new(Flags::empty(), Flags::empty(), flags)
    }

    /// Every flag the instruction touches in any way
    pub const fn affected(&self) -> Flags {
        self.cleared.union(self.set).union(self.modified)
    }

    pub fn is_none(&self) -> bool {
        self.affected().is_empty()
    }
}
