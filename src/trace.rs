use crate::cpu::decoder::Disassembly;
use crate::cpu::opcodes::Opcode;

pub trait Traceable {
    /// Return a short type label (e.g., "OPC", "DIS")
    fn trace_name(&self) -> &'static str;

    /// State string (whatever details matter for this component)
    fn trace_state(&self) -> Option<String>;

    fn trace(&self) -> Option<String> {
        self.trace_state()
            .map(|state| format!("{} {}", self.trace_name(), state))
    }
}

impl Traceable for Opcode {
    fn trace_name(&self) -> &'static str {
        "OPC"
    }
    fn trace_state(&self) -> Option<String> {
        Some(format!(
            "${:02X} {} {:?} size={} cycles={} P={}",
            self.code,
            self.name,
            self.mode,
            self.size,
            self.timing,
            self.flags.affected().letters()
        ))
    }
}

impl Traceable for Disassembly {
    fn trace_name(&self) -> &'static str {
        "DIS"
    }
    fn trace_state(&self) -> Option<String> {
        Some(format!(
            "${:02X} {:<13} {:<10} size={} cycles={:<3} P={}",
            self.opcode,
            self.text(),
            self.mode.chart_name(),
            self.size,
            self.timing.to_string(),
            self.flags.affected().letters()
        ))
    }
}
