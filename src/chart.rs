use crate::cpu::decoder::{decode, DecodeError, Disassembly};
use crate::error::ChartError;
use crate::trace::Traceable;
use log::{info, trace};
use std::io::Write;

mod html;
mod listing;

/// Operand bytes placed after every opcode in the chart sample
pub const DEFAULT_OPERAND: [u8; 2] = [0xA5, 0xB6];

pub const REFERENCE_URL: &str = "https://www.masswerk.at/6502/6502_instruction_set.html";

pub type Cell = (u8, Result<Disassembly, DecodeError>);

pub struct Chart {
    operand: [u8; 2],
}

impl Default for Chart {
    fn default() -> Self {
        Chart::new(DEFAULT_OPERAND)
    }
}

impl Chart {
    pub fn new(operand: [u8; 2]) -> Self {
        Self { operand }
    }

    pub fn operand(&self) -> [u8; 2] {
        self.operand
    }

    /// Decodes `[code, lo, hi]` for every byte value in order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..=255u8).map(move |code| {
            let cell = decode(&[code, self.operand[0], self.operand[1]]);
            if let Ok(dis) = &cell {
                trace!("{}", dis.trace().unwrap_or_default());
            }
            (code, cell)
        })
    }

    /// Cells grouped by high nibble, 16 rows of 16
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(16);
        for cell in self.cells() {
            if cell.0 & 0x0F == 0 {
                rows.push(Vec::with_capacity(16));
            }
            if let Some(row) = rows.last_mut() {
                row.push(cell);
            }
        }
        rows
    }

    /// `(defined, undefined)` cell counts
    pub fn summary(&self) -> (usize, usize) {
        let defined = self.cells().filter(|(_, cell)| cell.is_ok()).count();
        (defined, 256 - defined)
    }

    pub fn write_html<W: Write>(&self, out: &mut W) -> Result<(), ChartError> {
        html::write_page(self, out)?;
        self.log_summary("html");
        Ok(())
    }

    pub fn write_listing<W: Write>(&self, out: &mut W) -> Result<(), ChartError> {
        listing::write_listing(self, out)?;
        self.log_summary("text");
        Ok(())
    }

    fn log_summary(&self, format: &str) {
        let (defined, undefined) = self.summary();
        info!(
            "{} chart written: {} defined, {} undefined (operand ${:02X} ${:02X})",
            format, defined, undefined, self.operand[0], self.operand[1]
        );
    }
}
