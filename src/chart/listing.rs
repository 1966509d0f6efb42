use super::Chart;
use crate::trace::Traceable;
use std::io::{self, Write};

pub(super) fn write_listing<W: Write>(chart: &Chart, out: &mut W) -> io::Result<()> {
    for (code, cell) in chart.cells() {
        match cell.ok().and_then(|dis| dis.trace_state()) {
            Some(line) => writeln!(out, "{}", line)?,
            None => writeln!(out, "${:02X} ---", code)?,
        }
    }
    Ok(())
}
