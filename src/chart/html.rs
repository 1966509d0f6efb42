use super::{Chart, REFERENCE_URL};
use crate::cpu::decoder::Disassembly;
use crate::cpu::flags::Flags;
use std::io::{self, Write};

// Non-breaking hyphen, keeps "-0" and "0-" labels on one line
const NB_HYPHEN: &str = "&#8209;";
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub(super) fn write_page<W: Write>(chart: &Chart, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "    <table summary=\"\" border=\"1\" cellpadding=\"0\" width=\"100%\">"
    )?;
    write_column_labels(out, "5%")?;

    for row in chart.rows() {
        let hi = row.first().map(|(code, _)| code >> 4).unwrap_or_default();
        writeln!(out)?;
        writeln!(out, "      <tr>")?;
        write_row_label(out, hi)?;
        for (_, cell) in &row {
            match cell {
                Ok(dis) => write_cell(out, dis)?,
                Err(_) => writeln!(out, "        <td>&nbsp;</td>")?,
            }
        }
        write_row_label(out, hi)?;
        writeln!(out, "      </tr>")?;
    }

    write_column_labels(out, "7%")?;
    writeln!(out, "    </table>")?;
    write_credits(out)
}

fn write_column_labels<W: Write>(out: &mut W, width: &str) -> io::Result<()> {
    writeln!(out, "      <tr align=\"center\">")?;
    writeln!(out, "        <th width=\"{}\">&nbsp;</th>", width)?;
    for digit in HEX_DIGITS {
        writeln!(
            out,
            "        <th width=\"{}\"><big><big>{}</big></big>{}</th>",
            width, NB_HYPHEN, *digit as char
        )?;
    }
    writeln!(out, "        <th width=\"{}\">&nbsp;</th>", width)?;
    writeln!(out, "      </tr>")
}

fn write_row_label<W: Write>(out: &mut W, hi: u8) -> io::Result<()> {
    writeln!(
        out,
        "        <th align=\"center\">&nbsp;{:X}<big><big>{}</big></big>&nbsp;</th>",
        hi, NB_HYPHEN
    )
}

fn write_cell<W: Write>(out: &mut W, dis: &Disassembly) -> io::Result<()> {
    writeln!(
        out,
        "        <td><table summary=\"\" align=\"center\" border=\"0\">"
    )?;
    writeln!(
        out,
        "          <tr><td align=\"left\"><small><b>{}</b></small></td>",
        dis.size
    )?;
    writeln!(
        out,
        "              <td align=\"right\"><small><b>{}</b></small></td></tr>",
        dis.timing
    )?;
    writeln!(
        out,
        "          <tr><th colspan=\"2\"><a href=\"#{0}\">{0}</a></th></tr>",
        dis.mnemonic
    )?;
    writeln!(
        out,
        "          <tr><td align=\"center\" colspan=\"2\"><small>{}</small></td></tr>",
        dis.mode.chart_name()
    )?;
    writeln!(
        out,
        "          <tr><td align=\"center\" colspan=\"2\"><small>[{}]</small></td></tr>",
        flag_markup(dis.flags.affected())
    )?;
    writeln!(out, "        </table></td>")
}

/// Flag letters with bit 5 shown as a non-breaking hyphen
pub(super) fn flag_markup(flags: Flags) -> String {
    flags.letters().replace('-', NB_HYPHEN)
}

fn write_credits<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "    <table summary=\"\" border=\"0\" cellpadding=\"0\" width=\"100%\">"
    )?;
    writeln!(out, "      <tr><td align=\"right\">autogenerated from ")?;
    writeln!(
        out,
        "        <a href=\"{}\" target=\"extern6502\">6502 Instruction Set</a>",
        REFERENCE_URL
    )?;
    writeln!(
        out,
        "        by <a href=\"https://masswerk.at/\" target=\"extern6502\">mass:werk</a>"
    )?;
    writeln!(out, "      </td></tr>")?;
    writeln!(out, "    </table>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chart: &Chart) -> String {
        let mut out = Vec::new();
        write_page(chart, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_page_shape() {
        let page = render(&Chart::default());
        // header + 16 body rows + footer
        assert_eq!(page.matches("      <tr>\n").count(), 16);
        assert_eq!(page.matches("<tr align=\"center\">").count(), 2);
        assert_eq!(page.matches("<td>&nbsp;</td>").count(), 105);
        assert_eq!(page.matches("<a href=\"#").count(), 151);
        assert!(page.ends_with("    </table>\n"));
    }

    #[test]
    fn test_adc_immediate_cell() {
        let page = render(&Chart::default());
        let expected = concat!(
            "        <td><table summary=\"\" align=\"center\" border=\"0\">\n",
            "          <tr><td align=\"left\"><small><b>2</b></small></td>\n",
            "              <td align=\"right\"><small><b>2</b></small></td></tr>\n",
            "          <tr><th colspan=\"2\"><a href=\"#ADC\">ADC</a></th></tr>\n",
            "          <tr><td align=\"center\" colspan=\"2\"><small>Immediate</small></td></tr>\n",
            "          <tr><td align=\"center\" colspan=\"2\"><small>[NV&#8209;bdiZC]</small></td></tr>\n",
            "        </table></td>\n",
        );
        assert!(page.contains(expected));
    }

    #[test]
    fn test_branch_timing_marker() {
        let page = render(&Chart::default());
        assert!(page.contains("<a href=\"#BCC\">BCC</a>"));
        assert!(page.contains("<small><b>2++</b></small>"));
        assert!(page.contains("<small><b>4+</b></small>"));
    }

    #[test]
    fn test_row_labels() {
        let page = render(&Chart::default());
        let label = "<th align=\"center\">&nbsp;F<big><big>&#8209;</big></big>&nbsp;</th>";
        assert_eq!(page.matches(label).count(), 2);
    }

    #[test]
    fn test_flag_markup() {
        assert_eq!(flag_markup(Flags::empty()), "nv&#8209;bdizc");
        assert_eq!(flag_markup(Flags::INTERRUPT_DISABLE), "nv&#8209;bdIzc");
    }
}
