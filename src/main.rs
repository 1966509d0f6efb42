use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use opcode_chart::chart::{Chart, DEFAULT_OPERAND};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// 16x16 HTML table
    Html,
    /// One line per opcode byte
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "opcode-chart")]
#[command(about = "Generate a 6502 opcode reference chart", long_about = None)]
struct Args {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Low operand byte of every sample instruction (hex)
    #[arg(long, value_parser = parse_hex_byte, default_value = "A5")]
    lo: u8,

    /// High operand byte of every sample instruction (hex)
    #[arg(long, value_parser = parse_hex_byte, default_value = "B6")]
    hi: u8,
}

fn parse_hex_byte(s: &str) -> Result<u8, String> {
    let digits = s
        .trim_start_matches('$')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex byte '{}': {}", s, e))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let operand = [args.lo, args.hi];
    if operand != DEFAULT_OPERAND {
        info!("using operand bytes ${:02X} ${:02X}", args.lo, args.hi);
    }
    let chart = Chart::new(operand);

    match &args.output {
        Some(path) => {
            info!("writing {:?} chart to {}", args.format, path.display());
            let file = File::create(path)
                .with_context(|| format!("Error creating {}", path.display()))?;
            render(&chart, args.format, &mut BufWriter::new(file))
                .with_context(|| format!("Error writing {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            render(&chart, args.format, &mut stdout.lock()).context("Error writing to stdout")
        }
    }
}

fn render<W: Write>(chart: &Chart, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Html => chart.write_html(out)?,
        Format::Text => chart.write_listing(out)?,
    }
    out.flush()?;
    Ok(())
}
