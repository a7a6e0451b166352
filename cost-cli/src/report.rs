//! Report output for the terminal.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use cost_core::CalculatorReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &CalculatorReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    report: &CalculatorReport,
) -> Result<()> {
    let inputs = &report.inputs;
    let display = &report.display;

    writeln!(out, "Your smoking costs")?;
    writeln!(out, "  Price per pack:   ${}", inputs.price_per_pack.normalize())?;
    writeln!(out, "  Packs per week:   {}", inputs.packs_per_week.normalize())?;
    writeln!(out, "  Years smoking:    {}", display.years)?;
    writeln!(out)?;

    writeln!(out, "Money spent")?;
    writeln!(out, "  Per month:        {}", display.monthly_cost)?;
    writeln!(out, "  Per year:         {}", display.yearly_cost)?;
    writeln!(
        out,
        "  In {} years:{:>pad$}{}",
        display.years,
        "",
        display.total_cost,
        pad = pad_after_years(&display.years)
    )?;
    writeln!(out)?;

    writeln!(out, "Savings if you quit today")?;
    writeln!(out, "  1 week:           {}", display.savings_week)?;
    writeln!(out, "  1 month:          {}", display.savings_month)?;
    writeln!(out, "  3 months:         {}", display.savings_three_months)?;
    writeln!(out, "  1 year:           {}", display.savings_year)?;
    writeln!(out, "  5 years:          {}", display.savings_five_years)?;
    writeln!(out)?;

    writeln!(out, "Time spent smoking")?;
    writeln!(out, "  Per day:          {}", display.time_per_day)?;
    writeln!(out, "  Per month:        {}", display.time_per_month)?;
    writeln!(out, "  In total:         {}", display.time_total)?;
    writeln!(out)?;

    writeln!(out, "What your monthly spend could buy instead")?;
    for alternative in &report.alternatives {
        writeln!(
            out,
            "  {} {}: {}",
            alternative.icon(),
            alternative.name(),
            alternative.caption()
        )?;
    }

    Ok(())
}

/// Keeps the lifetime total aligned with the other rows ("  In N years:").
fn pad_after_years(years: &str) -> usize {
    let label = "  In  years:".len() + years.len();
    20usize.saturating_sub(label).max(1)
}
