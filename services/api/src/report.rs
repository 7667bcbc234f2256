use chrono::{DateTime, Utc};
use firb_calculator::calculator::{CalculationOutcome, CostBreakdown};
use serde::Serialize;
use std::fmt::{self, Write};

/// Calculation outcome stamped with the time it was produced.
#[derive(Debug, Serialize)]
pub(crate) struct CalculationReport {
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) outcome: CalculationOutcome,
}

impl CalculationReport {
    pub(crate) fn new(outcome: CalculationOutcome, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            outcome,
        }
    }
}

pub(crate) fn render_report(report: &CalculationReport) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    write_report(&mut out, report).map_or_else(|_| String::new(), |()| out)
}

fn write_report(out: &mut String, report: &CalculationReport) -> fmt::Result {
    let outcome = &report.outcome;
    let eligibility = &outcome.eligibility;
    let code = outcome.currency.code.as_str();

    writeln!(
        out,
        "FIRB purchase cost report ({})",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "Eligible to purchase: {}", yes_no(eligibility.can_purchase()))?;
    writeln!(
        out,
        "FIRB approval required: {}",
        yes_no(eligibility.requires_approval())
    )?;
    if let Some(timeline) = eligibility.processing_timeline() {
        writeln!(
            out,
            "Processing: {} days standard, {} days expedited",
            timeline.standard_days, timeline.expedited_days
        )?;
    }
    if !eligibility.restrictions().is_empty() {
        writeln!(out, "Conditions:")?;
        for restriction in eligibility.restrictions() {
            writeln!(out, "  - {restriction}")?;
        }
    }

    write_breakdown(out, &outcome.costs, code)?;

    if code != "AUD" {
        writeln!(
            out,
            "\nConverted at {} {code} per AUD; AUD total investment {}",
            outcome.currency.aud_rate,
            money(outcome.costs_aud.total_investment_cost())
        )?;
    }

    Ok(())
}

fn write_breakdown(out: &mut String, costs: &CostBreakdown, code: &str) -> fmt::Result {
    let upfront = costs.upfront_costs();
    let ongoing = costs.ongoing_costs();

    writeln!(out, "\nUpfront costs ({code})")?;
    for (label, amount) in [
        ("Property price", upfront.property_price()),
        ("FIRB application fee", upfront.firb_fee()),
        ("Stamp duty", upfront.stamp_duty()),
        ("Foreign buyer surcharge", upfront.foreign_surcharge()),
        ("Legal and transfer fees", upfront.legal_fees()),
        ("Inspection fees", upfront.inspection_fees()),
        ("Loan costs", upfront.loan_costs()),
        ("Total", upfront.total()),
    ] {
        write_line_item(out, label, amount)?;
    }

    writeln!(out, "\nAnnual costs ({code})")?;
    for (label, amount) in [
        ("Land tax surcharge", ongoing.land_tax_surcharge()),
        ("Council rates", ongoing.council_rates()),
        ("Water rates", ongoing.water_rates()),
        ("Insurance", ongoing.insurance()),
        ("Maintenance", ongoing.maintenance()),
        ("Vacancy fee", ongoing.vacancy_fee()),
        ("Total", ongoing.total()),
    ] {
        write_line_item(out, label, amount)?;
    }

    writeln!(
        out,
        "\nTotal investment: {} | First year: {}",
        money(costs.total_investment_cost()),
        money(costs.first_year_total())
    )
}

fn write_line_item(out: &mut String, label: &str, amount: f64) -> fmt::Result {
    writeln!(out, "  {label:<26}{:>16}", money(amount))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format an amount with thousands separators and two decimals.
pub(crate) fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
