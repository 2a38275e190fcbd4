// On-screen report rendering

use crossterm::style::Stylize;

use super::chart::ChartRenderer;
use crate::assessment::PersonalityCode;
use crate::catalog::PersonalityRecord;
use crate::report::Report;

/// Banner shown before each run
pub fn render_intro(question_count: usize) -> String {
    let rule = "====================================================";
    format!(
        "{}\n{}\n{}\n{}\n",
        rule.cyan(),
        "        Welcome to the Personality Type Test".cyan(),
        rule.cyan(),
        format!(
            "Answer {} statements with 1 (Agree) or 2 (Disagree).",
            question_count
        )
        .yellow()
    )
}

/// Description, lists and compatible types for one code
pub fn render_type_card(record: &PersonalityRecord, compatible: &[PersonalityCode]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", record.description));

    push_list(&mut out, "Strengths:", &record.strengths);
    push_list(&mut out, "Weaknesses:", &record.weaknesses);
    push_list(&mut out, "Ideal Careers:", &record.careers);

    if let Some(partner) = &record.partner_preferences {
        out.push_str(&format!("{} {}\n\n", "Partner Preferences:".blue(), partner));
    }

    out.push_str(&format!("{}\n", "Compatible Types:".cyan()));
    if compatible.is_empty() {
        out.push_str("No data available.\n");
    } else {
        for other in compatible {
            out.push_str(&format!(" - {}\n", other));
        }
    }

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", title.blue()));
    for item in items {
        out.push_str(&format!(" - {}\n", item));
    }
    out.push('\n');
}

/// The full on-screen report, with an optional chart above the type line
pub fn render_report(report: &Report, chart: Option<&dyn ChartRenderer>) -> String {
    let mut out = String::new();

    if let Some(chart) = chart {
        out.push_str(&format!("\n{}\n", chart.render(report.tally()).magenta()));
    }

    let headline = if report.is_catalogued() {
        format!(
            "{}, your personality type is: {} - {}",
            report.profile().name,
            report.code(),
            report.record().name
        )
    } else {
        format!(
            "{}, your personality type is: {}",
            report.profile().name,
            report.code()
        )
    };
    out.push_str(&format!("{}\n\n", headline.green()));

    out.push_str(&render_type_card(report.record(), report.compatible()));
    out
}
