//! Terminal rendering of workstation cards, the average banner and the
//! empty state.

use crate::core::presenter::classify;
use crate::core::session::Session;
use crate::models::WorkstationRecord;
use crate::utils::colors::{bold, dimmed, paint_tier};
use crate::utils::formatting::{hours, number, pad_right, pct};
use crate::utils::table::{Column, Table};

const CARD_WIDTH: usize = 56;
const LEFT_COLUMN: usize = 26;

fn two_col(left: &str, right: &str) -> String {
    format!("    {}{}\n", pad_right(left, LEFT_COLUMN), right)
}

pub fn render_card(record: &WorkstationRecord, color: bool) -> String {
    let m = record.metrics();
    let input = record.input();
    let tier = classify(m.overall_efficiency);

    let rule = dimmed(&"─".repeat(CARD_WIDTH), color);
    let badge = paint_tier(&format!("[ {} ]", pct(m.overall_efficiency)), tier, color);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "#{}  {}\n",
        record.id(),
        bold(record.name(), color)
    ));
    out.push_str(&format!(
        "    {} Overall Efficiency ({})\n\n",
        badge,
        tier.as_str()
    ));

    out.push_str(&two_col(
        &format!("Completion Rate: {}", pct(m.completion_rate)),
        &format!("Productivity: {}", pct(m.productivity_rate)),
    ));
    out.push_str(&two_col(
        &format!("Tasks/Hour: {:.2}", m.tasks_per_hour),
        &format!("Quality Score: {}/100", number(input.quality_score)),
    ));
    out.push('\n');
    out.push_str(&two_col(
        &format!(
            "Tasks: {}/{}",
            number(input.tasks_completed),
            number(input.total_tasks)
        ),
        &format!("Hours Worked: {}h", number(input.hours_worked)),
    ));
    out.push_str(&two_col(
        &format!("Downtime: {}h", number(input.downtime)),
        &format!("Productive: {}", hours(m.productive_hours)),
    ));
    out.push_str(&rule);
    out.push('\n');

    out
}

/// Average across the session; `None` when there is nothing to average.
pub fn render_banner(session: &Session, color: bool) -> Option<String> {
    if session.records().is_empty() {
        return None;
    }

    let avg = session.average_efficiency();
    let tier = classify(avg);

    Some(format!(
        "Average Efficiency Across All Workstations: {}\nTotal Workstations: {}\n",
        paint_tier(&pct(avg), tier, color),
        session.records().len()
    ))
}

pub fn render_empty_state(color: bool) -> String {
    let body = textwrap::fill(
        "Add your first workstation with `add` (or `set` each field and `submit`) to start tracking efficiency!",
        CARD_WIDTH,
    );
    format!("{}\n{}\n", bold("No Workstations Yet", color), body)
}

/// Banner followed by every card, or the empty state.
pub fn render_session(session: &Session, color: bool) -> String {
    match render_banner(session, color) {
        None => render_empty_state(color),
        Some(banner) => {
            let mut out = banner;
            out.push('\n');
            for record in session.records() {
                out.push_str(&render_card(record, color));
            }
            out
        }
    }
}

/// Compact one-line-per-workstation view.
pub fn render_table(session: &Session, color: bool) -> String {
    let mut table = Table::new(
        [
            "ID",
            "Name",
            "Completion",
            "Productivity",
            "Tasks/h",
            "Quality",
            "Efficiency",
        ]
        .into_iter()
        .map(Column::new)
        .collect(),
    );

    for r in session.records() {
        let m = r.metrics();
        let tier = classify(m.overall_efficiency);
        table.add_row(vec![
            r.id().to_string(),
            r.name().to_string(),
            pct(m.completion_rate),
            pct(m.productivity_rate),
            format!("{:.2}", m.tasks_per_hour),
            number(r.input().quality_score),
            paint_tier(&pct(m.overall_efficiency), tier, color),
        ]);
    }

    table.render()
}
