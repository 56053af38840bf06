//! Summary report formatting

use crate::services::{AggregateSummary, ExpenseFilter};

/// English month name for a 1-12 month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Human description of the active filters, e.g. "January 2025 and category 'Leisure'"
pub fn describe_filter(filter: &ExpenseFilter) -> String {
    let mut parts = Vec::new();

    match (filter.year, filter.month) {
        (Some(year), Some(month)) => parts.push(format!("{} {}", month_name(month), year)),
        (Some(year), None) => parts.push(year.to_string()),
        _ => {}
    }
    if let Some(category) = filter.category {
        parts.push(format!("category '{}'", category));
    }

    parts.join(" and ")
}

/// Format the per-category breakdown lines
pub fn format_breakdown(summary: &AggregateSummary) -> String {
    let mut output = String::from("Breakdown by category:\n");
    for (category, subtotal) in &summary.breakdown {
        output.push_str(&format!("- {}: ${}\n", category, subtotal));
    }
    output
}

/// Whether the breakdown should be shown (only when no single category is targeted)
pub fn show_breakdown(filter: &ExpenseFilter) -> bool {
    filter.category.is_none()
}
