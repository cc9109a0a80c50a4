use std::fmt::Display;
use chrono::NaiveDateTime;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use crate::analyzer::month_name;
use crate::transaction::Transaction;

/// Renders query results as terminal tables
pub struct Report {
    currency: String,
}

impl Report {
    pub fn new(currency: &str) -> Report {
        Report { currency: currency.to_string() }
    }

    pub fn transactions(&self, transactions: &[&Transaction]) -> Table {
        let mut table = new_table();
        table.set_header(vec!["ID", "Date", "Type", "Merchant", "Description", "Amount"]);

        for t in transactions {
            let date = match t.parsed_date() {
                Some(date) => format_date(date),
                None => t.date.clone(),
            };
            let amount = match t.amount.value() {
                Some(amount) => self.format_amount(amount),
                None => t.amount.to_string(),
            };

            table.add_row(vec![
                Cell::new(t.id.as_str()).set_alignment(CellAlignment::Right),
                Cell::new(date.as_str()),
                Cell::new(t.transaction_type.as_str()),
                Cell::new(t.merchant_name.as_str()),
                Cell::new(t.short_description().as_str()),
                Cell::new(amount.as_str()).set_alignment(CellAlignment::Right),
            ]);
        }

        table
    }

    pub fn amount(&self, header: &str, amount: f64) -> Table {
        let mut table = new_table();
        table.set_header(vec![header]);
        table.add_row(vec![Cell::new(self.format_amount(amount)).set_alignment(CellAlignment::Right)]);
        table
    }

    /// One value per row, e.g. transaction types or descriptions
    pub fn values<T: Display>(&self, header: &str, values: impl IntoIterator<Item = T>) -> Table {
        let mut table = new_table();
        table.set_header(vec![header]);
        for value in values {
            table.add_row(vec![Cell::new(value)]);
        }
        table
    }

    /// Two decimals, followed by the configured currency if any
    pub fn format_amount(&self, amount: f64) -> String {
        if self.currency.is_empty() {
            format!("{amount:.2}")
        } else {
            format!("{amount:.2} {}", self.currency)
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Header describing a year/month/day filter, e.g. "Total for April 2019" or "Total for day 10"
pub fn date_filter_label(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> String {
    let mut parts: Vec<String> = vec![];
    if let Some(day) = day {
        parts.push(if month.is_some() { day.to_string() } else { format!("day {day}") });
    }
    if let Some(month) = month {
        parts.push(month_name(month).map_or_else(|| format!("month {month}"), str::to_string));
    }
    if let Some(year) = year {
        parts.push(year.to_string());
    }

    if parts.is_empty() {
        "Total".to_string()
    } else {
        format!("Total for {}", parts.join(" "))
    }
}
