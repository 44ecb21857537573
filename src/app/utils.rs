use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;

pub fn parse_datetime(field: &str) -> Result<DateTime<Local>> {
    let date_str = format!("{} 00:00:00", field.trim());
    let naive = chrono::NaiveDateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("Failed to parse date '{}'", field))?;

    Ok(Local.from_utc_datetime(&naive))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Empty cells are treated as absent values.
pub fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

pub fn parse_optional_decimal(field: Option<&str>, field_name: &str) -> Result<Option<Decimal>> {
    non_empty(field)
        .map(|value| parse_decimal(value, field_name))
        .transpose()
}

pub fn parse_optional_months(field: Option<&str>, field_name: &str) -> Result<Option<i32>> {
    non_empty(field)
        .map(|value| {
            value
                .parse::<i32>()
                .with_context(|| format!("Failed to parse {} '{}'", field_name, value))
        })
        .transpose()
}

pub fn parse_optional_datetime(field: Option<&str>) -> Result<Option<DateTime<Local>>> {
    non_empty(field).map(parse_datetime).transpose()
}

pub fn parse_flag(field: Option<&str>, field_name: &str) -> Result<bool> {
    let Some(value) = non_empty(field) else {
        return Ok(false);
    };

    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(anyhow::anyhow!("Failed to parse {} '{}'", field_name, value)),
    }
}

/// Dates are held as UTC midnights, so they are printed on the UTC calendar.
pub fn format_date(date: &DateTime<Local>) -> String {
    date.naive_utc().format("%Y-%m-%d").to_string()
}
