//! Text-level primitives. All functions are total and side-effect free.

use crate::estate::{Address, Money};
use chrono::NaiveDate;

pub const CHECKED: &str = "\u{2612}";
pub const UNCHECKED: &str = "\u{2610}";

pub fn checkbox_glyph(checked: bool) -> &'static str {
    if checked {
        CHECKED
    } else {
        UNCHECKED
    }
}

/// Dotted run left on the printed form for a hand-written answer.
pub fn blank_filler(width: usize) -> String {
    ".".repeat(width)
}

pub fn underline_filler(width: usize) -> String {
    "_".repeat(width)
}

pub fn or_blank(value: &str, width: usize) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        blank_filler(width)
    } else {
        trimmed.to_string()
    }
}

pub fn full_name(first: &str, middle: &str, last: &str) -> String {
    [first, middle, last]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// PO box (or street), city, region, country and postal code, comma-joined
/// with empty parts skipped.
pub fn format_address(address: &Address) -> String {
    let po_box = address.po_box.trim();
    let first_line = if po_box.is_empty() {
        address.street.trim().to_string()
    } else if po_box.to_ascii_lowercase().starts_with("po box") {
        po_box.to_string()
    } else {
        format!("PO Box {po_box}")
    };

    [
        first_line.as_str(),
        address.city.trim(),
        address.region.trim(),
        address.country.trim(),
        address.postal_code.trim(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn address_or_blank(address: &Address, width: usize) -> String {
    or_blank(&format_address(address), width)
}

/// `$` prefix, comma thousands grouping and two decimals.
pub fn format_currency(amount: Money) -> String {
    let cents = amount.cents();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (idx, ch) in dollars.chars().enumerate() {
        if idx > 0 && (dollars.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", abs % 100)
}

pub fn format_date(date: Option<NaiveDate>, blank_width: usize) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => blank_filler(blank_width),
    }
}

/// English list join: `A`, `A and B`, `A, B and C`.
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// `(a)`, `(b)`, … `(z)`, `(aa)` for enumerated sub-paragraphs.
pub fn letter_marker(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    let repeat = index / 26 + 1;
    format!("({})", letter.to_string().repeat(repeat))
}
