// src/domain/format.rs

use chrono::{DateTime, Utc};

/// `1250000` -> `$1,250,000`
pub fn format_price(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", group_thousands(amount.unsigned_abs()))
    } else {
        format!("${}", group_thousands(amount.unsigned_abs()))
    }
}

/// `1200` -> `1,200 sq ft`
pub fn format_area(sq_ft: i64) -> String {
    let sign = if sq_ft < 0 { "-" } else { "" };
    format!("{sign}{} sq ft", group_thousands(sq_ft.unsigned_abs()))
}

/// `Mar 5, 2024`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Label for a rooms select: `1`, then `2+`, `3+`, ...
pub fn rooms_label(n: u32) -> String {
    if n <= 1 {
        n.to_string()
    } else {
        format!("{n}+")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
