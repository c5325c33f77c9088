//! en-US number rendering for KPI cards and wizard summaries.

/// Render `value` with thousands separators and between `min_fraction`
/// and `max_fraction` decimals (trailing zeros beyond the minimum dropped).
pub fn format_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let max_fraction = max_fraction.max(min_fraction);
    let rendered = format!("{:.*}", max_fraction, value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let is_zero = rendered.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// `toLocaleString`-style amount: grouped, up to three decimals.
pub fn format_amount(value: f64) -> String {
    format_number(value, 0, 3)
}

/// Currency rendering with two decimals, e.g. `$12,000.00`.
pub fn format_currency(value: f64, currency: &str) -> String {
    let number = format_number(value.abs(), 2, 2);
    let sign = if value < 0.0 && number.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{currency} {number}"),
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
