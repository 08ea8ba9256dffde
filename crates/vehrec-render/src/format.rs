//! Number formatting for badges

/// Group an amount in thousands with commas, en-US style
///
/// Keeps at most three fraction digits, rounded, with trailing zeros
/// trimmed: `20000.0` -> `"20,000"`, `1234.5678` -> `"1,234.568"`.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Price badge value: `$` followed by the grouped amount
#[inline]
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("${}", group_thousands(value))
}
