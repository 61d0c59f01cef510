/// Format a goal value with `,` thousands separators.
///
/// Whole numbers print without decimals; fractional values keep at most two, trailing zeros
/// trimmed. Non-finite values print as `0`.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if v < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    let digits = int_part.as_bytes();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*d));
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `"current / target"` with separators.
pub fn stat_line(current: f64, target: f64) -> String {
    format!("{} / {}", format_number(current), format_number(target))
}

/// Whole-percent label, truncated: `0.999` is `"99%"`.
pub fn percent_label(progress: f64) -> String {
    let pct = (progress.clamp(0.0, 1.0) * 100.0).floor() as u32;
    format!("{pct}%")
}

#[cfg(test)]
#[path = "../../tests/unit/goals/format.rs"]
mod tests;
