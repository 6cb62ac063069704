/// Insert a comma every three digits from the right. Non-negative
/// integers only; no rounding, no locale handling.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a fraction as a percentage with two decimal places. The only
/// place population arithmetic crosses into floating point.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Dataset keys use underscores in place of spaces.
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}
