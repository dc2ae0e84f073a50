// File: crates/chartkit-core/src/format.rs
// Summary: Marker label formatting: precision chosen from the tick increment, thousands grouping.

/// Separator inserted between groups of three integer digits.
pub const THOUSAND_SEPARATOR: char = ',';

/// True when `x` is a whole number, allowing for float noise such as `0.07 * 100`.
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && (x - x.round()).abs() <= 1e-9 * x.abs().max(1.0)
}

/// Decimal places used for labels at `increment`. `None` means the value's
/// natural string form. Checked in order; the first matching rule wins.
pub fn decimals_for_increment(increment: f64) -> Option<usize> {
    if increment >= 10.0 || is_integral(increment) {
        Some(0)
    } else if increment >= 1.0 || is_integral(increment * 10.0) {
        Some(1)
    } else if increment >= 0.1 || is_integral(increment * 100.0) {
        Some(2)
    } else if increment >= 0.01 || is_integral(increment * 1_000.0) {
        Some(3)
    } else if increment >= 0.001 || is_integral(increment * 10_000.0) {
        Some(4)
    } else {
        None
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    // "-0", "-0.00": a value that rounds to zero prints without a sign
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Format `value` for a marker at `increment`, with thousands grouping.
/// Whole-number labels drop the fraction rather than rounding it.
pub fn format_with_increment(value: f64, increment: f64) -> String {
    let raw = match decimals_for_increment(increment) {
        Some(0) => fixed(value.trunc(), 0),
        Some(d) => fixed(value, d),
        None => value.to_string(),
    };
    insert_thousands_separator(&raw)
}

/// Formatting context for when no increment is known yet: precision then
/// follows the spread of the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelFormatter {
    pub spread: f64,
    pub marker_count: usize,
    pub explicit_increment: bool,
}

impl LabelFormatter {
    pub fn format(&self, value: f64, increment: Option<f64>) -> String {
        if let Some(inc) = increment {
            return format_with_increment(value, inc);
        }
        let divisor = if self.marker_count == 0 { 1.0 } else { self.marker_count as f64 };
        let raw = if is_integral(self.spread / divisor) || self.explicit_increment || self.spread > 10.0 {
            fixed(value.trunc(), 0)
        } else if self.spread >= 3.0 {
            fixed(value, 2)
        } else {
            value.to_string()
        };
        insert_thousands_separator(&raw)
    }
}

/// Group integer digits in threes. Only the part before the first `.` is
/// touched, and only runs of more than three digits change, so applying it to
/// its own output is a no-op.
pub fn insert_thousands_separator(s: &str) -> String {
    let (int_part, rest) = match s.find('.') {
        Some(i) => s.split_at(i),
        None => (s, ""),
    };
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    let mut run = String::new();
    for ch in int_part.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else {
            push_grouped(&mut out, &run);
            run.clear();
            out.push(ch);
        }
    }
    push_grouped(&mut out, &run);
    out.push_str(rest);
    out
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSAND_SEPARATOR);
        }
        out.push(ch);
    }
}
