//! Display helpers in the storefront's pt-PT style.

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// `"45min"`, or `"2h 04min"` from one hour up.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{}min", rest)
    } else {
        format!("{}h {:02}min", hours, rest)
    }
}

/// Whole euros, symbol after the amount: `"9 €"`, `"12 345 €"`.
///
/// pt-PT only groups thousands from five integer digits up, so `1234`
/// stays ungrouped.
pub fn format_eur(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}{}€", value, NBSP);
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let amount = if digits.len() >= 5 {
        group_thousands(&digits)
    } else {
        digits
    };
    format!("{}{}{}€", sign, amount, NBSP)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NARROW_NBSP);
        }
        out.push(c);
    }
    out
}

/// `"1 peça"`, `"3 peças"`.
pub fn plural_pecas(count: usize) -> String {
    if count == 1 {
        "1 peça".to_string()
    } else {
        format!("{} peças", count)
    }
}
