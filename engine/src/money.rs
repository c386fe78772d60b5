//! Peso amounts the way the report screens print them: comma decimal
//! separator, dot thousands grouping ("es-AR" convention).

/// Formats `value` with two decimals, e.g. `1234.5` -> `"1.234,50"`.
/// The caller adds the currency sign.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    // Amounts that round to zero drop the sign.
    let sign = if value < 0.0 && (int_part != "0" || dec_part != "00") {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{dec_part}")
}
