//! pt-BR display formatting. All money and distance arithmetic upstream is
//! carried in integer hundredths; these helpers only turn those into text.

use chrono::NaiveDate;

/// Convert a raw decimal into integer hundredths, rounding once.
pub fn to_hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Format hundredths as Brazilian currency: `R$ 1.234,56`.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}R$ {}", sign, group_hundredths(cents.unsigned_abs()))
}

/// Format hundredths as a plain two-decimal number: `1.234,56`.
pub fn format_decimal_br(hundredths: i64) -> String {
    let sign = if hundredths < 0 { "-" } else { "" };
    format!("{}{}", sign, group_hundredths(hundredths.unsigned_abs()))
}

/// Format hundredths of a kilometer as `1.234,56 km`.
pub fn format_km(centi_km: i64) -> String {
    format!("{} km", format_decimal_br(centi_km))
}

fn group_hundredths(hundredths: u64) -> String {
    let whole = (hundredths / 100).to_string();
    let frac = hundredths % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{grouped},{frac:02}")
}

/// ISO date (`yyyy-mm-dd`) to `dd/mm/yyyy`; anything unparsable renders the
/// same invalid-date text the product has always shown.
pub fn format_date_br(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => "Data inválida".to_string(),
    }
}

/// Driver license (CNH) digit grouping: `000.000.000-00`. Non-digits are
/// stripped and input is capped at 11 digits, so partially typed values
/// format progressively.
pub fn format_cnh(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    let mut out = String::with_capacity(14);
    for (index, digit) in digits.iter().enumerate() {
        match index {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(*digit);
    }
    out
}

/// Average consumption display: `2,4 Km/L`.
pub fn format_km_per_liter(value: f64) -> String {
    format!("{} Km/L", value.to_string().replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_formatting_groups_thousands() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(1200), "R$ 12,00");
        assert_eq!(format_brl(8000), "R$ 80,00");
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(100_000_000), "R$ 1.000.000,00");
        assert_eq!(format_brl(-5_075), "-R$ 50,75");
    }

    #[test]
    fn decimal_formatting_uses_comma() {
        assert_eq!(format_decimal_br(12_050), "120,50");
        assert_eq!(format_decimal_br(1_000), "10,00");
        assert_eq!(format_km(12_050), "120,50 km");
    }

    #[test]
    fn rounding_happens_once_per_value() {
        assert_eq!(to_hundredths(10.005), 1000);
        assert_eq!(to_hundredths(20.0), 2000);
        assert_eq!(to_hundredths(120.5), 12050);
        assert_eq!(to_hundredths(0.0), 0);
    }

    #[test]
    fn dates_render_brazilian_or_invalid() {
        assert_eq!(format_date_br("2021-03-10"), "10/03/2021");
        assert_eq!(format_date_br("2021-3-9"), "09/03/2021");
        assert_eq!(format_date_br("10/03/2021"), "Data inválida");
        assert_eq!(format_date_br(""), "Data inválida");
    }

    #[test]
    fn cnh_groups_digits_progressively() {
        assert_eq!(format_cnh("12345678901"), "123.456.789-01");
        assert_eq!(format_cnh("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_cnh("1234"), "123.4");
        assert_eq!(format_cnh(""), "");
        // Extra digits beyond the CNH length are dropped.
        assert_eq!(format_cnh("123456789012345"), "123.456.789-01");
    }

    #[test]
    fn consumption_display() {
        assert_eq!(format_km_per_liter(2.4), "2,4 Km/L");
        assert_eq!(format_km_per_liter(3.0), "3 Km/L");
    }
}
