//! Number formatting shared by the display targets and chart tooltips

/// Currency a value is displayed in. Decides the prefix and the precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Krw,
}

impl Currency {
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Krw => "₩",
        }
    }

    pub fn decimal_places(&self) -> usize {
        match self {
            Currency::Usd => 2,
            Currency::Krw => 0,
        }
    }

    /// Format a value with this currency's prefix, e.g. `$1,234.50` or `₩98,000,000`
    pub fn format(&self, value: f64) -> String {
        format!("{}{}", self.prefix(), format_number(value, self.decimal_places()))
    }
}

/// Round `value` to `decimal_places` and group the integer digits by thousands.
///
/// No currency symbol is added; see [`Currency::format`].
pub fn format_number(value: f64, decimal_places: usize) -> String {
    let fixed = format!("{:.*}", decimal_places, value);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a price change, adding `+` only for strictly positive values
pub fn format_signed(value: f64, decimal_places: usize) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_number(value, decimal_places))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_number(1234567.0, 2), "1,234,567.00");
        assert_eq!(format_number(999.0, 2), "999.00");
        assert_eq!(format_number(1000.0, 0), "1,000");
    }

    #[test]
    fn test_zero_without_decimals() {
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn test_rounds_and_keeps_sign() {
        assert_eq!(format_number(-1234.567, 2), "-1,234.57");
        assert_eq!(format_number(98765432.4, 0), "98,765,432");
    }

    #[test]
    fn test_signed_prefix_only_when_positive() {
        assert_eq!(format_signed(1.5, 2), "+1.50");
        assert_eq!(format_signed(0.0, 2), "0.00");
        assert_eq!(format_signed(-2000.0, 0), "-2,000");
    }

    #[test]
    fn test_currency_prefixes() {
        assert_eq!(Currency::Usd.format(1234.5), "$1,234.50");
        assert_eq!(Currency::Krw.format(98000000.0), "₩98,000,000");
    }
}
