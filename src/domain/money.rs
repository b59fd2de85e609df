use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents with exactly two decimals.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents the way amounts are shown to the user: no trailing fractional zeros.
/// Example: 10000 -> "100", 4050 -> "40.5", 5 -> "0.05"
pub fn format_amount(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    match abs_cents % 100 {
        0 => format!("{}{}", sign, units),
        r if r % 10 == 0 => format!("{}{}.{}", sign, units, r / 10),
        r => format!("{}{}.{:02}", sign, units, r),
    }
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Amounts finer than one cent cannot be represented and are refused, never rounded.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimal)) => (units, decimal),
        None => (digits, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::Overflow)?
    };

    // Digits past the cents are only allowed when they are zeros
    let (cents_str, rest) = decimal_str.split_at(decimal_str.len().min(2));
    if rest.bytes().any(|b| b != b'0') {
        return Err(ParseCentsError::TooPrecise);
    }

    let decimal_cents: i64 = match cents_str.len() {
        0 => 0,
        1 => cents_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => cents_str.parse().map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::Overflow)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("invalid money format")]
    InvalidFormat,

    #[error("amount is too large")]
    Overflow,

    #[error("amount has more than two decimal places")]
    TooPrecise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
    }

    #[test]
    fn test_format_amount_drops_trailing_zeros() {
        assert_eq!(format_amount(10000), "100");
        assert_eq!(format_amount(4050), "40.5");
        assert_eq!(format_amount(4005), "40.05");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(-250), "-2.5");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents(" 12.5 "), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("7."), Ok(700));
        assert_eq!(parse_cents("+3"), Ok(300));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("1.500"), Ok(150));
    }

    #[test]
    fn test_parse_cents_invalid() {
        for input in ["", "abc", "12.34.56", ".", "-", "NaN", "inf", "1e3", "12abc", "1 000"] {
            assert_eq!(
                parse_cents(input),
                Err(ParseCentsError::InvalidFormat),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_cents_never_truncates() {
        assert_eq!(parse_cents("100.999"), Err(ParseCentsError::TooPrecise));
        assert_eq!(parse_cents("0.001"), Err(ParseCentsError::TooPrecise));
        assert_eq!(parse_cents("-2.345"), Err(ParseCentsError::TooPrecise));
        assert_eq!(parse_cents("1.2x0"), Err(ParseCentsError::InvalidFormat));
    }

    #[test]
    fn test_parse_cents_overflow() {
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::Overflow)
        );
        assert_eq!(
            parse_cents("92233720368547759"),
            Err(ParseCentsError::Overflow)
        );
    }
}
