//! Number rendering that matches a default-configured output stream

/// Significant digits printed for floating point values
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Render a double like `%g` with six significant digits
///
/// Fixed notation is used while the decimal exponent is in `-4..6`, scientific
/// notation otherwise. Trailing zeros are always stripped.
pub fn fmt_f64(value: f64) -> String {
    if value.is_nan() {
        let text = if value.is_sign_negative() { "-nan" } else { "nan" };
        return text.to_string();
    }
    if value.is_infinite() {
        let text = if value < 0.0 { "-inf" } else { "inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    // Rounding to the significant digits can bump the exponent (999999.5 -> 1e+06),
    // so take it from the rounded scientific form.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return value.to_string(),
        },
        None => return value.to_string(),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Render a boolean as `1` or `0`
pub fn fmt_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
