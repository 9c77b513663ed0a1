//! Output formatting helpers.
//!
//! Two small dialect translators live here: the numbro-style number
//! formats accepted by `floating()` (e.g. `"$0,0.00"`) and the
//! moment-style date formats accepted by `date()` (e.g.
//! `"YYYY-MM-ddThh:mm:ss Z"`), which are rewritten into chrono format
//! strings.

/// Format a number with a numbro-subset format string.
///
/// Supported: an optional `$` prefix, `0` or `0,0` for the integer part
/// (the latter with thousands separators), and an optional `.00...`
/// fixed-decimals suffix.
pub fn format_number(value: f64, format: &str) -> Result<String, String> {
    let (prefix, rest) = match format.strip_prefix('$') {
        Some(rest) => ("$", rest),
        None => ("", format),
    };

    let (int_spec, dec_spec) = match rest.split_once('.') {
        Some((int_spec, dec_spec)) => (int_spec, Some(dec_spec)),
        None => (rest, None),
    };

    let grouped = match int_spec {
        "0" => false,
        "0,0" => true,
        other => return Err(format!("unsupported integer pattern '{other}'")),
    };

    let decimals = match dec_spec {
        None => 0,
        Some(spec) if !spec.is_empty() && spec.chars().all(|c| c == '0') => spec.len(),
        Some(spec) => return Err(format!("unsupported decimal pattern '.{spec}'")),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_digits, frac_digits) = match rendered.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits.to_string(), Some(frac_digits.to_string())),
        None => (rendered, None),
    };

    let int_part = if grouped {
        group_thousands(&int_digits)
    } else {
        int_digits
    };

    let mut out = format!("{sign}{prefix}{int_part}");
    if let Some(frac) = frac_digits {
        out.push('.');
        out.push_str(&frac);
    }
    Ok(out)
}

/// Insert thousands separators into a digit string.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}

/// Translate a moment-subset date format into a chrono format string.
///
/// Recognized tokens: `YYYY`, `YY`, `MM`, `dd`/`DD`, `hh`/`HH`, `mm`,
/// `ss`, `Z`. Everything else passes through literally.
pub fn translate_date_format(format: &str) -> String {
    const TOKENS: &[(&str, &str)] = &[
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("dd", "%d"),
        ("HH", "%H"),
        ("hh", "%H"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("Z", "%:z"),
    ];

    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_number(1234.5, "$0,0.00").unwrap(), "$1,234.50");
        assert_eq!(format_number(87.126, "$0,0.00").unwrap(), "$87.13");
    }

    #[test]
    fn test_format_plain_grouping() {
        assert_eq!(format_number(1234567.0, "0,0").unwrap(), "1,234,567");
        assert_eq!(format_number(999.0, "0,0").unwrap(), "999");
    }

    #[test]
    fn test_format_fixed_decimals_without_grouping() {
        assert_eq!(format_number(3.14159, "0.000").unwrap(), "3.142");
        assert_eq!(format_number(42.0, "0").unwrap(), "42");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-1234.5, "$0,0.00").unwrap(), "-$1,234.50");
    }

    #[test]
    fn test_format_rejects_unknown_pattern() {
        assert!(format_number(1.0, "0,0.0a").is_err());
        assert!(format_number(1.0, "#,#").is_err());
    }

    #[test]
    fn test_translate_fixture_format() {
        assert_eq!(
            translate_date_format("YYYY-MM-ddThh:mm:ss Z"),
            "%Y-%m-%dT%H:%M:%S %:z"
        );
    }

    #[test]
    fn test_translate_passes_literals_through() {
        assert_eq!(translate_date_format("dd/MM/YYYY"), "%d/%m/%Y");
        assert_eq!(translate_date_format("at 100%"), "at 100%%");
    }
}
