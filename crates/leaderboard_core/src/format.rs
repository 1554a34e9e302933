//! Number parsing and display helpers shared by every panel.
//!
//! Parsing follows "leading number" semantics: whitespace is skipped and the
//! longest numeric prefix wins, so `"12abc"` reads as `12` and `"abc"` reads
//! as nothing.

use std::fmt;

/// Result of [`format_number`]. Values that could not be read as a number are
/// handed back untouched so callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedNumber {
    Formatted(String),
    Passthrough(String),
}

impl FormattedNumber {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(text) | Self::Passthrough(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(text) | Self::Passthrough(text) => text,
        }
    }

    pub const fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the longest floating point prefix of `text`.
pub fn leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses the longest base-10 integer prefix of `text`.
pub fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(|c| c == '+' || c == '-'));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Drops everything except digits, dots and minus signs.
pub fn strip_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Reads values such as `"$1,250,000"` as plain numbers.
pub fn parse_numeric(text: &str) -> Option<f64> {
    leading_float(&strip_numeric(text))
}

/// Compact human form of a numeric-like value: `2B`, `1.5M`, `120.5K`, `999`.
///
/// Anything that does not parse is returned unchanged as
/// [`FormattedNumber::Passthrough`].
pub fn format_number(value: &str) -> FormattedNumber {
    parse_numeric(value).map_or_else(
        || FormattedNumber::Passthrough(value.to_string()),
        |number| FormattedNumber::Formatted(format_amount(number)),
    )
}

/// Threshold formatting for an already parsed number.
pub fn format_amount(number: f64) -> String {
    if number >= 1e9 {
        compact(number / 1e9, 'B')
    } else if number >= 1e6 {
        compact(number / 1e6, 'M')
    } else if number >= 1e3 {
        compact(number / 1e3, 'K')
    } else {
        format_grouped(number)
    }
}

fn compact(scaled: f64, suffix: char) -> String {
    let fixed = format!("{scaled:.1}");
    let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
    format!("{trimmed}{suffix}")
}

/// en-US grouping with at most three fraction digits: `1234.5` → `1,234.5`.
pub fn format_grouped(number: f64) -> String {
    let rounded = format!("{:.3}", number.abs());
    let (integer, fraction) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if number < 0.0 && (integer != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Inserts thousands separators into a run of ASCII digits.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (len - position) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Whole-dollar currency: `1234.5` → `$1,235`.
pub fn format_usd_whole(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_digits(&digits))
}

/// `Days Since Last Funding` is shown rounded up; unreadable text is kept
/// and a count that rounds to zero leaves the cell empty.
pub fn ceil_days(text: &str) -> String {
    leading_float(text).map_or_else(
        || text.to_string(),
        |days| {
            let days = days.ceil();
            if days == 0.0 {
                String::new()
            } else {
                format!("{days:.0}")
            }
        },
    )
}
