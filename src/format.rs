//! Tolerant money parsing and display helpers.
//!
//! Every function here is total: renderers cannot recover mid-layout, so any
//! garbage input yields a safe default instead of an error. This module is
//! the single place amounts are parsed; callers must not strip currency
//! symbols themselves.

/// Parses a raw amount string, tolerating currency symbols, locale
/// separators, and surrounding text. Returns `None` when nothing numeric is
/// left after stripping.
///
/// Matches lenient parse-float semantics: after dropping every character
/// other than digits and `.`, the longest valid numeric prefix wins, so
/// `"1.2.3"` parses as `1.2`.
pub fn parse_amount_opt(raw: &str) -> Option<f64> {
    let mut prefix = String::new();
    let mut seen_dot = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => prefix.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                prefix.push(c);
            }
            '.' => break,
            // Strip currency symbols, thousands separators, spaces, text.
            _ => {}
        }
    }
    prefix.parse::<f64>().ok()
}

/// Like [`parse_amount_opt`] but defaults to `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    parse_amount_opt(raw).unwrap_or(0.0)
}

/// Formats a raw amount as `"<symbol> <amount>"` with two decimals.
/// Unparseable input formats as zero: `format_currency("abc", "€")` is
/// `"€ 0.00"`.
pub fn format_currency(raw: &str, symbol: &str) -> String {
    format!("{} {:.2}", symbol, parse_amount(raw))
}

/// Major-unit name for a currency symbol, for amount-in-words lines.
fn major_unit_name(symbol: &str) -> &'static str {
    match symbol {
        "$" => "Dollars",
        "€" => "Euros",
        "£" => "Pounds",
        "¥" => "Yen",
        _ => "Rupees",
    }
}

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digits(n: u64, out: &mut Vec<&'static str>) {
    if n < 20 {
        out.push(ONES[n as usize]);
    } else {
        out.push(TENS[(n / 10) as usize]);
        if n % 10 != 0 {
            out.push(ONES[(n % 10) as usize]);
        }
    }
}

fn three_digits(n: u64, out: &mut Vec<&'static str>) {
    if n >= 100 {
        out.push(ONES[(n / 100) as usize]);
        out.push("Hundred");
    }
    if n % 100 != 0 || n == 0 {
        two_digits(n % 100, out);
    }
}

/// Converts an integer amount to words using Indian grouping
/// (crore/lakh/thousand), prefixed with the currency's major-unit name:
/// `amount_to_words(5310, "₹")` is `"Rupees Five Thousand Three Hundred Ten
/// Only"`. Total and non-empty for every input, including 0.
pub fn amount_to_words(n: u64, symbol: &str) -> String {
    let mut words: Vec<&'static str> = vec![major_unit_name(symbol)];

    if n == 0 {
        words.push("Zero");
    } else {
        let (crore, rest) = (n / 10_000_000, n % 10_000_000);
        let (lakh, rest) = (rest / 100_000, rest % 100_000);
        let (thousand, hundreds) = (rest / 1_000, rest % 1_000);

        if crore > 0 {
            // Crores above 99 recurse through the same grouping.
            if crore >= 100 {
                let upper = amount_to_words(crore, symbol);
                let upper = upper
                    .trim_start_matches(major_unit_name(symbol))
                    .trim()
                    .trim_end_matches("Only")
                    .trim()
                    .to_string();
                let mut s = format!("{} {} Crore", major_unit_name(symbol), upper);
                append_lower(&mut s, lakh, thousand, hundreds);
                s.push_str(" Only");
                return s;
            }
            two_digits(crore, &mut words);
            words.push("Crore");
        }
        if lakh > 0 {
            two_digits(lakh, &mut words);
            words.push("Lakh");
        }
        if thousand > 0 {
            two_digits(thousand, &mut words);
            words.push("Thousand");
        }
        if hundreds > 0 {
            three_digits(hundreds, &mut words);
        }
    }

    words.push("Only");
    words.join(" ")
}

fn append_lower(s: &mut String, lakh: u64, thousand: u64, hundreds: u64) {
    let mut words: Vec<&'static str> = Vec::new();
    if lakh > 0 {
        two_digits(lakh, &mut words);
        words.push("Lakh");
    }
    if thousand > 0 {
        two_digits(thousand, &mut words);
        words.push("Thousand");
    }
    if hundreds > 0 {
        three_digits(hundreds, &mut words);
    }
    for w in words {
        s.push(' ');
        s.push_str(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_separators() {
        assert_eq!(format_currency("₹ 1,234.50", "₹"), "₹ 1234.50");
        assert_eq!(format_currency("Rs 99", "₹"), "₹ 99.00");
        // The dot in an abbreviation survives stripping and reads as the
        // decimal point: "Rs. 99" leaves ".99".
        assert_eq!(format_currency("Rs. 99", "₹"), "₹ 0.99");
    }

    #[test]
    fn garbage_defaults_to_zero() {
        assert_eq!(format_currency("", "$"), "$ 0.00");
        assert_eq!(format_currency("abc", "€"), "€ 0.00");
        assert_eq!(parse_amount("..."), 0.0);
    }

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(parse_amount("1.2.3"), 1.2);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
    }

    #[test]
    fn words_are_total_and_nonempty() {
        assert_eq!(amount_to_words(0, "₹"), "Rupees Zero Only");
        assert_eq!(
            amount_to_words(5310, "₹"),
            "Rupees Five Thousand Three Hundred Ten Only"
        );
        assert_eq!(
            amount_to_words(12_34_567, "₹"),
            "Rupees Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Only"
        );
        assert_eq!(amount_to_words(2_00_00_000, "₹"), "Rupees Two Crore Only");
    }

    #[test]
    fn words_use_currency_unit() {
        assert_eq!(amount_to_words(1, "$"), "Dollars One Only");
        assert_eq!(amount_to_words(20, "£"), "Pounds Twenty Only");
    }
}
