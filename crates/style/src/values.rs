use crate::ParseError;

/// Measurement unit for a numeric attribute value. `Auto` means the value
/// is resolved by layout, not by the author.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    Px,
    Pt,
    Em,
    Percent,
    #[default]
    Auto,
}

/// A magnitude paired with its unit. The default is `0` auto-calculate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitValue {
    pub magnitude: f64,
    pub unit: Unit,
}

impl UnitValue {
    pub const AUTO: UnitValue = UnitValue {
        magnitude: 0.0,
        unit: Unit::Auto,
    };

    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub const fn px(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Px)
    }

    pub const fn pt(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Pt)
    }

    pub const fn em(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Em)
    }

    pub const fn percent(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::Percent)
    }

    /// Parse a numeric-with-unit spelling. Total: every input produces a
    /// value.
    ///
    /// Whitespace, commas and underscores are stripped and the rest is
    /// lowercased, so `" 1_000 px"` reads as `1000px`. The longest numeric
    /// prefix becomes the magnitude (absent or unparseable prefix: `0`),
    /// the remaining suffix selects the unit. Suffixes outside the known
    /// set (including `auto` / `autocalculate` and the empty suffix) map
    /// to `Auto`.
    pub fn parse(input: &str) -> UnitValue {
        let mut normalized = String::with_capacity(input.len());
        for ch in input.chars() {
            if ch.is_whitespace() || ch == ',' || ch == '_' {
                continue;
            }
            normalized.push(ch.to_ascii_lowercase());
        }

        let bytes = normalized.as_bytes();
        let mut end = 0;
        let mut seen_dot = false;
        while end < bytes.len() {
            let b = bytes[end];
            let is_sign = (b == b'-' || b == b'+') && end == 0;
            let is_dot = b == b'.' && !seen_dot;
            if b.is_ascii_digit() || is_sign || is_dot {
                if is_dot {
                    seen_dot = true;
                }
                end += 1;
            } else {
                break;
            }
        }

        let (number, suffix) = normalized.split_at(end);
        let magnitude = number.parse::<f64>().unwrap_or(0.0);
        let unit = match suffix {
            "px" => Unit::Px,
            "pt" => Unit::Pt,
            "em" => Unit::Em,
            "percent" | "pct" | "%" => Unit::Percent,
            _ => Unit::Auto,
        };
        UnitValue { magnitude, unit }
    }
}

/// Decompose a 1–4 token shorthand into exactly four values
/// (top, right/left pairing follows the usual box expansion).
///
/// Tokens are separated by whitespace/comma runs; the whole string may be
/// wrapped in one pair of `[]`, `{}` or `()`. Token-level parsing is
/// permissive (`UnitValue::parse`); the token *count* is not: zero or more
/// than four tokens is `MalformedQuad`.
pub fn parse_quad(input: &str) -> Result<[UnitValue; 4], ParseError> {
    let inner = strip_brackets(input.trim());
    let tokens: Vec<&str> = inner
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let quad = match tokens.as_slice() {
        [a] => {
            let a = UnitValue::parse(a);
            [a, a, a, a]
        }
        [a, b] => {
            let a = UnitValue::parse(a);
            let b = UnitValue::parse(b);
            [a, b, a, b]
        }
        [a, b, c] => {
            let b = UnitValue::parse(b);
            [UnitValue::parse(a), b, UnitValue::parse(c), b]
        }
        [a, b, c, d] => [
            UnitValue::parse(a),
            UnitValue::parse(b),
            UnitValue::parse(c),
            UnitValue::parse(d),
        ],
        _ => {
            return Err(ParseError::MalformedQuad {
                input: input.to_string(),
            });
        }
    };
    Ok(quad)
}

fn strip_brackets(s: &str) -> &str {
    for (open, close) in [('[', ']'), ('{', '}'), ('(', ')')] {
        if let Some(rest) = s.strip_prefix(open) {
            if let Some(inner) = rest.strip_suffix(close) {
                return inner.trim();
            }
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit_suffix() {
        assert_eq!(UnitValue::parse("10px"), UnitValue::px(10.0));
        assert_eq!(UnitValue::parse("7pt"), UnitValue::pt(7.0));
        assert_eq!(UnitValue::parse("2em"), UnitValue::em(2.0));
        assert_eq!(UnitValue::parse("50percent"), UnitValue::percent(50.0));
        assert_eq!(UnitValue::parse("50pct"), UnitValue::percent(50.0));
        assert_eq!(UnitValue::parse("12.5%"), UnitValue::percent(12.5));
    }

    #[test]
    fn bare_number_is_auto_unit() {
        assert_eq!(
            UnitValue::parse("17"),
            UnitValue::new(17.0, Unit::Auto)
        );
    }

    #[test]
    fn auto_spellings_have_zero_magnitude() {
        assert_eq!(UnitValue::parse("auto"), UnitValue::AUTO);
        assert_eq!(UnitValue::parse("autocalculate"), UnitValue::AUTO);
        assert_eq!(UnitValue::parse("AUTO"), UnitValue::AUTO);
    }

    #[test]
    fn separators_are_stripped_before_parsing() {
        assert_eq!(UnitValue::parse(" 1_000 px"), UnitValue::px(1000.0));
        assert_eq!(UnitValue::parse("1,024 pt"), UnitValue::pt(1024.0));
    }

    #[test]
    fn unknown_suffix_degrades_to_auto() {
        assert_eq!(UnitValue::parse("10furlong"), UnitValue::new(10.0, Unit::Auto));
    }

    #[test]
    fn unparseable_number_degrades_to_zero() {
        assert_eq!(UnitValue::parse("px"), UnitValue::new(0.0, Unit::Px));
        assert_eq!(UnitValue::parse("--3px"), UnitValue::new(0.0, Unit::Auto));
    }

    #[test]
    fn negative_and_fractional_magnitudes() {
        assert_eq!(UnitValue::parse("-5px"), UnitValue::px(-5.0));
        assert_eq!(UnitValue::parse("+0.5em"), UnitValue::em(0.5));
    }

    #[test]
    fn quad_of_four_tokens_keeps_order() {
        let q = parse_quad("10px,20px,30px,40px").unwrap();
        assert_eq!(
            q,
            [
                UnitValue::px(10.0),
                UnitValue::px(20.0),
                UnitValue::px(30.0),
                UnitValue::px(40.0)
            ]
        );
    }

    #[test]
    fn quad_expansion_from_fewer_tokens() {
        let one = parse_quad("5px").unwrap();
        assert_eq!(one, [UnitValue::px(5.0); 4]);

        let two = parse_quad("1px 2px").unwrap();
        assert_eq!(
            two,
            [
                UnitValue::px(1.0),
                UnitValue::px(2.0),
                UnitValue::px(1.0),
                UnitValue::px(2.0)
            ]
        );

        let three = parse_quad("1px 2px 3px").unwrap();
        assert_eq!(
            three,
            [
                UnitValue::px(1.0),
                UnitValue::px(2.0),
                UnitValue::px(3.0),
                UnitValue::px(2.0)
            ]
        );
    }

    #[test]
    fn quad_accepts_bracket_wrapping() {
        let q = parse_quad("[1px 2px 3px 4px]").unwrap();
        assert_eq!(q[3], UnitValue::px(4.0));
        let q = parse_quad("{ 6px }").unwrap();
        assert_eq!(q[0], UnitValue::px(6.0));
        let q = parse_quad("(2pt, 4pt)").unwrap();
        assert_eq!(q[2], UnitValue::pt(2.0));
    }

    #[test]
    fn quad_rejects_empty_and_overlong_input() {
        assert!(matches!(
            parse_quad(""),
            Err(ParseError::MalformedQuad { .. })
        ));
        assert!(matches!(
            parse_quad("[]"),
            Err(ParseError::MalformedQuad { .. })
        ));
        let e = parse_quad("1 2 3 4 5");
        assert!(
            matches!(e, Err(ParseError::MalformedQuad { .. })),
            "expected MalformedQuad, got: {e:?}"
        );
    }
}
