//! Free-text day labels -> `chrono::Weekday`.
//!
//! Accepts English names ("monday", "Mon"), Vietnamese labels ("thứ 2",
//! "chủ nhật"), unaccented forms ("thu2", "chu nhat") and short forms
//! ("t2", "cn").

use anyhow::{Result, anyhow};
use chrono::Weekday;
use regex::Regex;

fn numbered_weekday(n: u32) -> Option<Weekday> {
    match n {
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Parse a single day label
pub fn parse_day_label(label: &str) -> Result<Weekday> {
    let ws = Regex::new(r"\s+")?;
    let normalized = ws.replace_all(label.trim(), " ").to_lowercase();

    if let Ok(day) = normalized.parse::<Weekday>() {
        return Ok(day);
    }

    let numbered = Regex::new(r"^(?:thứ|thu|t) ?(?P<n>[2-7])$")?;
    if let Some(caps) = numbered.captures(&normalized) {
        let n: u32 = caps["n"].parse()?;
        return numbered_weekday(n).ok_or_else(|| anyhow!("invalid day number: {n}"));
    }

    let sunday = Regex::new(r"^(?:chủ ?nhật|chu ?nhat|cn)$")?;
    if sunday.is_match(&normalized) {
        return Ok(Weekday::Sun);
    }

    Err(anyhow!("unrecognized day label: '{}'", label.trim()))
}

/// Parse a comma- or semicolon-separated list of day labels.
/// Blank items are ignored; order is preserved.
pub fn parse_day_list(input: &str) -> Result<Vec<Weekday>> {
    input
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_day_label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    #[test]
    fn test_english_labels() {
        assert_eq!(parse_day_label("Monday").unwrap(), Mon);
        assert_eq!(parse_day_label("  wed ").unwrap(), Wed);
        assert_eq!(parse_day_label("SUNDAY").unwrap(), Sun);
    }

    #[test]
    fn test_vietnamese_labels() {
        assert_eq!(parse_day_label("thứ 2").unwrap(), Mon);
        assert_eq!(parse_day_label("Thứ   7").unwrap(), Sat);
        assert_eq!(parse_day_label("chủ nhật").unwrap(), Sun);
    }

    #[test]
    fn test_unaccented_and_short_labels() {
        assert_eq!(parse_day_label("thu 4").unwrap(), Wed);
        assert_eq!(parse_day_label("thu6").unwrap(), Fri);
        assert_eq!(parse_day_label("T3").unwrap(), Tue);
        assert_eq!(parse_day_label("chu nhat").unwrap(), Sun);
        assert_eq!(parse_day_label("chunhat").unwrap(), Sun);
        assert_eq!(parse_day_label("CN").unwrap(), Sun);
    }

    #[test]
    fn test_thu_alone_is_thursday() {
        // bare "thu" is the English abbreviation, not the Vietnamese prefix
        assert_eq!(parse_day_label("thu").unwrap(), Thu);
    }

    #[test]
    fn test_unknown_labels() {
        assert!(parse_day_label("thứ 8").is_err());
        assert!(parse_day_label("someday").is_err());
        assert!(parse_day_label("").is_err());
    }

    #[test]
    fn test_day_list() {
        let days = parse_day_list("thứ 2, wed; Friday,,").unwrap();
        assert_eq!(days, vec![Mon, Wed, Fri]);
        assert!(parse_day_list("mon, nope").is_err());
    }
}
