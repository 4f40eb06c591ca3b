//! Extracting display values from the free-text fields of action responses.

use std::sync::OnceLock;

use regex::Regex;

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

fn time_left_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\s*hrs?\s*(\d+)\s*mins?").expect("valid time-left pattern")
    })
}

fn dollar_amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$([\d,.]+)").expect("valid dollar pattern"))
}

/// Seconds left from text like `"5 hrs 30 mins"` or `"1 hr 1 min"`.
pub fn parse_time_left(description: &str) -> Option<u64> {
    let captures = time_left_regex().captures(description)?;
    let hours: u64 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u64 = captures.get(2)?.as_str().parse().ok()?;
    Some(hours * 3600 + minutes * 60)
}

/// `HH:MM:SS`; hours keep counting past 24.
pub fn format_countdown(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// First `$1,234.56`-style amount in `text`.
pub fn parse_dollar_amount(text: &str) -> Option<f64> {
    let captures = dollar_amount_regex().captures(text)?;
    let digits = captures.get(1)?.as_str().replace(',', "");
    digits.trim_end_matches('.').parse().ok()
}

/// Price part of a label like `"Mint key for 0.25 SOL"`.
pub fn parse_mint_price(label: &str) -> Option<String> {
    label
        .split("for ")
        .nth(1)
        .map(str::trim)
        .filter(|price| !price.is_empty())
        .map(str::to_string)
}

pub fn lamports_to_sol(lamports: f64) -> f64 {
    lamports / LAMPORTS_PER_SOL
}

pub fn floor_price_usd(buy_now_price_lamports: f64, sol_price_usd: f64) -> f64 {
    lamports_to_sol(buy_now_price_lamports) * sol_price_usd
}

/// The next key to be minted.
pub fn current_mint_number(num_mints: u64) -> u64 {
    num_mints + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_left_handles_plural_and_singular() {
        assert_eq!(parse_time_left("Game ends in 5 hrs 30 mins."), Some(19_800));
        assert_eq!(parse_time_left("1 hr 1 min left"), Some(3_660));
        assert_eq!(parse_time_left("0hrs 0mins"), Some(0));
        assert_eq!(parse_time_left("12 HRS 05 MINS"), Some(43_500));
    }

    #[test]
    fn time_left_rejects_other_formats() {
        assert_eq!(parse_time_left("ends tomorrow"), None);
        assert_eq!(parse_time_left("30 mins"), None);
        assert_eq!(parse_time_left(""), None);
    }

    #[test]
    fn countdown_pads_each_unit() {
        assert_eq!(format_countdown(0), "00:00:00");
        assert_eq!(format_countdown(3_661), "01:01:01");
        assert_eq!(format_countdown(19_800), "05:30:00");
        assert_eq!(format_countdown(100 * 3600 + 59), "100:00:59");
    }

    #[test]
    fn dollar_amount_strips_thousands_separators() {
        assert_eq!(parse_dollar_amount("Win the $12,345.67 pool"), Some(12_345.67));
        assert_eq!(parse_dollar_amount("Burn for $42.50 in SEND"), Some(42.5));
        assert_eq!(parse_dollar_amount("Pool at $1,000."), Some(1_000.0));
        assert_eq!(parse_dollar_amount("no price here"), None);
    }

    #[test]
    fn mint_price_is_text_after_for() {
        assert_eq!(parse_mint_price("Mint key for 0.25 SOL").as_deref(), Some("0.25 SOL"));
        assert_eq!(parse_mint_price("Mint key"), None);
        assert_eq!(parse_mint_price("Mint for "), None);
    }

    #[test]
    fn floor_price_converts_lamports() {
        assert_eq!(lamports_to_sol(2_500_000_000.0), 2.5);
        assert!((floor_price_usd(2_500_000_000.0, 150.0) - 375.0).abs() < 1e-9);
        assert_eq!(floor_price_usd(0.0, 150.0), 0.0);
    }

    #[test]
    fn next_mint_follows_minted_count() {
        assert_eq!(current_mint_number(49_999), 50_000);
        assert_eq!(current_mint_number(0), 1);
    }
}
