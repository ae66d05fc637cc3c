/// Format a decimal price string with its currency symbol (e.g., "0.015 POL").
/// Trailing zeros are dropped; an empty or zero price reads "Free".
pub fn format_price(price: Option<&str>, symbol: &str) -> String {
    let Some(price) = price.map(str::trim).filter(|p| !p.is_empty()) else {
        return "Free".to_string();
    };

    let trimmed = if price.contains('.') {
        price.trim_end_matches('0').trim_end_matches('.')
    } else {
        price
    };

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '0') {
        return "Free".to_string();
    }

    format!("{} {}", trimmed, symbol)
}

/// Format a count in compact form (e.g., 1.2k, 3M)
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{}M", count / 1_000_000)
    } else if count >= 10_000 {
        format!("{}k", count / 1_000)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Truncates an address or hash to "0x1234...abcd"
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 13 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some("0.0150"), "POL"), "0.015 POL");
        assert_eq!(format_price(Some("12"), "POL"), "12 POL");
        assert_eq!(format_price(Some("10.0"), "POL"), "10 POL");
        assert_eq!(format_price(Some("0.00"), "POL"), "Free");
        assert_eq!(format_price(None, "POL"), "Free");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_300), "1.3k");
        assert_eq!(format_count(42_000), "42k");
        assert_eq!(format_count(3_400_000), "3M");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"), "0x5aAe...eAed");
        assert_eq!(truncate_address("0xabc"), "0xabc");
    }
}
