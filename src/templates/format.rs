use url::form_urlencoded;

/// en-US style number: thousands separators, at most three decimals.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if n < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

pub fn format_price(price: f64) -> String {
    format!("${}", format_number(price))
}

/// Link to the standalone detail page. The id travels as an encoded query
/// parameter so any id text round-trips.
pub fn detail_href(id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish();
    format!("property.html?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(5_000_000.0), "5,000,000");
        assert_eq!(format_number(-1234567.0), "-1,234,567");
    }

    #[test]
    fn keeps_up_to_three_decimals() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn price_has_a_dollar_sign() {
        assert_eq!(format_price(250000.0), "$250,000");
    }

    #[test]
    fn detail_href_round_trips_odd_ids() {
        for id in ["abc123", "a b&c=d", "عقار-7", "100%"] {
            let href = detail_href(id);
            let query = href.strip_prefix("property.html?").unwrap();
            let parsed: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            assert_eq!(parsed, vec![("id".to_string(), id.to_string())]);
        }
    }
}
