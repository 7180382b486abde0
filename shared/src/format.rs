//! Presentation helpers for report cells
//!
//! The report data stays structured; these helpers are used by the
//! presentation layers (grid formatter, exports) to render it.

/// Escape text for use inside an HTML attribute or element
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render an item image thumbnail for the grid
pub fn image_markup(url: &str) -> String {
    format!(
        r#"<img src="{}" style="max-width: 100px; max-height: 100px; object-fit: cover;" />"#,
        escape_html(url)
    )
}

/// Highlight a rendered projected quantity when it is a shortfall
pub fn highlight_projected(value_html: &str, projected_qty: f64) -> String {
    if projected_qty < 0.0 {
        format!(r#"<span style="color:red; font-weight: bold;">{}</span>"#, value_html)
    } else {
        value_html.to_string()
    }
}

/// Parse a number the grid rendered with a host number format.
///
/// Formats look like `#,###.##`, `#.###,##`, `# ###.##` or `#,###`. Returns
/// NaN when the text is not a number.
pub fn parse_formatted_number(value: &str, number_format: &str) -> f64 {
    let decimal_sep = decimal_separator(number_format);

    let mut normalized = String::with_capacity(value.len());
    for ch in value.trim().chars() {
        if ch == decimal_sep {
            normalized.push('.');
        } else if is_group_separator(ch) {
            continue;
        } else {
            normalized.push(ch);
        }
    }

    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

fn decimal_separator(number_format: &str) -> char {
    let Some(pos) = number_format.rfind(|c: char| c == '.' || c == ',') else {
        return '.';
    };
    let sep = if number_format[pos..].starts_with(',') { ',' } else { '.' };
    let other = if sep == ',' { '.' } else { ',' };

    // with both separators present the last one is always the decimal
    if number_format.contains(other) {
        return sep;
    }

    // a lone separator followed by exactly three digits groups thousands
    let digits = number_format[pos + 1..].chars().filter(|c| *c == '#').count();
    if digits == 3 {
        other
    } else {
        sep
    }
}

fn is_group_separator(ch: char) -> bool {
    matches!(ch, ',' | '.' | ' ' | '\'' | '\u{a0}' | '\u{202f}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"/files/a "b" <c>&'d'"#),
            "/files/a &quot;b&quot; &lt;c&gt;&amp;&#39;d&#39;"
        );
    }

    #[test]
    fn test_image_markup() {
        assert_eq!(
            image_markup("/files/itm1.png"),
            r#"<img src="/files/itm1.png" style="max-width: 100px; max-height: 100px; object-fit: cover;" />"#
        );
    }

    #[test]
    fn test_highlight_projected() {
        assert_eq!(
            highlight_projected("-5.00", -5.0),
            r#"<span style="color:red; font-weight: bold;">-5.00</span>"#
        );
        assert_eq!(highlight_projected("5.00", 5.0), "5.00");
        assert_eq!(highlight_projected("0.00", 0.0), "0.00");
    }

    #[test]
    fn test_parse_comma_grouping() {
        assert_eq!(parse_formatted_number("1,234.50", "#,###.##"), 1234.5);
        assert_eq!(parse_formatted_number("-12,345", "#,###.##"), -12345.0);
    }

    #[test]
    fn test_parse_dot_grouping() {
        assert_eq!(parse_formatted_number("1.234,50", "#.###,##"), 1234.5);
        assert_eq!(parse_formatted_number("1.234", "#.###"), 1234.0);
    }

    #[test]
    fn test_parse_space_grouping() {
        assert_eq!(parse_formatted_number("1 234.5", "# ###.##"), 1234.5);
        assert_eq!(parse_formatted_number("1 234,5", "# ###,##"), 1234.5);
    }

    #[test]
    fn test_parse_indian_and_swiss_grouping() {
        assert_eq!(parse_formatted_number("12,34,567.25", "#,##,###.##"), 1234567.25);
        assert_eq!(parse_formatted_number("1'234.75", "#'###.##"), 1234.75);
    }

    #[test]
    fn test_parse_three_decimal_places() {
        assert_eq!(parse_formatted_number("1,234.567", "#,###.###"), 1234.567);
        assert_eq!(parse_formatted_number("1.234,567", "#.###,###"), 1234.567);
        assert_eq!(parse_formatted_number("1 234,567", "# ###,###"), 1234567.0);
    }

    #[test]
    fn test_parse_without_decimals() {
        assert_eq!(parse_formatted_number("9,876", "#,###"), 9876.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_formatted_number("", "#,###.##").is_nan());
        assert!(parse_formatted_number("abc", "#,###.##").is_nan());
    }
}
