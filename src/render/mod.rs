// Presentational layer: pure functions from records to HTML strings.
// Deterministic output so pages can be snapshot-compared in tests.

pub mod cart;
pub mod contact;
pub mod order;
pub mod pizza;

pub use cart::cart_view;
pub use contact::contact_page;
pub use order::{order_page, pizza_of_the_day_widget};
pub use pizza::{pizza_card, DEFAULT_PIZZA_IMAGE};

/// Escape text for use in HTML content or attribute values.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(
            html_escape("<b>\"Gino's\" & sons</b>"),
            "&lt;b&gt;&quot;Gino&#39;s&quot; &amp; sons&lt;/b&gt;"
        );
    }
}
