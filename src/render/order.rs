use crate::core::fetch::FetchState;
use crate::domain::model::{Cart, Pizza};
use crate::render::cart::cart_view;
use crate::render::pizza::pizza_card;

/// Promotional widget driven by the fetch lifecycle: a loading state
/// while unresolved, the card once resolved, and a visible message when
/// the fetch failed.
pub fn pizza_of_the_day_widget(state: &FetchState<Pizza>) -> String {
    match state {
        FetchState::Idle | FetchState::Pending => [
            "<div class=\"pizza-of-the-day\">",
            "  <p>Loading pizza of the day...</p>",
            "</div>",
        ]
        .join("\n"),
        FetchState::Resolved(pizza) => [
            "<div class=\"pizza-of-the-day\">".to_string(),
            "  <h2>Pizza of the Day</h2>".to_string(),
            indent(&pizza_card(pizza)),
            "</div>".to_string(),
        ]
        .join("\n"),
        FetchState::Failed(_) => [
            "<div class=\"pizza-of-the-day\">",
            "  <p>The pizza of the day is unavailable right now.</p>",
            "</div>",
        ]
        .join("\n"),
    }
}

/// Full order page: catalog, cart, and the pizza-of-the-day widget.
pub fn order_page(pizzas: &[Pizza], cart: &Cart, pizza_of_the_day: &FetchState<Pizza>) -> String {
    let mut lines = vec![
        "<div class=\"order\">".to_string(),
        "  <h1>Padre Gino&#39;s - Order Now</h1>".to_string(),
        "  <div class=\"catalog\">".to_string(),
    ];
    for pizza in pizzas {
        lines.push(indent(&indent(&pizza_card(pizza))));
    }
    lines.push("  </div>".to_string());
    lines.push(indent(&cart_view(cart)));
    lines.push(indent(&pizza_of_the_day_widget(pizza_of_the_day)));
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn indent(fragment: &str) -> String {
    fragment
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn pizza(id: &str, name: &str) -> Pizza {
        Pizza {
            id: id.to_string(),
            name: name.to_string(),
            category: "Classic".to_string(),
            description: "test description".to_string(),
            image: None,
            sizes: BTreeMap::from([("S".to_string(), 10.0)]),
        }
    }

    #[test]
    fn test_widget_shows_loading_until_resolved() {
        let unresolved: [FetchState<Pizza>; 2] = [FetchState::Idle, FetchState::Pending];
        for state in unresolved {
            let html = pizza_of_the_day_widget(&state);
            assert!(html.contains("Loading pizza of the day"));
        }
    }

    #[test]
    fn test_widget_shows_card_once_resolved() {
        let state = FetchState::Resolved(pizza("potd", "The Daily Special"));
        let html = pizza_of_the_day_widget(&state);
        assert!(html.contains("Pizza of the Day"));
        assert!(html.contains("The Daily Special"));
    }

    #[test]
    fn test_widget_shows_failure_message() {
        let state: FetchState<Pizza> = FetchState::Failed("500".to_string());
        let html = pizza_of_the_day_widget(&state);
        assert!(html.contains("unavailable"));
    }

    #[test]
    fn test_order_page_composes_catalog_cart_and_widget() {
        let pizzas = vec![pizza("a", "Pizza A"), pizza("b", "Pizza B")];
        let html = order_page(&pizzas, &Cart::new(), &FetchState::Pending);

        assert!(html.contains("Padre Gino"));
        assert!(html.contains("Pizza A"));
        assert!(html.contains("Pizza B"));
        assert!(html.contains("Your cart is empty."));
        assert!(html.contains("Loading pizza of the day"));
    }
}
