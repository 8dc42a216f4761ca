use crate::domain::model::Cart;
use crate::render::html_escape;

/// Cart listing, or a stable empty-state fragment.
pub fn cart_view(cart: &Cart) -> String {
    if cart.is_empty() {
        return [
            "<div class=\"cart\">",
            "  <p>Your cart is empty.</p>",
            "</div>",
        ]
        .join("\n");
    }

    let mut lines = vec!["<div class=\"cart\">".to_string(), "  <ul>".to_string()];
    for item in cart.items() {
        lines.push(format!(
            "    <li>{} ({}) ${:.2}</li>",
            html_escape(&item.pizza.name),
            html_escape(&item.size),
            item.price
        ));
    }
    lines.push("  </ul>".to_string());
    lines.push(format!("  <p class=\"total\">Total: ${:.2}</p>", cart.total()));
    lines.push("</div>".to_string());
    lines.join("\n")
}
