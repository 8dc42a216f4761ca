use crate::domain::model::Pizza;
use crate::render::html_escape;

/// Shown when the catalog record carries no image of its own.
pub const DEFAULT_PIZZA_IMAGE: &str = "https://picsum.photos/200";

/// Product card for a single pizza. Alt text mirrors the pizza name.
pub fn pizza_card(pizza: &Pizza) -> String {
    let image = pizza.image.as_deref().unwrap_or(DEFAULT_PIZZA_IMAGE);

    let mut lines = vec![
        "<div class=\"pizza\">".to_string(),
        format!("  <h2>{}</h2>", html_escape(&pizza.name)),
        format!("  <p>{}</p>", html_escape(&pizza.description)),
        format!(
            "  <img src=\"{}\" alt=\"{}\" />",
            html_escape(image),
            html_escape(&pizza.name)
        ),
        "  <ul class=\"sizes\">".to_string(),
    ];
    for (size, price) in &pizza.sizes {
        lines.push(format!(
            "    <li>{} ${:.2}</li>",
            html_escape(size),
            price
        ));
    }
    lines.push("  </ul>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}
