// src/services/prompt.rs
use super::menu::MenuCatalog;

const GUIDELINES: [&str; 8] = [
    "Greet customers warmly",
    "Help them browse the menu",
    "Take their orders clearly",
    "Confirm items and quantities",
    "Calculate totals accurately",
    "Be helpful with questions about menu items",
    "When you calculate a price, show your work",
    "Keep responses concise and friendly",
];

/// Capitalises the first letter of every word and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Renders the menu into the system instruction sent on the first turn.
pub fn build_system_prompt(catalog: &MenuCatalog) -> String {
    let mut prompt = String::from(
        "You are a friendly AI assistant for NoPickles, a fast food restaurant. \
         Your job is to help customers place orders.\n\n\
         Available menu items and prices:\n",
    );

    for (item, price) in catalog.prices.iter() {
        prompt.push_str(&format!("- {}: ${:.2}\n", title_case(item), price));
    }

    prompt.push_str("\nSize multipliers (for beverages):\n");
    for (size, mult) in catalog.size_multiplier.iter() {
        // Debug keeps a trailing ".0" on whole multipliers.
        prompt.push_str(&format!("- {}: {:?}x price\n", title_case(size), mult));
    }

    prompt.push_str("\nGuidelines:\n");
    for (i, line) in GUIDELINES.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, line));
    }

    prompt.push_str(
        "\nWhen a customer places an order, acknowledge each item and provide the running total.\n",
    );
    prompt
}
