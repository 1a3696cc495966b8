//! Classify command - show the category of a query.

use super::load_responder;
use anyhow::Result;
use console::style;
use lawbot_core::Category;

/// Print the category a query falls into. No collaborator is consulted.
pub fn run(config_path: &std::path::Path, query: &str, format: &str) -> Result<()> {
    let responder = load_responder(config_path, None)?;
    let category = responder.classify(query);

    match format {
        "text" => {
            let label = match category {
                Category::ValidQuery => style(category.as_str()).green(),
                Category::Greeting => style(category.as_str()).cyan(),
                Category::Unrelated => style(category.as_str()).yellow(),
                Category::Abusive => style(category.as_str()).red(),
            };
            println!("{}", label);
        }
        "json" => println!("{}", serde_json::json!({ "category": category })),
        _ => anyhow::bail!("Unsupported format: {}. Use 'text' or 'json'.", format),
    }

    Ok(())
}
