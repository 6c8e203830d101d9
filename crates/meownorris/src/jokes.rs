use crate::config::ProviderConfig;
use crate::prelude::{eprintln, println, *};
use crate::provider::HttpProvider;
use crate::service::JokeService;
use colored::Colorize;
use meownorris_core::joke::Joke;
use meownorris_core::mascot::{self, Mascot};

#[derive(Debug, clap::Args, Clone)]
pub struct RandomOptions {
    /// Mascot name to put in the joke (defaults to "Meow Norris")
    #[arg(short, long, env = "MEOWNORRIS_MASCOT")]
    pub mascot: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CategoryOptions {
    /// Joke category (e.g., "animal", "career", "dev")
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Mascot name to put in the joke (defaults to "Meow Norris")
    #[arg(short, long, env = "MEOWNORRIS_MASCOT")]
    pub mascot: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn create_service(global: &crate::Global) -> Result<JokeService<HttpProvider>> {
    let config = ProviderConfig::from_global(global)?;

    if global.verbose {
        eprintln!("Joke provider: {}", config.base_url);
        eprintln!();
    }

    Ok(JokeService::new(HttpProvider::new(&config)?))
}

pub async fn random(options: RandomOptions, global: crate::Global) -> Result<()> {
    let service = create_service(&global)?;
    let joke = service.get_random(options.mascot.as_deref()).await?;

    output_joke(&joke, options.json)
}

pub async fn category(options: CategoryOptions, global: crate::Global) -> Result<()> {
    let service = create_service(&global)?;
    let joke = service
        .get_by_category(&options.category, options.mascot.as_deref())
        .await?;

    output_joke(&joke, options.json)
}

pub async fn categories(options: ListOptions, global: crate::Global) -> Result<()> {
    let service = create_service(&global)?;
    let categories = service.list_categories().await?;

    if options.json {
        let json = serde_json::json!({ "categories": categories, "total": categories.len() });
        println!("{}", to_pretty_json(&json)?);
    } else {
        print!("{}", format_categories_text(&categories));
    }

    Ok(())
}

pub fn mascots(options: ListOptions) -> Result<()> {
    let mascots = mascot::list();

    if options.json {
        let json = serde_json::json!({ "mascots": mascots, "total": mascots.len() });
        println!("{}", to_pretty_json(&json)?);
    } else {
        print!("{}", format_mascots_table(mascots));
    }

    Ok(())
}

fn output_joke(joke: &Joke, json: bool) -> Result<()> {
    if json {
        println!("{}", to_pretty_json(joke)?);
    } else {
        print!("{}", format_joke_text(joke));
    }
    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render a joke for the terminal, with the mascot's glyph when it is registered
fn format_joke_text(joke: &Joke) -> String {
    let mut result = String::new();

    let glyph = mascot::get(&joke.mascot)
        .map(|m| format!("{} ", m.glyph))
        .unwrap_or_default();

    result.push_str(&format!(
        "\n{}{}\n",
        glyph,
        joke.mascot.bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("\n{}\n\n", joke.text.white()));

    if let Some(category) = &joke.category {
        result.push_str(&format!("    {}: {}\n", "Category".green(), category.cyan()));
    } else if !joke.categories.is_empty() {
        result.push_str(&format!(
            "    {}: {}\n",
            "Categories".green(),
            joke.categories.join(", ").cyan()
        ));
    }

    result.push_str(&format!(
        "    {}: {}\n",
        "ID".green(),
        joke.id.bright_black()
    ));
    result.push('\n');
    result
}

fn format_categories_text(categories: &[String]) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!("JOKE CATEGORIES ({})", categories.len())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    for category in categories {
        result.push_str(&format!("  {} {}\n", "-".yellow(), category));
    }

    result.push_str(&format!(
        "\n{}: {}\n\n",
        "Example".green(),
        "meownorris category <CATEGORY>".cyan()
    ));
    result
}

fn format_mascots_table(mascots: &[Mascot]) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["", "Name", "Type", "Description"]);

    for mascot in mascots {
        table.add_row(prettytable::row![
            mascot.glyph,
            mascot.name,
            mascot.kind,
            mascot.description
        ]);
    }

    format!(
        "\n{}\n{}\n",
        table,
        "Any other name works too: meownorris random --mascot \"Your Mascot\"".bright_black()
    )
}
