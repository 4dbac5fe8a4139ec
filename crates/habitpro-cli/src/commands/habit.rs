//! Habit commands: the create / toggle / delete intents.

use chrono::NaiveDate;
use clap::Subcommand;
use habitpro_core::{Config, HabitCategory, HabitId, Toast, ValidationError};
use std::io::{BufRead, Write};

use super::open_tracker;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Category: health, fitness, work, learning, personal or other
        #[arg(long, value_parser = parse_category)]
        category: Option<HabitCategory>,
        /// Display colour (e.g. "#4f46e5")
        #[arg(long)]
        color: Option<String>,
    },
    /// List habits with today's status
    List {
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a habit as done today
    Done {
        /// Habit ID
        id: HabitId,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: HabitId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Strict parse; clap would otherwise pick the lenient `From<String>`.
fn parse_category(s: &str) -> Result<HabitCategory, ValidationError> {
    s.parse()
}

pub fn run(action: HabitAction, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config)?;

    match action {
        HabitAction::Add {
            name,
            category,
            color,
        } => {
            let category = category.unwrap_or(config.ui.default_category);
            let color = color.unwrap_or_else(|| config.ui.default_color.clone());
            let event = tracker.create(&name, category, &color)?;
            println!("{}", Toast::from(&event).message);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        HabitAction::List { json } => {
            let cards = tracker.cards(today);
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if cards.is_empty() {
                println!("Add a habit to start tracking");
            } else {
                for card in cards {
                    let mark = if card.done_today { "✓" } else { " " };
                    println!(
                        "[{mark}] {:<24} {:<10} Streak: {:<4} id={}",
                        card.name,
                        card.category.as_str(),
                        card.streak,
                        card.id
                    );
                }
            }
        }
        HabitAction::Done { id } => {
            let event = tracker.toggle(id, today)?;
            println!("{}", Toast::from(&event).message);
        }
        HabitAction::Delete { id, yes } => {
            if !yes && !confirm("Delete this habit?")? {
                println!("Cancelled");
                return Ok(());
            }
            let event = tracker.delete(id)?;
            println!("{}", Toast::from(&event).message);
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
