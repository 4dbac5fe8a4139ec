use chrono::NaiveDate;
use clap::Subcommand;
use habitpro_core::stats::{completion_chart, completion_split, streak_chart, weekly_chart};
use habitpro_core::Config;
use serde_json::json;

use super::open_tracker;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's completed vs. pending
    Today,
    /// All dashboard numbers
    Dashboard,
    /// Weekly, streak and completion chart datasets
    Charts,
}

pub fn run(action: StatsAction, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tracker = open_tracker(&config)?;
    let habits = tracker.habits();

    match action {
        StatsAction::Today => {
            let (completed, pending) = completion_split(habits, today);
            let stats = json!({
                "date": today,
                "completed": completed,
                "pending": pending,
                "total": habits.len(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Dashboard => {
            println!("{}", serde_json::to_string_pretty(&tracker.dashboard(today))?);
        }
        StatsAction::Charts => {
            let charts = json!({
                "weekly": weekly_chart(habits),
                "streaks": streak_chart(habits),
                "completion": completion_chart(habits, today),
            });
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }
    }
    Ok(())
}
