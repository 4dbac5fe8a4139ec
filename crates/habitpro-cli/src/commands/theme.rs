use clap::Subcommand;
use habitpro_core::Config;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Flip between dark and light mode
    Toggle,
    /// Show the current mode
    Show,
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let ThemeAction::Toggle = action {
        config.ui.dark_mode = !config.ui.dark_mode;
        config.save()?;
    }
    println!("{}", if config.ui.dark_mode { "Dark mode on" } else { "Light mode on" });
    Ok(())
}
