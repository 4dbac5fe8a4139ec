use clap::Subcommand;
use habitpro_core::Config;

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Allow reminder notifications
    Enable,
    /// Block reminder notifications
    Disable,
    /// Show whether notifications are allowed
    Status,
}

pub fn run(action: NotifyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    match action {
        NotifyAction::Enable | NotifyAction::Disable => {
            config.notifications.granted = matches!(action, NotifyAction::Enable);
            config.save()?;
        }
        NotifyAction::Status => {}
    }
    if config.notifications.granted {
        println!("Notifications enabled");
    } else {
        println!("Notifications blocked");
    }
    Ok(())
}
