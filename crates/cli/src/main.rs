use anyhow::Context;
use clap::{Parser, Subcommand};
use rtdb_db::{bootstrap, Bootstrapped, DatabaseConfig, FirebaseSdk};
use rtdb_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "rtdb-cli", about = "Realtime database bootstrap tooling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the database configuration record as JSON
    Config,
    /// Initialize the app and acquire the database service once
    Bootstrap,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load settings")?;
    rtdb_telemetry::init(&settings.log)?;

    let config = DatabaseConfig::from_settings(&settings.database);

    match cli.command.unwrap_or(Command::Bootstrap) {
        Command::Config => {
            let json = serde_json::to_string(&config)
                .with_context(|| "failed to serialize database config")?;
            println!("{json}");
        }
        Command::Bootstrap => {
            let sdk = FirebaseSdk::new();
            match bootstrap(&config, &sdk, &sdk)? {
                Bootstrapped::Ready { database, .. } => {
                    println!("ready namespace={}", database.namespace());
                }
                Bootstrapped::Absent => println!("absent"),
            }
        }
    }

    Ok(())
}
