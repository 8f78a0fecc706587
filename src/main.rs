//! SecureGen command-line interface.
//!
//! Generates and scores passwords, and manages the signed-in session, the
//! password history and the settings file.

use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use securegen::app::{App, HistoryAccess};
use securegen::logging;
use securegen::managers::session_manager::SessionManagerTrait;
use securegen::services::generation_service::GenerationOutcome;
use securegen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securegen::types::generation::GenerationConfig;
use securegen::types::session::UserSession;
use securegen::types::strength::StrengthReport;

#[derive(Parser, Debug)]
#[command(name = "securegen", version, about = "Password generator and strength checker")]
struct Cli {
    /// SQLite database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Settings file path (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a password
    ///
    /// Examples:
    ///   securegen generate
    ///   securegen generate --length 24 --no-other
    Generate(GenerateArgs),

    /// Score a password without storing it
    Score {
        password: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Password history (requires login)
    History {
        #[command(subcommand)]
        cmd: HistoryCommands,
    },

    /// Log in with a mock identity
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
    },

    /// Create a mock account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },

    Logout,

    /// Show the signed-in user
    Whoami,

    Settings {
        #[command(subcommand)]
        cmd: SettingsCommands,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length (4-32)
    #[arg(short, long)]
    length: Option<usize>,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long)]
    no_lowercase: bool,
    #[arg(long)]
    no_numbers: bool,
    #[arg(long)]
    no_symbols: bool,
    /// Exclude . , ; :
    #[arg(long)]
    no_punctuation: bool,
    /// Exclude [ ] { } ( ) < >
    #[arg(long)]
    no_brackets: bool,
    /// Exclude + - = _ *
    #[arg(long)]
    no_math: bool,
    /// Exclude ! @ # $ % ^ &
    #[arg(long)]
    no_special: bool,
    /// Exclude ~ ` | \ / ? " '
    #[arg(long)]
    no_other: bool,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn apply(&self, base: GenerationConfig) -> GenerationConfig {
        let mut config = base;
        if let Some(length) = self.length {
            config.length = length;
        }
        config.uppercase &= !self.no_uppercase;
        config.lowercase &= !self.no_lowercase;
        config.numbers &= !self.no_numbers;
        config.symbols &= !self.no_symbols;
        config.symbol_groups.punctuation &= !self.no_punctuation;
        config.symbol_groups.brackets &= !self.no_brackets;
        config.symbol_groups.math &= !self.no_math;
        config.symbol_groups.special &= !self.no_special;
        config.symbol_groups.other &= !self.no_other;
        config
    }
}

#[derive(Subcommand, Debug)]
enum HistoryCommands {
    /// List entries, most recent first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete the entry at INDEX (0 is the most recent)
    Delete { index: usize },
    /// Delete every entry
    Clear,
    /// Use the settings of entry INDEX for the next `generate`
    Reuse { index: usize },
}

#[derive(Subcommand, Debug)]
enum SettingsCommands {
    Show,
    /// Set a value by dot path, e.g. `remote.enabled true`
    Set {
        key: String,
        /// JSON value; bare words are taken as strings
        value: String,
    },
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging_settings = SettingsEngine::new(cli.config.clone())
        .load()
        .map(|s| s.logging)
        .unwrap_or_default();
    logging::init(&logging_settings);

    let mut app = App::open(cli.db.clone(), cli.config.clone())?;

    match cli.command {
        Commands::Generate(args) => cmd_generate(&mut app, &args).await?,
        Commands::Score { password, json } => {
            print_report(&app.score(&password), json)?;
        }
        Commands::History { cmd } => cmd_history(&app, cmd)?,
        Commands::Login { email, name } => {
            let user = UserSession {
                id: Uuid::new_v4().to_string(),
                email,
                name,
            };
            app.session_manager.login(user.clone())?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let user = app
                .session_manager
                .register(&name, &email, &password, &confirm)?;
            println!("Registered and logged in as {} <{}>", user.name, user.email);
        }
        Commands::Logout => {
            app.session_manager.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => match app.session_manager.current_user() {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not logged in"),
        },
        Commands::Settings { cmd } => cmd_settings(&mut app, cmd)?,
    }

    Ok(())
}

async fn cmd_generate(app: &mut App, args: &GenerateArgs) -> anyhow::Result<()> {
    app.startup().await;
    let config = args.apply(app.initial_config());

    match app.generate(&config).await {
        GenerationOutcome::Refused(e) => bail!(e),
        outcome => {
            let generated = outcome
                .password()
                .ok_or_else(|| anyhow!("no password generated"))?;
            if let GenerationOutcome::Local {
                fallback_reason: Some(reason),
                ..
            } = &outcome
            {
                eprintln!("Remote generation failed ({}); generated locally", reason);
            }

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "password": generated.password(),
                        "strength": generated.label(),
                        "score": generated.score(),
                        "suggestions": generated.suggestions(),
                        "source": outcome.source(),
                    }))?
                );
            } else {
                println!("{}", generated.password());
                println!("Strength: {} ({}/100)", generated.label(), generated.score());
                for suggestion in generated.suggestions() {
                    println!("  - {}", suggestion);
                }
            }
            if !app.session_manager.is_authenticated() {
                eprintln!("Log in to keep a history of generated passwords");
            }
        }
    }
    Ok(())
}

fn print_report(report: &StrengthReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("Strength: {} ({}/100)", report.label, report.score);
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion);
    }
    Ok(())
}

fn cmd_history(app: &App, cmd: HistoryCommands) -> anyhow::Result<()> {
    match cmd {
        HistoryCommands::List { json } => match app.history() {
            HistoryAccess::LoginRequired => {
                bail!("Please log in to view your password history")
            }
            HistoryAccess::Granted { entries, notice } => {
                if let Some(notice) = notice {
                    eprintln!("{}", notice);
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                    return Ok(());
                }
                if entries.is_empty() {
                    println!("No passwords in history");
                }
                for (i, entry) in entries.iter().enumerate() {
                    println!(
                        "{:>2}  {:<32}  {:<11}  {}",
                        i,
                        entry.generated.password(),
                        entry.generated.label(),
                        entry.timestamp
                    );
                }
            }
        },
        HistoryCommands::Delete { index } => {
            app.delete_history(index)?;
            println!("Deleted entry {}", index);
        }
        HistoryCommands::Clear => {
            app.clear_history()?;
            println!("History cleared");
        }
        HistoryCommands::Reuse { index } => {
            let config = app.reuse_settings(index)?;
            println!(
                "Next generate will use length {} ({})",
                config.length,
                serde_json::to_string(&config)?
            );
        }
    }
    Ok(())
}

fn cmd_settings(app: &mut App, cmd: SettingsCommands) -> anyhow::Result<()> {
    match cmd {
        SettingsCommands::Show => {
            println!(
                "{}",
                serde_json::to_string_pretty(app.settings_engine.get_settings())?
            );
            println!("# {}", app.settings_engine.get_config_path());
        }
        SettingsCommands::Set { key, value } => {
            let parsed = serde_json::from_str(&value)
                .unwrap_or_else(|_| serde_json::Value::String(value.clone()));
            app.settings_engine.set_value(&key, parsed)?;
            println!("{} = {}", key, value);
        }
        SettingsCommands::Reset => {
            app.settings_engine.reset()?;
            println!("Settings reset to defaults");
        }
    }
    Ok(())
}
