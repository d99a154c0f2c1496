use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use signup_wizard::cli::{handle_check_command, handle_journal_command, CheckArgs, JournalArgs};
use signup_wizard::config::{paths::WizardPaths, settings::Settings};
use signup_wizard::journal::journaled_session;
use signup_wizard::logging::{self, LogTarget};
use signup_wizard::plain::{PlainSession, TerminalPrompter};

#[derive(Parser)]
#[command(
    name = "signup",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based three-step registration wizard",
    long_about = "A registration wizard for the terminal. Enter your personal \
                  details, choose a username and password, review, and submit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard as line-by-line prompts
    Plain,

    /// Run values through the wizard without prompting
    Check(CheckArgs),

    /// Show recent transition journal entries
    Journal(JournalArgs),

    /// Write default settings
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WizardPaths::new()?;
    let settings = match Settings::load_or_create(&paths) {
        Ok(settings) => settings,
        Err(e) if e.is_config() && matches!(cli.command, Some(Commands::Init { force: true })) => {
            Settings::default()
        }
        Err(e) if e.is_config() => {
            return Err(e).with_context(|| {
                format!(
                    "Invalid settings in {}; fix the file or run `signup init --force`",
                    paths.settings_file().display()
                )
            });
        }
        Err(e) => return Err(e.into()),
    };

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::FileOnly,
        Some(_) => LogTarget::FileAndStderr,
    };
    let log_guard = logging::init(&paths, &settings, target)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "starting");

    match cli.command {
        None | Some(Commands::Tui) => {
            signup_wizard::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Plain) => {
            let wizard = journaled_session(&settings, &paths);
            let mut session = PlainSession::new(TerminalPrompter, wizard);
            let outcome = session.run()?;
            println!();
            if outcome.registrations == 0 {
                println!("No registration submitted.");
            } else {
                println!("{} registration(s) submitted.", outcome.registrations);
            }
        }
        Some(Commands::Check(args)) => {
            if !handle_check_command(args)? {
                drop(log_guard);
                std::process::exit(1);
            }
        }
        Some(Commands::Journal(args)) => {
            handle_journal_command(&paths, args)?;
        }
        Some(Commands::Init { force }) => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings already exist at: {} (use --force to overwrite)",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("Signup Wizard Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Journal file:    {}", paths.journal_file().display());
            println!("Log directory:   {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Journal enabled: {}", settings.journal_enabled);
            println!("  Journal cap:     {} bytes", settings.journal_max_bytes);
            println!("  Log level:       {}", settings.log_level);
            println!("  Tick rate (ms):  {}", settings.tick_rate_ms);
            println!("  Password mask:   {}", settings.mask_char);
        }
    }

    Ok(())
}
