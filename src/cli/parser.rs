use clap::{Parser, Subcommand};

/// Command-line interface definition for rWaterlogger
/// CLI application to track daily water intake with SQLite
#[derive(Parser)]
#[command(
    name = "rwaterlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily water-intake tracker: check in every glass and watch your daily goal fill up",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Without a subcommand, today's status is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Record a glass of water now
    #[command(visible_alias = "drink", alias = "add")]
    Checkin {
        /// Print today's status as JSON after checking in
        #[arg(long = "json")]
        json: bool,
    },

    /// Show today's count, completion rate and check-ins (newest first)
    #[command(visible_alias = "today")]
    Status {
        /// Print the status as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Remove all of today's check-ins
    Clear {
        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },
}
