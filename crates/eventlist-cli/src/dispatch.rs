//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Each parsed command borrows its arguments from [`Cli`] into a
//! [`Dispatch`] variant, which is then executed through [`RunCommand`].

use chrono::NaiveDate;

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that can be executed.
pub trait RunCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// A parsed command with borrowed arguments.
#[derive(Debug)]
pub enum Dispatch<'a> {
    List {
        query: &'a Option<String>,
        location: &'a Option<String>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        this_month: bool,
        sort: &'a Option<String>,
        clear: bool,
    },
    Locations,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Create a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::List {
                query,
                location,
                from,
                to,
                this_month,
                sort,
                clear,
            }) => Self::List {
                query,
                location,
                from: *from,
                to: *to,
                this_month: *this_month,
                sort,
                clear: *clear,
            },
            Some(Commands::Locations) => Self::Locations,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }
}

impl RunCommand for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::List {
                query,
                location,
                from,
                to,
                this_month,
                sort,
                clear,
            } => {
                let opts = commands::list::ListOptions {
                    query: (*query).clone(),
                    location: (*location).clone(),
                    from: *from,
                    to: *to,
                    this_month: *this_month,
                    sort: (*sort).clone(),
                    clear: *clear,
                };
                commands::list::execute(ctx, &opts)
            }
            Self::Locations => commands::locations::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ev - Browse, search and filter a list of events");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
