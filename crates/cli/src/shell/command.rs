use clap::Parser;
use shlex;

/// Helper struct for Clap parsing within the shell
#[derive(Parser, Clone)]
#[command(no_binary_name = true)]
pub enum ShellCommand {
    /// Set the search filter (no keywords clears it)
    Search {
        /// Keywords, combined with AND
        keywords: Vec<String>,
    },
    /// List assets matching the current filter
    Ls {
        /// Use long listing format
        #[arg(short, long)]
        long: bool,
    },
    /// Select an asset and focus the camera on it
    Select {
        /// Asset id
        id: u32,
    },
    /// Clear the current selection
    Deselect,
    /// Set the transient hover highlight
    Hover {
        /// Asset id, or "off" to clear the highlight
        target: String,
    },
    /// Inspect an asset in detail (defaults to the selection)
    Cat {
        /// Asset id (optional when an asset is selected)
        id: Option<u32>,
        /// Emit the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the map viewport summary
    Map,
    /// Print catalog totals by vacancy level
    Stats,
    /// Clear the screen
    Clear,
}

use clap::error::ErrorKind;

impl ShellCommand {
    /// Automatically generates the list of available command names from the enum.
    pub fn command_names() -> Vec<String> {
        use clap::CommandFactory;
        let cmd = Self::command();
        let mut names = vec!["help".to_string(), "exit".to_string(), "quit".to_string()];
        names.extend(cmd.get_subcommands().map(|s| s.get_name().to_string()));
        names
    }
}

pub fn parse_shell_command(
    input: &str,
) -> Result<Option<ShellCommand>, Box<dyn std::error::Error>> {
    // Use shlex to split arguments while respecting quotes
    let args = shlex::split(input).ok_or("Invalid quoting")?;

    // Parse using Clap
    match ShellCommand::try_parse_from(args) {
        Ok(c) => Ok(Some(c)),
        Err(e) => {
            // Handle help/version display without returning an error
            if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion {
                println!("{}", e);
                return Ok(None);
            }
            Err(Box::new(e))
        }
    }
}
