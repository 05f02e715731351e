use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tido")]
#[command(about = "A terminal to-do list backed by a REST store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo without entering the TUI
    Add { description: String },
    /// Print the current list and exit
    List,
    /// Manage the API server
    Serve {
        #[command(subcommand)]
        command: Option<ServeCommand>,

        /// Port to run the server on (defaults to the configured port)
        #[arg(short, long, global = true)]
        port: Option<u16>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ServeCommand {
    /// Start the API server (default if no subcommand given)
    Start {
        #[arg(long, hide = true)]
        daemon: bool,
    },
    /// Stop the running API server
    Stop,
    /// Restart the API server
    Restart,
    /// Check if the API server is running
    Status,
}
