use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "th", about = concat!("taskhub v", env!("CARGO_PKG_VERSION"), " - lists, priorities, due dates"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different task file
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task via quick entry (recognizes p1/p2/high/medium/today/tomorrow)
    Add(AddArgs),
    /// Show a list's tasks in display order
    List(ListArgs),
    /// Print all known list names
    Lists,
    /// Show one task in detail
    Show(IdArg),
    /// Toggle a task between done and pending
    Done(IdArg),
    /// Delete a task
    Rm(IdArg),
    /// Edit task details
    Edit(EditArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// List to add the task to (default: the configured default list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// List to show (default: the configured default list)
    pub list: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (any unique prefix)
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id (any unique prefix)
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New due date (YYYY-MM-DD, or an empty string to clear)
    #[arg(long)]
    pub due: Option<String>,
    /// New priority: P1, P2, P3, or none
    #[arg(long)]
    pub priority: Option<String>,
    /// Replace the notes text
    #[arg(long)]
    pub notes: Option<String>,
    /// Mark the task recurring (placeholder, no scheduling effect)
    #[arg(long)]
    pub recurring: bool,
    /// Clear the recurring flag
    #[arg(long, conflicts_with = "recurring")]
    pub no_recurring: bool,
}
