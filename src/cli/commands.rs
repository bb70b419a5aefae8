use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pin", about = concat!("[*] pinboard v", env!("CARGO_PKG_VERSION"), " - sticky notes for your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks (default: active tasks)
    List(ListArgs),
    /// Show board statistics
    Stats,
    /// Add a task
    Add(AddArgs),
    /// Change a task's text
    Edit(EditArgs),
    /// Change a task's color
    Color(ColorArgs),
    /// Mark a task done
    Done(IdArg),
    /// Bring a completed task back to the active list
    Restore(IdArg),
    /// Undo the most recent completion
    Undo,
    /// Reorder a task (top, up, down, bottom)
    Mv(MvArgs),
    /// Permanently delete a task
    Delete(IdArg),
    /// Mark every active task done
    DoneAll,
    /// Write a backup of the board to a file (or stdout)
    Export(ExportArgs),
    /// Import a backup file
    Import(ImportArgs),
    /// Show or set the board title
    Title(TitleArgs),
    /// Show or set the completion sound
    Sound(SoundArgs),
    /// Show or set the color theme
    Theme(ThemeArgs),
    /// Show, set, or cycle the view density
    Density(DensityArgs),
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Show only active tasks of this color (hex key)
    #[arg(long)]
    pub color: Option<String>,
    /// Show completed tasks instead
    #[arg(long)]
    pub done: bool,
    /// Show active and completed tasks
    #[arg(long)]
    pub all: bool,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Sticky color (hex key; default: random palette pick)
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id (any unique prefix)
    pub id: String,
    /// New text
    pub text: String,
}

#[derive(Args)]
pub struct ColorArgs {
    /// Task id (any unique prefix)
    pub id: String,
    /// New color (hex key)
    pub color: String,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (any unique prefix)
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task id (any unique prefix)
    pub id: String,
    /// Where to move it: top, up, down, or bottom
    pub direction: String,
}

// ---------------------------------------------------------------------------
// Backup args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    pub file: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to import
    pub file: String,
    /// Import mode: merge (default) or overwrite
    #[arg(long, default_value = "merge")]
    pub mode: String,
}

// ---------------------------------------------------------------------------
// Settings args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TitleArgs {
    /// New title (omit to show the current one)
    pub title: Option<String>,
}

#[derive(Args)]
pub struct SoundArgs {
    /// "on" or "off" (omit to show the current setting)
    pub state: Option<String>,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// Theme name (omit to show the current one)
    pub name: Option<String>,
    /// List available themes
    #[arg(long)]
    pub list: bool,
}

#[derive(Args)]
pub struct DensityArgs {
    /// Density level 0-2 (omit to show the current one)
    pub level: Option<u8>,
    /// Step to the next density level, wrapping around
    #[arg(long)]
    pub cycle: bool,
}
