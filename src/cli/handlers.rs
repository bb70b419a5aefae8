use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use uuid::Uuid;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::persist;
use crate::io::store::FileStore;
use crate::logging;
use crate::model::board::Board;
use crate::model::palette;
use crate::model::settings::DENSITY_LEVELS;
use crate::ops::board_ops::{self, Direction, MoveError};
use crate::ops::snapshot::{self, ImportMode};
use crate::util::time::now_ms;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = data_dir(cli.data_dir.as_deref())?;

    // File logging is best effort; the board must work without it.
    if let Err(e) = logging::init(&dir) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let cmd = cli.command.unwrap_or(Commands::List(ListArgs {
        color: None,
        done: false,
        all: false,
    }));

    match cmd {
        // Read commands
        Commands::List(args) => cmd_list(&dir, args, json),
        Commands::Stats => cmd_stats(&dir, json),

        // Write commands
        Commands::Add(args) => cmd_add(&dir, args),
        Commands::Edit(args) => cmd_edit(&dir, args),
        Commands::Color(args) => cmd_color(&dir, args),
        Commands::Done(args) => cmd_done(&dir, args),
        Commands::Restore(args) => cmd_restore(&dir, args),
        Commands::Undo => cmd_undo(&dir),
        Commands::Mv(args) => cmd_mv(&dir, args),
        Commands::Delete(args) => cmd_delete(&dir, args),
        Commands::DoneAll => cmd_done_all(&dir),

        // Backup
        Commands::Export(args) => cmd_export(&dir, args, json),
        Commands::Import(args) => cmd_import(&dir, args, json),

        // Settings
        Commands::Title(args) => cmd_title(&dir, args),
        Commands::Sound(args) => cmd_sound(&dir, args),
        Commands::Theme(args) => cmd_theme(&dir, args),
        Commands::Density(args) => cmd_density(&dir, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_dir(override_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match override_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => dirs::home_dir()
            .map(|home| home.join(".pinboard"))
            .ok_or_else(|| "cannot determine home directory (use -C)".into()),
    }
}

fn load(dir: &Path) -> Result<(FileStore, Board), Box<dyn std::error::Error>> {
    let store = FileStore::open(dir)?;
    let board = persist::load_board(&store, now_ms());
    Ok((store, board))
}

/// Resolve a (possibly abbreviated) task id. Any unique prefix of the full
/// uuid works.
fn resolve_id(board: &Board, needle: &str) -> Result<Uuid, Box<dyn std::error::Error>> {
    let needle = needle.to_ascii_lowercase();
    let matches: Vec<Uuid> = board
        .tasks
        .iter()
        .filter(|t| t.id.to_string().starts_with(&needle))
        .map(|t| t.id)
        .collect();
    match matches[..] {
        [id] => Ok(id),
        [] => Err(format!("no task matches '{}'", needle).into()),
        _ => Err(format!(
            "task id '{}' is ambiguous ({} matches)",
            needle,
            matches.len()
        )
        .into()),
    }
}

fn short(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut board) = load(dir)?;
    board.set_filter(args.color.clone());

    let tasks: Vec<_> = if args.all {
        let mut all = board.active_tasks();
        all.extend(board.completed_tasks());
        all
    } else if args.done {
        board.completed_tasks()
    } else {
        board.active_tasks()
    };

    if json {
        let out = ListJson {
            filter: board.filter.clone(),
            tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if tasks.is_empty() {
        println!("no tasks");
    } else {
        for task in &tasks {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

fn cmd_stats(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, board) = load(dir)?;
    let stats = StatsJson {
        active: board.active_tasks().len(),
        completed: board.completed_tasks().len(),
        completed_today: board.today_completed_count(Local::now()),
        total: board.tasks.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("active:          {}", stats.active);
        println!("completed:       {}", stats.completed);
        println!("completed today: {}", stats.completed_today);
        println!("total:           {}", stats.total);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    match board_ops::add_task(&mut board, &args.text, args.color.as_deref(), now_ms()) {
        Some(id) => {
            persist::save_board(&mut store, &board);
            println!("added {}", short(id));
        }
        None => println!("nothing to add (empty text)"),
    }
    Ok(())
}

fn cmd_edit(dir: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;
    if board_ops::edit_text(&mut board, id, &args.text) {
        persist::save_board(&mut store, &board);
        println!("updated {}", short(id));
    } else {
        println!("nothing to do");
    }
    Ok(())
}

fn cmd_color(dir: &Path, args: ColorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;
    if !palette::is_valid_color(&args.color) {
        // Tolerated on purpose; an unknown key just renders as the fallback.
        eprintln!("note: '{}' is not a palette color", args.color);
    }
    if board_ops::change_color(&mut board, id, &args.color) {
        persist::save_board(&mut store, &board);
        println!("recolored {}", short(id));
    } else {
        println!("nothing to do");
    }
    Ok(())
}

fn cmd_done(dir: &Path, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;
    if board_ops::complete_task(&mut board, id, now_ms()) {
        persist::save_board(&mut store, &board);
        println!("done {}", short(id));
    } else {
        println!("nothing to do");
    }
    Ok(())
}

fn cmd_restore(dir: &Path, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;
    if board_ops::restore_task(&mut board, id) {
        persist::save_board(&mut store, &board);
        println!("restored {}", short(id));
    } else {
        println!("nothing to do");
    }
    Ok(())
}

fn cmd_undo(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    match board_ops::undo_last(&mut board) {
        Some(id) => {
            persist::save_board(&mut store, &board);
            println!("restored {}", short(id));
        }
        None => println!("nothing to undo"),
    }
    Ok(())
}

fn cmd_mv(dir: &Path, args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let direction = Direction::parse(&args.direction).ok_or_else(|| {
        format!(
            "unknown direction '{}' (expected: top, up, down, bottom)",
            args.direction
        )
    })?;
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;

    match board_ops::move_task(&mut board, id, direction) {
        Ok(()) => {
            persist::save_board(&mut store, &board);
            println!("moved {} {}", short(id), args.direction);
            Ok(())
        }
        Err(MoveError::NotActive) => {
            println!("nothing to do (task is completed)");
            Ok(())
        }
        Err(e @ MoveError::Filtered) => Err(e.into()),
    }
}

fn cmd_delete(dir: &Path, args: IdArg) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let id = resolve_id(&board, &args.id)?;
    if board_ops::delete_task(&mut board, id) {
        persist::save_board(&mut store, &board);
        println!("deleted {}", short(id));
    } else {
        println!("nothing to do");
    }
    Ok(())
}

fn cmd_done_all(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = load(dir)?;
    let n = board_ops::complete_all_active(&mut board, now_ms());
    if n == 0 {
        println!("nothing to do (no active tasks)");
    } else {
        persist::save_board(&mut store, &board);
        println!("completed {} task(s)", n);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Backup handlers
// ---------------------------------------------------------------------------

fn cmd_export(dir: &Path, args: ExportArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (store, board) = load(dir)?;
    let settings = persist::load_settings(&store);
    let snap = snapshot::export_snapshot(&board, &settings, now_ms());
    let text = serde_json::to_string_pretty(&snap)?;

    match args.file {
        Some(file) => {
            fs::write(&file, &text)?;
            if !json {
                println!("exported {} task(s) to {}", snap.tasks.len(), file);
            }
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn cmd_import(dir: &Path, args: ImportArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mode = ImportMode::parse(&args.mode)
        .ok_or_else(|| format!("unknown mode '{}' (expected: merge, overwrite)", args.mode))?;
    let text = fs::read_to_string(&args.file)?;
    let snap = snapshot::parse_snapshot(&text)?;

    let (mut store, mut board) = load(dir)?;
    let mut settings = persist::load_settings(&store);
    let report = snapshot::apply_snapshot(&mut board, &mut settings, snap, mode);
    persist::save_board(&mut store, &board);
    persist::save_settings(&mut store, &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report_to_json(&report))?);
    } else {
        println!(
            "imported: {} added, {} skipped ({})",
            report.added, report.skipped, args.mode
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Settings handlers
// ---------------------------------------------------------------------------

fn cmd_title(dir: &Path, args: TitleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(dir)?;
    let mut settings = persist::load_settings(&store);
    match args.title {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err("title cannot be empty".into());
            }
            settings.title = title;
            persist::save_settings(&mut store, &settings);
            println!("title set to '{}'", settings.title);
        }
        None => println!("{}", settings.title),
    }
    Ok(())
}

fn cmd_sound(dir: &Path, args: SoundArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(dir)?;
    let mut settings = persist::load_settings(&store);
    match args.state.as_deref() {
        Some("on") => settings.sound_enabled = true,
        Some("off") => settings.sound_enabled = false,
        Some(other) => return Err(format!("expected 'on' or 'off', got '{}'", other).into()),
        None => {
            println!("{}", if settings.sound_enabled { "on" } else { "off" });
            return Ok(());
        }
    }
    persist::save_settings(&mut store, &settings);
    println!("sound {}", if settings.sound_enabled { "on" } else { "off" });
    Ok(())
}

fn cmd_theme(dir: &Path, args: ThemeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.list {
        for (key, bg) in palette::THEMES {
            let mark = if palette::is_dark_theme(key) { " (dark)" } else { "" };
            println!("{:<10} {}{}", key, bg, mark);
        }
        return Ok(());
    }

    let mut store = FileStore::open(dir)?;
    let mut settings = persist::load_settings(&store);
    match args.name {
        Some(name) => {
            if !palette::is_theme(&name) {
                eprintln!("note: unknown theme '{}' renders with the default background", name);
            }
            settings.theme = name;
            persist::save_settings(&mut store, &settings);
            println!("theme set to '{}'", settings.theme);
        }
        None => println!("{} ({})", settings.theme, palette::theme_bg(&settings.theme)),
    }
    Ok(())
}

fn cmd_density(dir: &Path, args: DensityArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(dir)?;
    let mut settings = persist::load_settings(&store);

    if args.cycle {
        let level = settings.cycle_density();
        persist::save_settings(&mut store, &settings);
        println!("density {}", level);
        return Ok(());
    }

    match args.level {
        Some(level) if level < DENSITY_LEVELS => {
            settings.view_density = level;
            persist::save_settings(&mut store, &settings);
            println!("density {}", level);
        }
        Some(level) => {
            return Err(format!("density must be 0-{}, got {}", DENSITY_LEVELS - 1, level).into());
        }
        None => println!("{}", settings.view_density),
    }
    Ok(())
}
