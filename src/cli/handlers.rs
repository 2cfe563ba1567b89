use std::error::Error;
use std::path::PathBuf;

use crate::cli::commands::{AddArgs, Cli, Commands, EditArgs, IdArg, ListArgs};
use crate::cli::output;
use crate::io::config_io;
use crate::model::task::Task;
use crate::ops::projection;
use crate::ops::store::{Store, StoreError, TaskPatch};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let config = config_io::read_config();
    let path = config_io::resolve_data_file(cli.file.as_deref(), &config);
    let mut store = open_store(path);

    match cli.command {
        Commands::Add(args) => cmd_add(&mut store, args, &config.default_list, json),
        Commands::List(args) => cmd_list(&store, args, &config.default_list, json),
        Commands::Lists => cmd_lists(&store, json),
        Commands::Show(args) => cmd_show(&store, args, json),
        Commands::Done(args) => cmd_done(&mut store, args),
        Commands::Rm(args) => cmd_rm(&mut store, args),
        Commands::Edit(args) => cmd_edit(&mut store, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open the store. An unreadable or corrupt file is reported as a warning and
/// the session continues with an empty list; the next successful save rewrites
/// the file.
fn open_store(path: PathBuf) -> Store {
    match Store::open(path.clone()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("warning: {}; starting with an empty task list", e);
            Store::new(path, Vec::new())
        }
    }
}

/// A failed write keeps the in-memory change and only warns; the caller's
/// next edit will try the full rewrite again.
fn warn_on_save_failure(result: Result<(), StoreError>) -> Result<(), Box<dyn Error>> {
    match result {
        Err(StoreError::SaveFailed(e)) => {
            eprintln!("warning: change kept in memory but not saved: {}", e);
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(
    store: &mut Store,
    args: AddArgs,
    default_list: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let list = args.list.as_deref().unwrap_or(default_list);
    match store.create(&args.title, list) {
        Ok(task) => print_added(&task, json),
        Err(StoreError::SaveFailed(e)) => {
            eprintln!("warning: task added but not saved: {}", e);
            // The task is in the store even though the write failed; it went
            // in at the end, so report it like any other add.
            match store.tasks().last() {
                Some(task) => print_added(task, json),
                None => Ok(()),
            }
        }
        Err(e) => Err(e.into()),
    }
}

fn print_added(task: &Task, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(task))?
        );
    } else {
        println!("added {} to {}: {}", task.id, task.list_name, task.title);
    }
    Ok(())
}

fn cmd_list(
    store: &Store,
    args: ListArgs,
    default_list: &str,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let list = args.list.as_deref().unwrap_or(default_list);
    let tasks = store.tasks_in(list);
    let rows = projection::project(&tasks);

    if json {
        let out: Vec<_> = rows.iter().map(|r| output::task_to_json(r.task)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("no tasks in {}", list);
        return Ok(());
    }
    println!("{}", output::format_header());
    for row in &rows {
        println!("{}", output::format_row(row));
    }
    Ok(())
}

fn cmd_lists(store: &Store, json: bool) -> Result<(), Box<dyn Error>> {
    let names = store.list_names();
    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_show(store: &Store, args: IdArg, json: bool) -> Result<(), Box<dyn Error>> {
    let id = store.resolve_id(&args.id)?;
    let task = store
        .get(&id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::task_to_json(task))?
        );
    } else {
        for line in output::format_task_detail(task) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_done(store: &mut Store, args: IdArg) -> Result<(), Box<dyn Error>> {
    let id = store.resolve_id(&args.id)?;
    warn_on_save_failure(store.toggle_done(&id))?;
    let task = store
        .get(&id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;
    println!(
        "{} is now {}",
        id,
        if task.is_done { "done" } else { "pending" }
    );
    Ok(())
}

fn cmd_rm(store: &mut Store, args: IdArg) -> Result<(), Box<dyn Error>> {
    let id = store.resolve_id(&args.id)?;
    warn_on_save_failure(store.delete(&id))?;
    println!("deleted {}", id);
    Ok(())
}

fn cmd_edit(store: &mut Store, args: EditArgs) -> Result<(), Box<dyn Error>> {
    let id = store.resolve_id(&args.id)?;

    let mut patch = TaskPatch {
        title: args.title,
        due_date: args.due,
        notes: args.notes,
        ..TaskPatch::default()
    };
    if let Some(p) = args.priority.as_deref() {
        patch.priority = Some(output::parse_priority_arg(p)?);
    }
    if args.recurring {
        patch.is_recurring = Some(true);
    }
    if args.no_recurring {
        patch.is_recurring = Some(false);
    }

    warn_on_save_failure(store.update(&id, &patch))?;
    println!("updated {}", id);
    Ok(())
}
