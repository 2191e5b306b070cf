//! Console front end for the TwoDo core.
//!
//! # Responsibility
//! - Drive the full service surface from a terminal, independent of the
//!   Flutter/FFI runtime setup.
//! - Host the console flavor of the prompt/confirmation capabilities.
//!
//! # Invariants
//! - Item numbers shown to the user always refer to the current visible
//!   (active-category) listing, re-read before every command.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use twodo_core::kv::SqliteKeyValueStore;
use twodo_core::{
    open_kv, ConsoleConfirm, ConsolePrompt, ItemId, PersistenceGateway, StoreResult, TodoService,
};

const DEFAULT_DB_FILE_NAME: &str = "twodo_cli.sqlite3";

type CliService = TodoService<SqliteKeyValueStore>;

fn main() -> ExitCode {
    println!("twodo_core ping={}", twodo_core::ping());
    println!("twodo_core version={}", twodo_core::core_version());

    let db_path = resolve_db_path();
    let storage = match open_kv(&db_path) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open storage at `{}`: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut service = TodoService::hydrate(PersistenceGateway::new(storage));
    println!(
        "loaded {} item(s), active list: {}",
        service.items().len(),
        service.active_category().label()
    );
    println!("commands: list | add <text> | done <n> | edit <n> | rm <n> | cat | quit");

    let stdin = io::stdin();
    loop {
        print!("twodo[{}]> ", service.active_category().label());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if !run_command(&mut service, line.trim()) {
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Executes one command line. Returns `false` when the loop should end.
fn run_command(service: &mut CliService, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "list" => print_visible(service),
        "cat" => {
            let category = service.flip_category();
            println!("active list: {}", category.label());
            print_visible(service);
        }
        "add" => match service.add_item(rest) {
            Some(_) => print_visible(service),
            None => println!("nothing added; text was empty"),
        },
        "done" | "edit" | "rm" => match resolve_index(service, rest) {
            Some(id) => {
                let outcome = match command {
                    "done" => service.toggle_complete(id).map(|_| true),
                    "edit" => service.edit_item(id, &ConsolePrompt),
                    _ => Ok(service.delete_item(id, &ConsoleConfirm)),
                };
                report_outcome(service, outcome);
            }
            None => println!("no visible item numbered `{rest}`"),
        },
        other => println!("unknown command `{other}`"),
    }

    true
}

fn report_outcome(service: &CliService, outcome: StoreResult<bool>) {
    match outcome {
        Ok(true) => print_visible(service),
        Ok(false) => println!("nothing changed"),
        // The id was read from the listing a moment ago, so a miss means the
        // store and the listing went out of sync.
        Err(err) => eprintln!("internal error: {err}"),
    }
}

/// Maps a 1-based listing number onto the id it currently displays.
fn resolve_index(service: &CliService, argument: &str) -> Option<ItemId> {
    let number: usize = argument.parse().ok().filter(|n| *n >= 1)?;
    service.visible_items().nth(number - 1).map(|(id, _)| id)
}

fn print_visible(service: &CliService) {
    let mut shown = 0usize;
    for (index, (_, item)) in service.visible_items().enumerate() {
        let marker = if item.is_complete { "x" } else { " " };
        println!("{:>3}. [{marker}] {}", index + 1, item.text);
        shown += 1;
    }
    if shown == 0 {
        println!("({} list is empty)", service.active_category().label());
    }
}

fn resolve_db_path() -> PathBuf {
    // First positional argument wins so several databases can live side by
    // side; the temp-dir default keeps the probe usable with zero setup.
    if let Some(raw) = env::args().nth(1) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}
