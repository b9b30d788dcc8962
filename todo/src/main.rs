//! Interactive CLI for the to-do list.
//!
//! This binary is the rendering layer the core logic treats as external: it
//! owns the pending input line, re-renders after every mutation via a store
//! subscription, and maps displayed row numbers back to item ids before
//! dispatching intents.

use std::io::{self, BufRead, Write};

use todolist::{Filter, ItemId, ListAction, ListEnvironment, ListReducer, ListState};
use todolist_runtime::Store;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = Store::new(
        ListState::new(),
        ListReducer::new(),
        ListEnvironment::default(),
    );
    store.subscribe(render);

    println!("todos — what needs to be done? (`help` for commands)");
    render(store.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        handle(line, &mut store)?;
    }

    Ok(())
}

/// One command per line; every mutation goes through the store.
fn handle(line: &str, store: &mut Store<ListReducer>) -> Result<(), todolist_runtime::StoreError> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "add" => store.send(ListAction::Add {
            text: rest.to_owned(),
        })?,
        "toggle" => match row_id(store, rest) {
            Some(id) => store.send(ListAction::Toggle { id })?,
            None => println!("no row {rest} in the current view"),
        },
        "rm" => match row_id(store, rest) {
            Some(id) => store.send(ListAction::Remove { id })?,
            None => println!("no row {rest} in the current view"),
        },
        "all" => match rest {
            "on" => store.send(ListAction::ToggleAll { done: true })?,
            "off" => store.send(ListAction::ToggleAll { done: false })?,
            _ => println!("usage: all on|off"),
        },
        "clear" => store.send(ListAction::ClearCompleted)?,
        "filter" => match rest.parse::<Filter>() {
            Ok(filter) => store.send(ListAction::SetFilter { filter })?,
            Err(err) => println!("{err}"),
        },
        "ls" => render(store.snapshot()),
        "help" => help(),
        other => println!("unknown command {other:?} (`help` for commands)"),
    }

    Ok(())
}

/// Maps a displayed row number (1-based, within the current view) to an id.
fn row_id(store: &Store<ListReducer>, arg: &str) -> Option<ItemId> {
    let n: usize = arg.parse().ok().filter(|n| *n >= 1)?;
    store.state(|state| state.visible_items().nth(n - 1).map(|item| item.id.clone()))
}

fn render(state: &ListState) {
    if state.is_empty() {
        println!("  (nothing to do)");
        return;
    }

    let all = if state.all_done() { "x" } else { " " };
    println!("  [{all}] mark all as complete          view: {}", state.filter);

    for (n, item) in state.visible_items().enumerate() {
        let mark = if item.done { "x" } else { " " };
        println!("  {:>3}. [{mark}] {}", n + 1, item.text);
    }

    let remaining = state.remaining_count();
    let plural = if remaining == 1 { "item" } else { "items" };
    println!("  {remaining} {plural} left");
    if state.completed_count() > 0 {
        println!("  (`clear` removes {} completed)", state.completed_count());
    }
}

fn help() {
    println!("  add <text>                  create an item");
    println!("  toggle <row>                check/uncheck a row");
    println!("  rm <row>                    delete a row");
    println!("  all on|off                  mark everything (un)done");
    println!("  clear                       remove completed items");
    println!("  filter all|active|completed pick the view");
    println!("  ls                          redraw");
    println!("  quit                        leave");
}
