//! Some simple experiments with circular lists and their cursors.
//!
//! Run with `cargo run --features demo --bin experiments`; set `RUST_LOG=trace`
//! to see every structural edit.

use circular_list::{CircularList, CursorError};
use ghost_cell::GhostToken;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::fmt::Display;

fn show<'id, T: Display>(list: &CircularList<'id, T>, token: &GhostToken<'id>) -> String {
    let items: Vec<String> = list.iter(token).map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Build a list with `add`, printing it after every insertion.
fn expt1<'id>(token: &mut GhostToken<'id>) -> Result<(), CursorError> {
    info!("experiment 1: add");
    let list = CircularList::new();
    let mut cursor = list.cursor(token);
    for word in ["alpha", "bravo", "charlie", "delta"] {
        cursor.add(token, word.to_string())?;
        println!("add({:?}) -> {}", word, show(&list, token));
    }
    // step back and insert in the middle
    cursor.previous(token)?;
    cursor.previous(token)?;
    cursor.add(token, "inserted".to_string())?;
    println!(
        "add(\"inserted\") at {} -> {}",
        cursor.previous_index(token)?,
        show(&list, token)
    );
    Ok(())
}

/// Walk forward and remove every other element.
fn expt2<'id>(token: &mut GhostToken<'id>) -> Result<(), CursorError> {
    info!("experiment 2: remove");
    let list = CircularList::new();
    let mut cursor = list.cursor(token);
    for i in 0..8 {
        cursor.add(token, i)?;
    }
    println!("start: {}", show(&list, token));

    let mut cursor = list.cursor(token);
    while cursor.has_next(token)? {
        let value = *cursor.next(token)?;
        if value % 2 == 1 {
            cursor.remove(token)?;
            println!(
                "removed {} (next index {}) -> {}",
                value,
                cursor.next_index(token)?,
                show(&list, token)
            );
        }
    }
    Ok(())
}

/// Replace elements with `set`, then show that only structural edits make
/// other cursors stale.
fn expt3<'id>(token: &mut GhostToken<'id>) -> Result<(), CursorError> {
    info!("experiment 3: set and stale cursors");
    let list = CircularList::new();
    let mut cursor = list.cursor(token);
    for c in ['a', 'b', 'c'] {
        cursor.add(token, c)?;
    }

    let mut upper = list.cursor(token);
    let observer = list.cursor(token);
    while upper.has_next(token)? {
        let c = upper.next(token)?.to_ascii_uppercase();
        upper.set(token, c)?;
    }
    println!(
        "after set: {} (observer stale: {})",
        show(&list, token),
        observer.is_stale(token)
    );

    upper.add(token, 'D')?;
    println!(
        "after add: {} (observer stale: {})",
        show(&list, token),
        observer.is_stale(token)
    );
    if let Err(err) = observer.has_next(token) {
        warn!("observer: {}", err);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    GhostToken::new(|mut token| -> Result<(), CursorError> {
        expt1(&mut token)?;
        expt2(&mut token)?;
        expt3(&mut token)
    })?;
    Ok(())
}
