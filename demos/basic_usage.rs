//! Basic hierarchical logging walkthrough
//!
//! Demonstrates the registry, level inheritance, additive dispatch, and the
//! shipped handlers.
//!
//! Run with: cargo run --example basic_usage

use hierlog::info;
use hierlog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Hierlog - Basic Usage ===\n");

    // Attach a console handler to the root: everything additive ends here.
    let root = hierlog::root();
    root.add_handler(Arc::new(ConsoleHandler::new()) as HandlerRef);
    hierlog::set_root_level(LogLevel::Info)?;

    // Loggers come from dotted names; "app.db" inherits the root's level.
    let app = hierlog::logger("app");
    let db = hierlog::logger("app.db");

    println!("1. Levels inherit from the nearest configured ancestor:");
    db.debug("hidden: DEBUG is below the inherited INFO threshold");
    db.info("visible: records flow up to the root's console handler");
    db.error("visible: errors land on stderr");

    println!("\n2. A local level overrides inheritance:");
    db.set_level(LogLevel::Debug)?;
    db.debug("now visible: app.db runs at DEBUG");
    app.debug("still hidden: the sibling subtree is untouched");

    println!("\n3. Macros format lazily, only when the gate is open:");
    let user_id = 42;
    info!(db, "user {} connected", user_id);

    println!("\n4. Extra handlers attach anywhere in the tree:");
    let memory = Arc::new(MemoryHandler::new());
    app.add_handler(Arc::clone(&memory) as HandlerRef);
    db.warn("slow query detected");
    println!("   memory handler captured {} record(s)", memory.len());

    println!("\n=== Example completed successfully! ===");

    hierlog::shutdown();
    Ok(())
}
