//! dynarray Demo Binary
//!
//! Walks a SeqArray through every public operation and prints the snapshot
//! after each mutation, together with the count/capacity pair that makes the
//! growth policy visible.

use clap::Parser;
use dynarray::seq::render;
use dynarray::{Result, SeqArray};
use tracing_subscriber::{fmt, EnvFilter};

/// dynarray Demo
#[derive(Parser, Debug)]
#[command(name = "dynarray-demo")]
#[command(about = "Walkthrough of the growable sequence container")]
#[command(version)]
struct Args {
    /// Log storage reallocations as they happen
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},dynarray=debug")));

    fmt().with_env_filter(filter).with_target(true).init();

    tracing::info!("dynarray Demo v{}", dynarray::VERSION);

    if let Err(e) = run() {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut seq: SeqArray<i64> = SeqArray::new();

    seq.append(1);
    seq.append(2);
    seq.append(3);
    print_state(&seq, "After appending elements");

    seq.append_range(Some(&[9, 9, 11]))?;
    print_state(&seq, "After bulk append");

    println!("Has any elements: {}", seq.has_any());
    println!("First element: {}", seq.first()?);

    seq.insert(7, 2)?;
    print_state(&seq, "After insert at index 2");

    println!(
        "First occurrence of 9: {}",
        render::index_or_sentinel(seq.index_of(&9))
    );
    println!(
        "Last occurrence of 9: {}",
        render::index_or_sentinel(seq.last_index_of(&9))
    );

    let removed = seq.remove(&9);
    print_state(&seq, "After removing first 9");
    println!("Element removed: {removed}");

    let removed_count = seq.remove_all(Some(&[1, 3]))?;
    print_state(&seq, &format!("Removed {removed_count} elements, now"));

    seq.clear();
    print_state(&seq, "After clearing");

    Ok(())
}

/// Print the snapshot plus the count/capacity pair after a mutation.
fn print_state(seq: &SeqArray<i64>, message: &str) {
    println!(
        "{}: {} (count {}, capacity {})",
        message,
        render::join_bracketed(&seq.to_snapshot()),
        seq.count(),
        seq.capacity()
    );
}
