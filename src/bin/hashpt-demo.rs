//! Scripted walkthrough of the hashed page table.
//!
//! Adds a fixed set of mappings, translates a fixed set of addresses, then
//! prints the statistics and the non-empty buckets.
//!
//! Set `RUST_LOG=trace` to see the table's own events.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hashpt::{FrameNumber, HashPageTable, Result, VirtualAddress};

/// (virtual address, frame) pairs. 32768 is page 8 and collides with page 0.
const ENTRIES: [(u64, u64); 5] = [
    (0, 100),
    (4096, 101),
    (8192, 102),
    (12288, 103),
    (32768, 104),
];

/// 16384 is page 4, which is never mapped.
const LOOKUPS: [u64; 6] = [0, 4096, 8192, 12288, 32768, 16384];

#[derive(Parser, Debug)]
#[command(version, about = "Hashed page table demonstration")]
struct Args {
    /// Number of buckets in the table.
    #[arg(long, env = "HASHPT_TABLE_SIZE", default_value_t = 8)]
    table_size: usize,

    /// Page size in bytes.
    #[arg(long, env = "HASHPT_PAGE_SIZE", default_value_t = 4096)]
    page_size: u64,
}

fn setup_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> Result<()> {
    setup_logger();
    let args = Args::parse();

    let mut table = HashPageTable::new(args.table_size, args.page_size)?;

    println!("Adding page entries...");
    for (addr, frame) in ENTRIES {
        table.add_page_entry(VirtualAddress::new(addr), FrameNumber::new(frame))?;
        println!("Added mapping: Virtual Address {} -> Frame {}", addr, frame);
    }

    println!("\nPerforming lookups...");
    for addr in LOOKUPS {
        match table.lookup_page(VirtualAddress::new(addr)) {
            Some(t) => {
                println!("Lookup for {}:", addr);
                println!("  Frame Number: {}", t.frame_number.0);
                println!("  Offset: {}", t.offset);
                println!("  Physical Address: {}", t.physical_address.0);
            }
            None => println!("Page fault: No mapping found for address {}", addr),
        }
    }

    print_statistics(&table);
    print_table(&table);
    Ok(())
}

fn print_statistics(table: &HashPageTable) {
    let stats = table.statistics_snapshot();

    println!("\nHash Page Table Statistics:");
    println!("Table Size: {} entries", table.table_size());
    println!("Page Size: {} bytes", table.page_size());
    println!("Total Lookups: {}", stats.lookups);
    println!("Hits: {}", stats.hits);
    println!("Misses: {}", stats.misses);
    println!("Collisions: {}", stats.collisions);
    if let Some(rate) = stats.hit_rate() {
        println!("Hit Rate: {:.2}%", rate * 100.0);
    }
    tracing::info!(occupancy = %table.occupancy(), "table occupancy");
}

fn print_table(table: &HashPageTable) {
    println!("\nHash Page Table Contents:");
    for (index, bucket) in table.non_empty_buckets() {
        let entries: Vec<String> = bucket
            .iter()
            .map(|e| format!("({}, {})", e.page_number.0, e.frame_number.0))
            .collect();
        println!("Index {}: [{}]", index, entries.join(", "));
    }
}
