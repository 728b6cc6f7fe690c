//! Print weight totals and the category table for packs in a JSON file
//! Usage: cargo run --bin pack_report -- <pack.json> [unit]

use std::path::{Path, PathBuf};

use gearpack::build_info::BuildInfo;
use gearpack::config::Config;
use gearpack::models::Pack;
use gearpack::tools::packs::resolve_unit;
use gearpack::weight::{compute_weight_breakdown, format_weight, pack_category_summaries};

fn load_packs(path: &Path) -> Result<Vec<Pack>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let packs: Vec<Pack> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(packs)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Usage: pack_report <pack.json> [g|oz|kg|lb]");
            std::process::exit(2);
        }
    };

    let config = Config::from_env();
    let unit = resolve_unit(args.get(2).map(|s| s.as_str()), config.display_unit);

    println!("{}", BuildInfo::current().banner());
    println!("File: {}", path.display());

    for pack in load_packs(&path)? {
        let breakdown = compute_weight_breakdown(&pack, unit)?;
        let items = pack.items.as_deref().unwrap_or_default();

        println!("\nPack {}", pack.id);
        println!("  Items:       {}", breakdown.item_count);
        println!("  Base:        {}", format_weight(breakdown.base_weight, unit));
        println!("  Worn:        {}", format_weight(breakdown.worn_weight, unit));
        println!("  Consumable:  {}", format_weight(breakdown.consumable_weight, unit));
        println!("  Total:       {}", format_weight(breakdown.total_weight, unit));

        for category in pack_category_summaries(items) {
            println!(
                "    {:<16} {:>3} items {:>4}%",
                category.name, category.items, category.percentage
            );
        }
    }

    Ok(())
}
