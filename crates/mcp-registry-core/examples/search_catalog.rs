//! Search a catalog file from the command line

use mcp_registry_core::{Catalog, QueryEngine, Result, ServerListQuery};

fn main() -> Result<()> {
    // Get path and query from args
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(|s| s.as_str()).unwrap_or("servers.json");
    let search = args.get(2).cloned();

    println!("Loading catalog from: {}", path);
    let engine = QueryEngine::new(Catalog::load(path)?);

    let params = ServerListQuery {
        search,
        limit: Some("10".to_string()),
        ..Default::default()
    }
    .into_params();
    let page = engine.list(&params);

    println!("Found {} matches (showing at most 10):", page.metadata.count);
    for entry in &page.servers {
        println!("  - {} (v{})", entry.name(), entry.version());
    }

    Ok(())
}
