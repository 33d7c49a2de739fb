// One-shot page search from the command line.
//
// Usage: sitewright-search <html-file> <page-url> <query>
//
// Prints the results as JSON followed by the rendered dropdown markup.

use anyhow::{Context, Result, bail};
use sitewright::search::{Page, perform_search, render_results};
use sitewright::{SearchConfig, init_logging};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [html_file, page_url, query] = args.as_slice() else {
        bail!("usage: sitewright-search <html-file> <page-url> <query>");
    };

    let html = std::fs::read_to_string(html_file)
        .with_context(|| format!("Failed to read {html_file}"))?;
    let page = Page::parse(&html, page_url)?;
    let config = SearchConfig::default();

    let query = query.trim();
    if !config.accepts(query) {
        bail!(
            "query must be at least {} characters",
            config.min_search_length()
        );
    }
    let results = perform_search(&page, query, &config);

    println!("{}", serde_json::to_string_pretty(&results)?);
    println!("{}", render_results(&results, query, &config));
    Ok(())
}
