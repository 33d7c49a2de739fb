// Clean-URL static site server.
//
// Serves SITE_ROOT (default: the current directory) on PORT (default 3000).

use anyhow::Result;
use sitewright::{SiteConfig, init_logging, serve};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = SiteConfig::from_env()?;
    serve(config).await?;
    Ok(())
}
