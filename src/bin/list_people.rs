use std::io;

use ldap_rs_demos::{print::pretty_print, DirectorySession, ListConfig, Scope, SearchQuery};
use log::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let config = ListConfig::default();

    let mut session = DirectorySession::connect(&config.directory).await.map_err(|e| {
        error!("Failed to connect: {}", e);
        e
    })?;

    let query = SearchQuery::new(&config.base_dn)
        .scope(Scope::OneLevel)
        .filter(&config.filter)
        .attributes(&config.attributes);

    let entries = session.search(&query).await.map_err(|e| {
        error!("Failed people search: {}", e);
        e
    })?;

    pretty_print(&entries, 0, &mut io::stdout().lock())?;

    session.close().await?;

    Ok(())
}
