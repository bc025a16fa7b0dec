use std::env;

use ldap_rs_demos::{BindConfig, DirectorySession};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // show protocol traffic unless the user asked for something else
    if env::var_os("RUST_LOG").is_none() {
        pretty_env_logger::formatted_timed_builder()
            .filter_level(log::LevelFilter::Info)
            .filter_module("ldap_rs", log::LevelFilter::Debug)
            .filter_module("ldap_rs_demos", log::LevelFilter::Debug)
            .init();
    } else {
        pretty_env_logger::init_timed();
    }

    let config = BindConfig::default();

    let mut session = DirectorySession::connect(&config.directory).await.map_err(|e| {
        error!("Failed to connect: {}", e);
        e
    })?;

    session.simple_bind(&config.dn, &config.password).await.map_err(|e| {
        error!("Failed to bind: {}", e);
        e
    })?;
    info!("Bound as {}", config.dn);

    session.close().await?;

    Ok(())
}
