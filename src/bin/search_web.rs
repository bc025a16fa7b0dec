use ldap_rs_demos::{web, WebConfig};
use log::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    web::serve(WebConfig::default()).await.map_err(|e| {
        error!("Failed to serve: {}", e);
        e
    })?;

    Ok(())
}
