//! Directory client module

use futures::{future::BoxFuture, TryStreamExt};
use ldap_rs::LdapClient;
use log::debug;

use crate::{
    config::DirectoryConfig,
    error::Result,
    model::Entry,
    request::SearchQuery,
};

/// Single connection to the directory server.
/// Dropping the session closes the connection; `close` additionally sends an unbind request.
pub struct DirectorySession {
    client: LdapClient,
}

impl DirectorySession {
    /// Connect to the configured host and port
    pub async fn connect(config: &DirectoryConfig) -> Result<Self> {
        debug!("Connecting to {}:{}", config.host, config.port);
        let client = LdapClient::builder(&config.host).port(config.port).connect().await?;
        Ok(Self { client })
    }

    /// Authenticate with DN and password
    pub async fn simple_bind<U, P>(&mut self, dn: U, password: P) -> Result<()>
    where
        U: AsRef<str>,
        P: AsRef<str>,
    {
        debug!("Simple bind as {}", dn.as_ref());
        Ok(self.client.simple_bind(dn, password).await?)
    }

    /// Run the search and collect all entries in server order
    pub async fn search(&mut self, query: &SearchQuery) -> Result<Vec<Entry>> {
        debug!(
            "Searching {} with filter {} for {:?}",
            query.get_base_dn(),
            query.get_filter(),
            query.get_attributes()
        );
        let entries = self.client.search(query.to_request()?).await?;
        let entries = entries.map_ok(Entry::from).try_collect::<Vec<_>>().await?;
        debug!("Search returned {} entries", entries.len());
        Ok(entries)
    }

    /// Send unbind request and drop the connection
    pub async fn close(mut self) -> Result<()> {
        Ok(self.client.unbind().await?)
    }
}

/// Source of search results for the web front-end
pub trait Directory: Send + Sync {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Entry>>>;
}

/// Directory which opens a fresh connection for every search
#[derive(Clone, Debug)]
pub struct LdapDirectory {
    config: DirectoryConfig,
}

impl LdapDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }
}

impl Directory for LdapDirectory {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Entry>>> {
        Box::pin(async move {
            let mut session = DirectorySession::connect(&self.config).await?;
            let entries = session.search(query).await?;
            session.close().await?;
            Ok(entries)
        })
    }
}
