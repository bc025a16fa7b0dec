//! Program configuration

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: &str = "ldap.example.com";
pub const DEFAULT_PORT: u16 = 389;
pub const DEFAULT_LISTEN_PORT: u16 = 12345;
pub const TOP_DN: &str = "dc=example,dc=com";
pub const PEOPLE_DN: &str = "ou=people,dc=example,dc=com";

/// Directory server location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl DirectoryConfig {
    /// Create config for a host, port defaults to 389
    pub fn new<S: AsRef<str>>(host: S) -> Self {
        Self {
            host: host.as_ref().to_owned(),
            port: DEFAULT_PORT,
        }
    }

    /// Set port number
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn host_name(&self) -> &str {
        &self.host
    }

    pub fn port_number(&self) -> u16 {
        self.port
    }
}

/// Settings of the bind program
#[derive(Clone, Debug)]
pub struct BindConfig {
    pub directory: DirectoryConfig,
    pub dn: String,
    pub password: String,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            // the entry must carry a userPassword attribute
            dn: format!("uid=alice,{}", PEOPLE_DN),
            password: "password".to_owned(),
        }
    }
}

/// Settings of the people listing program
#[derive(Clone, Debug)]
pub struct ListConfig {
    pub directory: DirectoryConfig,
    pub base_dn: String,
    pub filter: String,
    pub attributes: Vec<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            base_dn: PEOPLE_DN.to_owned(),
            filter: "(objectClass=person)".to_owned(),
            attributes: vec!["cn".to_owned(), "mail".to_owned()],
        }
    }
}

/// Settings of the web front-end
#[derive(Clone, Debug)]
pub struct WebConfig {
    pub directory: DirectoryConfig,
    pub top_dn: String,
    pub listen: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            top_dn: TOP_DN.to_owned(),
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_LISTEN_PORT)),
        }
    }
}

impl WebConfig {
    /// Set the DN searched when no base DN is requested
    pub fn top_dn<S: AsRef<str>>(mut self, top_dn: S) -> Self {
        self.top_dn = top_dn.as_ref().to_owned();
        self
    }

    /// Set the address the HTTP server binds to
    pub fn listen(mut self, listen: SocketAddr) -> Self {
        self.listen = listen;
        self
    }

    pub fn directory(mut self, directory: DirectoryConfig) -> Self {
        self.directory = directory;
        self
    }
}
