//! Errors

use std::io;

use thiserror::Error;

/// Errors produced while talking to the directory or serving pages
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Ldap(#[from] ldap_rs::error::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
