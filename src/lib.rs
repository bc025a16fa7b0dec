#![doc = include_str!("../README.md")]

pub use ldap_rs;

pub use client::*;
pub use config::*;
pub use model::*;
pub use request::*;

pub mod client;
pub mod config;
pub mod error;
pub mod escape;
pub mod model;
pub mod page;
pub mod print;
pub mod render;
pub mod request;
pub mod web;
