//! Core types and errors for the OSINT lookup service.
//!
//! This crate provides the foundational types shared by the recon engine,
//! the HTTP API and the command-line tool:
//!
//! - **Types**: request-scoped value structures for WHOIS records, DNS
//!   answers, page extraction results and the aggregate website report
//! - **Outcome**: the success-or-error shape every sub-lookup is embedded as
//! - **Errors**: top-level error handling with [`OsintError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use osint_core::{DomainRecord, Outcome};
//!
//! fn describe(whois: &Outcome<DomainRecord>) {
//!     match whois {
//!         Outcome::Found(record) => println!("registrar: {:?}", record.registrar),
//!         Outcome::Failed(failure) => println!("lookup failed: {}", failure.error),
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/osint-core/0.3.0")]

mod error;
pub mod types;

pub use error::{OsintError, Result};
pub use types::*;
