//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain, `tools`: the catalog of callable
//! tools, the dispatcher that routes calls to them, and the shell executor.

pub mod tools;
