//! Declarative plugin UI pages.
//!
//! A plugin describes a configuration page as a list of typed
//! [`component::Component`]s; a host renders it and feeds user interactions
//! back through [`page::Page::on_event`]. The plugin owns all state, which
//! round-trips through the host untouched.

pub mod coerce;
pub mod component;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod page;
pub mod sample;
pub mod storage;
pub mod tools;
