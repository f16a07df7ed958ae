//! Probes the copilot and blackbox AI completion endpoints used by LiberGPT.
//!
//! Each probe sends one fixed-shape chat request and reduces the outcome to
//! a [`ProbeReport`](structs::probe::probe_report::ProbeReport): the request,
//! the raw HTTP exchange and a typed result that renders to the same text
//! line either way.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
