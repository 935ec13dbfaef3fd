#![forbid(unsafe_code)]

//! Orbit demo: a portfolio ecosystem browsed as a drill-down orbit diagram.

pub mod app;
pub mod cli;
pub mod logging;
