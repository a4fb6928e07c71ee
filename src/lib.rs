//! Fetch remote CSV, Excel, JSON, and text files, save them verbatim, and
//! write a one-statistic text report for each.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod stats;
