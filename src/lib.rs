// src/lib.rs

//! cfbscrape library
//!
//! Walks cfbstats.com from the team directory down to per-season record,
//! schedule and roster pages, and writes one set of CSV files per team.

pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod utils;
