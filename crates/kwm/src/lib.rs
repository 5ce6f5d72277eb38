//! kwm: keyword miner
//!
//! Extracts weighted keywords from a single web page. Text is collected from
//! the title, the keyword and description meta tags, and the h1 to h3
//! headings; every distinct keyword gains its field's weight once, and the
//! results are ranked by total score.

#![warn(missing_docs)]

pub mod cli;
