// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate clap;
#[macro_use]
extern crate log;
extern crate log4rs;
#[macro_use]
extern crate error_chain;
extern crate walkdir;

// For testing in submodules
#[cfg(test)]
extern crate rand;

pub mod audit;
pub mod cli;
pub mod context;
pub mod copy;
pub mod encoding;
pub mod enumerate;
pub mod error;
pub mod extension;
pub mod line_endings;
pub mod logging;
pub mod path_map;
pub mod rule;

#[cfg(test)]
mod testutils;
