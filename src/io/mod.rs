//! Persistence of output records

pub mod output;
