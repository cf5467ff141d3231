//! CLI library components for keyscout.

pub mod logging;
