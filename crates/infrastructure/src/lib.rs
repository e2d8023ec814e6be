//! Ferrous Lookup Infrastructure Layer
pub mod dns;
