//! Common utilities for the htmltag workspace.
//!
//! This crate provides shared infrastructure used by the tree builder:
//! - **Warning System** - colored terminal output for inconsistent trees

pub mod warning;
