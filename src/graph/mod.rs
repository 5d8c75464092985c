//! Graph construction and representation
//!
//! This module provides building and storage of the sentence
//! similarity graph ranked by PageRank.

pub mod builder;
pub mod csr;
