//! Natural language processing components
//!
//! This module provides the tokenization capability consumed by the ranker.

pub mod tokenizer;

pub use tokenizer::{AsciiWordTokenizer, Tokenizer};
