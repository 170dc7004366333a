//! # Malphas Core
//!
//! Core traits, types, and errors for the Malphas compression library.
//!
//! Malphas is named after the 39th demon of the Ars Goetia, a mighty builder
//! of towers - fitting for a library whose central artifact is a code tree
//! raised bottom-up from symbol weights.
//!
//! ## Core Surface
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Error`] / [`Result`] - Error taxonomy shared by all codec crates
//! - [`CompressionStats`] / [`CompressionRatio`] - Operation metrics
//!
//! ## Example
//!
//! ```ignore
//! use malphas_core::Compressor;
//! use malphas_huffman::HuffmanCompressor;
//!
//! let codec = HuffmanCompressor::new();
//! let packed = codec.compress(b"aaab")?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::Compressor;
pub use types::{CompressionRatio, Symbol, SYMBOL_COUNT};
