//! # Malphas Huffman
//!
//! Huffman entropy coding for byte streams: frequency analysis, prefix-free
//! code tree construction, codeword assignment, and MSB-first bit packing.
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> FrequencyTable -> HuffmanTree -> CodeTable -> BitWriter -> packed bytes
//! ```
//!
//! Each stage is exposed on its own for callers that need the intermediate
//! artifacts (e.g. the code table, which is required to interpret the
//! output), and [`HuffmanCompressor`] runs the whole pipeline behind the
//! [`Compressor`](malphas_core::Compressor) trait.
//!
//! ## Example
//!
//! ```
//! use malphas_huffman::compress;
//!
//! let packed = compress(b"aaab")?;
//! assert_eq!(packed, vec![0xE0]);
//! # Ok::<(), malphas_core::Error>(())
//! ```
//!
//! ## Output format
//!
//! Codewords are concatenated in input order and packed MSB-first, with the
//! final byte zero-padded on its low-order bits. The stream carries no
//! header, code table, or pad length and is therefore not self-describing:
//! decoding requires the [`CodeTable`] (or the tree it came from) out of
//! band. This crate deliberately ships no decoder and no serialized table
//! format.
//!
//! ## Determinism
//!
//! Tree construction breaks weight ties by `(weight, insertion sequence)`
//! with leaves seeded in ascending symbol order, and code assignment maps
//! the left child to `0`. Identical inputs produce byte-identical output on
//! every run and platform.

pub mod bitstream;
pub mod code;
pub mod codec;
pub mod histogram;
pub mod tree;

pub use bitstream::{pack, BitWriter};
pub use code::{CodeTable, Codeword};
pub use codec::{compress, HuffmanCompressor};
pub use histogram::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};
