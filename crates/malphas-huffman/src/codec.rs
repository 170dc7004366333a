//! One-shot Huffman compressor.

use std::time::Instant;

use tracing::debug;

use malphas_core::{CompressionStats, Compressor, Error, Result};

use crate::bitstream;
use crate::code::CodeTable;
use crate::histogram::FrequencyTable;
use crate::tree::HuffmanTree;

/// Huffman compressor implementing the one-shot [`Compressor`] trait.
///
/// The output is a raw packed bitstream: no header, no serialized code
/// table, no pad-length marker. It cannot be decoded on its own: a
/// consumer that needs the original bytes back must be handed the
/// [`CodeTable`] out of band. Empty input is rejected with
/// [`Error::EmptyInput`] rather than mapped to an empty stream, matching
/// the tree builder's contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCompressor;

impl HuffmanCompressor {
    /// Create a new Huffman compressor.
    pub fn new() -> Self {
        Self
    }

    /// Compress and report operation statistics alongside the packed bytes.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = Instant::now();

        let freq = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::from_frequencies(&freq)?;
        let codes = CodeTable::from_tree(&tree);
        let packed = bitstream::pack(input, &codes)?;

        let stats = CompressionStats {
            original_size: input.len(),
            compressed_size: packed.len(),
            time_us: start.elapsed().as_micros() as u64,
            distinct_symbols: freq.distinct_symbols(),
            total_bits: codes.encoded_bits(&freq),
        };
        debug!(
            input_len = stats.original_size,
            output_len = stats.compressed_size,
            distinct = stats.distinct_symbols,
            total_bits = stats.total_bits,
            "huffman compression complete"
        );

        Ok((packed, stats))
    }
}

impl Compressor for HuffmanCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_with_stats(input).map(|(packed, _)| packed)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let packed = self.compress(input)?;
        if packed.len() > output.len() {
            return Err(Error::buffer_too_small(packed.len(), output.len()));
        }
        output[..packed.len()].copy_from_slice(&packed);
        Ok(packed.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // A Huffman code's mean length is below entropy + 1, and byte
        // symbols carry at most 8 bits of entropy: 9 bits per input byte
        // bounds the packed payload.
        input_len + input_len / 8 + 1
    }
}

/// Compress `input` with a freshly built code table.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    HuffmanCompressor::new().compress(input)
}
