//! Compress a file into a raw Huffman bitstream.
//!
//! The output carries no code table and cannot be decoded on its own; this
//! example exists to exercise the pipeline against real files and report
//! the achieved ratio.

use std::env;
use std::fs;
use std::process;

use malphas_huffman::HuffmanCompressor;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <input-file> <output-file>", args[0]);
        process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str) -> malphas_core::Result<()> {
    let input = fs::read(input_path)?;

    let codec = HuffmanCompressor::new();
    let (packed, stats) = codec.compress_with_stats(&input)?;

    fs::write(output_path, &packed)?;

    println!(
        "compressed {} -> {}: {} -> {} bytes ({:.1}% saved, {} distinct symbols)",
        input_path,
        output_path,
        stats.original_size,
        stats.compressed_size,
        stats.savings_percent(),
        stats.distinct_symbols,
    );
    Ok(())
}
