use anyhow::{Context, Result};
use clap::Parser;
use rvasm::Listing;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Parses RISC-V-subset assembly and dumps the program listing.")]
struct Args {
    /// The assembly source file
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let listing = rvasm::parse_listing(&source)?;
    print_listing(&listing);
    Ok(())
}

fn print_listing(listing: &Listing) {
    println!("Code:");
    println!("============");
    for (index, statement) in listing.code.iter().enumerate() {
        print_labels(&listing.code_labels, index);
        println!("    {:<8}{}", statement.mnemonic, statement.args.join(", "));
    }
    print_trailing_labels(&listing.code_labels, listing.code.len());

    println!();
    println!("Data:");
    println!("============");
    for (offset, byte) in listing.data.iter().enumerate() {
        print_labels(&listing.data_labels, offset);
        println!("    {:#06x}: {:#04x}", offset, byte);
    }
    print_trailing_labels(&listing.data_labels, listing.data.len());
}

fn print_labels(labels: &[Vec<String>], position: usize) {
    if let Some(names) = labels.get(position) {
        for name in names {
            println!("{}:", name);
        }
    }
}

fn print_trailing_labels(labels: &[Vec<String>], len: usize) {
    for position in len..labels.len() {
        print_labels(labels, position);
    }
}
