//! Palette generator binary.
//!
//! Prints the packed palette assignments to stdout, one slot per line.
//! Takes no arguments; the palette is a fixed table.

use std::process;

fn main() {
    match palette_gen::assignments() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("palette-gen: {err}");
            process::exit(1);
        }
    }
}
