//! Build script to generate the named-color palette table.
//!
//! This script reads the checked-in `palette.json`, validates every entry,
//! and emits a static name-to-hex map plus an ordered entry slice that fixes
//! the scan and reverse-lookup order at runtime.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use phf_codegen::Map;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PaletteEntry {
    name: String,
    hex: String,
}

fn main() {
    println!("cargo:rerun-if-changed=palette.json");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("palette.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let raw = fs::read_to_string("palette.json").unwrap();
    let entries: Vec<PaletteEntry> = serde_json::from_str(&raw).unwrap();

    let mut seen = HashSet::new();
    for entry in &entries {
        if !is_well_formed_hex(&entry.hex) {
            panic!(
                "palette entry {:?} has malformed hex code {:?}",
                entry.name, entry.hex
            );
        }
        if !seen.insert(entry.name.as_str()) {
            panic!("palette entry {:?} is listed twice", entry.name);
        }
    }

    let mut color_map = Map::new();
    for entry in &entries {
        // The map keeps the value expression, so hand it an owned String.
        color_map.entry(entry.name.as_str(), format!("\"{}\"", entry.hex));
    }

    writeln!(
        &mut file,
        "static COLORS: phf::Map<&'static str, &'static str> = \n{};\n",
        color_map.build()
    )
    .unwrap();

    // Entry order matters: it decides tie order in scans and which name a
    // shared hex code resolves to.
    writeln!(&mut file, "static PALETTE: &[(&str, &str)] = &[").unwrap();
    for entry in &entries {
        writeln!(&mut file, "    ({:?}, {:?}),", entry.name, entry.hex).unwrap();
    }
    writeln!(&mut file, "];").unwrap();
}

/// Palette entries are stored in the canonical `#RRGGBB` form.
fn is_well_formed_hex(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
