//! The built-in named-color palette.
//!
//! The table itself is generated at build time from `palette.json`; this
//! module exposes lookups over it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

include!(concat!(env!("OUT_DIR"), "/palette.rs"));

/// Reverse index from lowercased hex code to the first name carrying it.
/// Duplicate hex codes are legal; palette order decides which name wins.
static NAMES_BY_HEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(PALETTE.len());
    for &(name, hex) in PALETTE {
        index.entry(hex.to_ascii_lowercase()).or_insert(name);
    }
    index
});

/// Looks up the hex code for a color name.
pub fn get_hex(name: &str) -> Option<&'static str> {
    COLORS.get(name).copied()
}

/// Resolves a hex code to its color name, case-insensitively.
///
/// When several palette entries share a hex code, the first one in palette
/// order is returned.
pub fn name_of(hex: &str) -> Option<&'static str> {
    NAMES_BY_HEX.get(&hex.to_ascii_lowercase()).copied()
}

/// All palette entries as `(name, hex)` pairs, in palette order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    PALETTE
}

/// The palette's hex codes, in palette order.
pub fn hexes() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|&(_, hex)| hex)
}

/// Number of colors in the palette.
pub fn count() -> usize {
    PALETTE.len()
}
