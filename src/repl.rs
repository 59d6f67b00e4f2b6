//! The interactive prompt loop.
//!
//! Reads hex color codes from the input until one resolves, the user quits,
//! or the input ends. Generic over reader and writer so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::debug;

use crate::color::is_valid_hex;
use crate::errors::Result;
use crate::nearest::{self, Match};
use crate::palette;

/// The prompt shown before every read.
pub const PROMPT: &str = "Enter a hex color code (e.g., #FFFFFF) or 'q' to quit: ";

/// Token that ends the loop, matched case-insensitively.
const QUIT: &str = "q";

/// Runs the prompt loop until a lookup succeeds, the user quits, or the
/// input ends.
///
/// Invalid entries are reported and the loop continues; end-of-input is a
/// normal termination.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, results: usize) -> Result<()> {
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input counts as a quit.
            break;
        }
        let entry = line.strip_suffix('\n').unwrap_or(&line);
        let entry = entry.strip_suffix('\r').unwrap_or(entry);

        if is_valid_hex(entry) {
            let start = Instant::now();
            let matches = nearest::find_nearest(entry, palette::hexes(), results)?;
            debug!(
                query = entry,
                candidates = palette::count(),
                duration = ?start.elapsed(),
                "nearest-color scan complete"
            );
            write_matches(&mut output, entry, &matches)?;
            break;
        } else if entry.eq_ignore_ascii_case(QUIT) {
            break;
        } else {
            writeln!(
                output,
                "Invalid hex color code. Please enter a valid hex color (e.g., #FFFFFF)."
            )?;
            writeln!(output)?;
        }
    }
    Ok(())
}

/// Writes ranked matches, resolving each hex code to its palette name.
///
/// Hex codes with no palette entry are reported as `Unknown`.
pub fn write_matches<W: Write>(output: &mut W, query: &str, matches: &[Match<'_>]) -> Result<()> {
    writeln!(output, "The nearest colors to {} are:", query)?;
    for (i, m) in matches.iter().enumerate() {
        let name = palette::name_of(m.hex).unwrap_or("Unknown");
        writeln!(
            output,
            "{}. {} ({}), Distance: {:.2}",
            i + 1,
            m.hex,
            name,
            m.distance
        )?;
    }
    Ok(())
}
