//! Nearest-color search over candidate hex codes.

use crate::color::Rgb;
use crate::errors::Result;

/// How many matches a lookup returns unless told otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// A candidate hex code ranked by its distance to the query color.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// The candidate's hex code, exactly as supplied
    pub hex: &'a str,
    /// Euclidean RGB distance between the candidate and the query
    pub distance: f64,
}

/// Finds the `top_n` nearest candidates to the query color.
///
/// # Arguments
/// * `query` - The hex color to find the nearest matches for
/// * `candidates` - Hex colors to search through
/// * `top_n` - Number of matches to return (minimum 1)
///
/// # Returns
/// Matches in ascending distance order; ties keep candidate order
///
/// # Errors
/// Returns an error if the query or any candidate is not a valid hex
/// color code.
pub fn find_nearest<'a, I>(query: &str, candidates: I, top_n: usize) -> Result<Vec<Match<'a>>>
where
    I: IntoIterator<Item = &'a str>,
{
    let origin: Rgb = query.parse()?;

    let mut matches = Vec::new();
    for hex in candidates {
        let color: Rgb = hex.parse()?;
        matches.push(Match {
            hex,
            distance: origin.distance(color),
        });
    }

    // Stable sort: candidates at equal distance keep their input order.
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches.truncate(top_n.max(1));
    Ok(matches)
}
