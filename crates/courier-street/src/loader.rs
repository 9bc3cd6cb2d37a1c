//! Street map text-file loader.
//!
//! # File format
//!
//! Repeated blocks, one per street:
//!
//! ```text
//! Glenmere Way
//! 2
//! 34.0547000 -118.4794734 34.0549062 -118.4795360
//! 34.0549062 -118.4795360 34.0551376 -118.4796175
//! ```
//!
//! A street-name line, the number of segments on that street, then that many
//! lines of `lat1 lon1 lat2 lon2` in decimal text.  Every line registers the
//! road in **both** directions.  Coordinate identity is the exact token text
//! from the file — tokens are never re-formatted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use courier_core::GeoCoord;

use crate::map::{StreetMap, StreetMapBuilder};
use crate::StreetError;

impl StreetMap {
    /// Load a street map from a file in the block format above.
    ///
    /// # Errors
    ///
    /// [`StreetError::Io`] if the file cannot be read,
    /// [`StreetError::Parse`] (with the offending line number) on a
    /// malformed count or coordinate line.
    pub fn load_file(path: impl AsRef<Path>) -> Result<StreetMap, StreetError> {
        let file = File::open(path)?;
        Self::load_reader(BufReader::new(file))
    }

    /// Like [`StreetMap::load_file`] but accepts any `BufRead` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or loading embedded
    /// map data.
    pub fn load_reader<R: BufRead>(reader: R) -> Result<StreetMap, StreetError> {
        let mut builder = StreetMapBuilder::new();

        let mut lines = reader.lines().enumerate();
        while let Some((idx, name)) = lines.next() {
            let name = name?;
            if name.trim().is_empty() {
                // Tolerate blank separators and a trailing newline.
                continue;
            }

            let (count_idx, count_line) = lines.next().ok_or(StreetError::Parse {
                line: idx + 2,
                msg: format!("expected segment count after street {:?}", name.trim()),
            })?;
            let count: usize = count_line?.trim().parse().map_err(|_| StreetError::Parse {
                line: count_idx + 1,
                msg: format!("expected segment count after street {:?}", name.trim()),
            })?;

            for _ in 0..count {
                let (seg_idx, seg_line) = lines.next().ok_or(StreetError::Parse {
                    line: count_idx + 2,
                    msg: format!("street {:?} promised {count} segments", name.trim()),
                })?;
                let seg_line = seg_line?;
                let (a, b) = parse_segment_line(seg_idx + 1, &seg_line)?;
                builder.add_street(name.trim(), a, b);
            }
        }

        let map = builder.build();
        log::info!(
            "loaded {} street segments across {} coordinates",
            map.segment_count(),
            map.coord_count(),
        );
        Ok(map)
    }
}

/// Parse one `lat1 lon1 lat2 lon2` line into its two endpoint coordinates.
fn parse_segment_line(line: usize, text: &str) -> Result<(GeoCoord, GeoCoord), StreetError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [lat1, lon1, lat2, lon2] = tokens.as_slice() else {
        return Err(StreetError::Parse {
            line,
            msg: format!("expected 4 coordinate tokens, found {}", tokens.len()),
        });
    };
    let a = GeoCoord::new(lat1, lon1)
        .map_err(|e| StreetError::Parse { line, msg: e.to_string() })?;
    let b = GeoCoord::new(lat2, lon2)
        .map_err(|e| StreetError::Parse { line, msg: e.to_string() })?;
    Ok((a, b))
}
