//! Reader for per-image vanishing point annotations.
//!
//! A record is three text lines:
//!
//! ```text
//! <ref_width> <ref_height>
//! <x1> <y1> <x2> <y2>
//! <x1> <y1> <x2> <y2>
//! ```
//!
//! The first line is the resolution the segments were authored against. Only
//! the token layout is validated here; degenerate segments are left for the
//! solver to reject.

use crate::geometry::{LineSegment, TargetFrame};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Two annotated segments plus the resolution they refer to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub ref_width: u32,
    pub ref_height: u32,
    pub lines: [LineSegment; 2],
}

impl AnnotationRecord {
    pub fn reference_frame(&self) -> TargetFrame {
        TargetFrame::new(self.ref_width, self.ref_height)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected 3 lines, found {found}")]
    MissingLines { found: usize },
    #[error("line 1: expected 2 dimensions, found {found} tokens")]
    DimensionCount { found: usize },
    #[error("line {line}: expected 4 coordinates, found {found} tokens")]
    SegmentCount { line: usize, found: usize },
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("reference dimensions must be nonzero")]
    ZeroDimension,
}

#[derive(Debug, Error)]
pub enum AnnotationFileError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed annotation {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Parses one annotation record. Lines past the third are ignored.
pub fn parse_annotation(text: &str) -> Result<AnnotationRecord, ParseError> {
    let lines: Vec<&str> = text.lines().take(3).collect();
    if lines.len() < 3 {
        return Err(ParseError::MissingLines { found: lines.len() });
    }

    let dims = tokens(lines[0]);
    if dims.len() != 2 {
        return Err(ParseError::DimensionCount { found: dims.len() });
    }
    let ref_width = parse_dimension(dims[0])?;
    let ref_height = parse_dimension(dims[1])?;
    if ref_width == 0 || ref_height == 0 {
        return Err(ParseError::ZeroDimension);
    }

    let first = parse_segment(lines[1], 2)?;
    let second = parse_segment(lines[2], 3)?;

    Ok(AnnotationRecord {
        ref_width,
        ref_height,
        lines: [first, second],
    })
}

/// Reads and parses an annotation file.
pub fn read_annotation(path: &Path) -> Result<AnnotationRecord, AnnotationFileError> {
    let text = fs::read_to_string(path).map_err(|source| AnnotationFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_annotation(&text).map_err(|source| AnnotationFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn parse_dimension(token: &str) -> Result<u32, ParseError> {
    token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        line: 1,
        token: token.to_string(),
    })
}

fn parse_segment(line: &str, line_no: usize) -> Result<LineSegment, ParseError> {
    let toks = tokens(line);
    if toks.len() != 4 {
        return Err(ParseError::SegmentCount {
            line: line_no,
            found: toks.len(),
        });
    }
    let mut values = [0.0f64; 4];
    for (slot, tok) in values.iter_mut().zip(&toks) {
        *slot = tok
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                line: line_no,
                token: tok.to_string(),
            })?;
    }
    Ok(LineSegment::new(values[0], values[1], values[2], values[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_record() {
        let rec = parse_annotation("640 480\n0 0 100.5 200\n-10 300 640 12.25\n").expect("parse");
        assert_eq!(rec.ref_width, 640);
        assert_eq!(rec.ref_height, 480);
        assert_eq!(rec.lines[0], LineSegment::new(0.0, 0.0, 100.5, 200.0));
        assert_eq!(rec.lines[1], LineSegment::new(-10.0, 300.0, 640.0, 12.25));
    }

    #[test]
    fn tolerates_crlf_and_padding() {
        let rec = parse_annotation("  50\t50 \r\n1 2 3 4\r\n5 6 7 8\r\nextra junk line\n")
            .expect("parse");
        assert_eq!(rec.reference_frame(), TargetFrame::new(50, 50));
        assert_eq!(rec.lines[1], LineSegment::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn accepts_degenerate_segments() {
        let rec = parse_annotation("10 10\n1 1 1 1\n2 2 2 2").expect("parse");
        assert_eq!(rec.lines[0].p0(), rec.lines[0].p1());
    }

    #[test]
    fn rejects_short_record() {
        assert_eq!(
            parse_annotation("100 100\n0 0 1 1\n"),
            Err(ParseError::MissingLines { found: 2 })
        );
        assert_eq!(
            parse_annotation(""),
            Err(ParseError::MissingLines { found: 0 })
        );
    }

    #[test]
    fn rejects_bad_dimension_line() {
        assert_eq!(
            parse_annotation("100\n0 0 1 1\n0 0 1 1"),
            Err(ParseError::DimensionCount { found: 1 })
        );
        assert_eq!(
            parse_annotation("100 100 3\n0 0 1 1\n0 0 1 1"),
            Err(ParseError::DimensionCount { found: 3 })
        );
        assert!(matches!(
            parse_annotation("100.5 100\n0 0 1 1\n0 0 1 1"),
            Err(ParseError::InvalidNumber { line: 1, .. })
        ));
        assert_eq!(
            parse_annotation("0 100\n0 0 1 1\n0 0 1 1"),
            Err(ParseError::ZeroDimension)
        );
    }

    #[test]
    fn rejects_bad_segment_lines() {
        assert_eq!(
            parse_annotation("100 100\n0 0 1\n0 0 1 1"),
            Err(ParseError::SegmentCount { line: 2, found: 3 })
        );
        assert_eq!(
            parse_annotation("100 100\n0 0 1 1\n0 0 1 1 9"),
            Err(ParseError::SegmentCount { line: 3, found: 5 })
        );
        assert_eq!(
            parse_annotation("100 100\n0 0 1 1\n0 x 1 1"),
            Err(ParseError::InvalidNumber {
                line: 3,
                token: "x".to_string()
            })
        );
        assert!(matches!(
            parse_annotation("100 100\n0 NaN 1 1\n0 0 1 1"),
            Err(ParseError::InvalidNumber { line: 2, .. })
        ));
    }
}
