use serde::{Deserialize, Serialize};
use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    Error, Result,
    grid::{Coord, INPUT_COORDS, Point, check_input_range},
};

/// Serialization format of a tour description.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// A point count `N` followed by `N` whitespace separated `col row` pairs.
    #[default]
    Text,
    /// `{"points": [{"col": 0, "row": 0}, ...]}`
    Json,
}

/// JSON shape of a tour description.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct TourInput {
    pub points: Vec<Point>,
}

/// Reads tour points from `reader` in the given format, rejecting tours
/// longer than `max_points` and coordinates outside [`INPUT_COORDS`].
pub fn read_points<R: Read>(
    reader: R,
    format: InputFormat,
    max_points: usize,
) -> Result<Vec<Point>> {
    let points = match format {
        InputFormat::Text => read_points_text(BufReader::new(reader))?,
        InputFormat::Json => serde_json::from_reader::<_, TourInput>(reader)?.points,
    };
    check_input_range(&points)?;
    if points.len() > max_points {
        return Err(Error::TooManyPoints {
            count: points.len(),
            max: max_points,
        });
    }
    Ok(points)
}

/// Opens `path` and reads tour points from it.
pub fn load_points(
    path: impl AsRef<Path>,
    format: InputFormat,
    max_points: usize,
) -> Result<Vec<Point>> {
    let file = std::fs::File::open(path)?;
    read_points(file, format, max_points)
}

/// Parses the text format: a count `N`, then `N` coordinate pairs, separated
/// by any whitespace including line breaks. Tokens after the last pair are
/// ignored. Coordinates outside [`INPUT_COORDS`] are rejected with the line
/// they appear on.
pub fn read_points_text<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut tokens = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        tokens.extend(
            line.split_whitespace()
                .map(|token| (line_index + 1, token.to_owned())),
        );
    }

    let mut tokens = tokens.into_iter();
    let Some((line, count)) = tokens.next() else {
        return Err(Error::parse(1, "missing point count"));
    };
    let expected: usize = count
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid point count `{count}`")))?;

    let wanted = expected.saturating_mul(2);
    let mut coords = Vec::with_capacity(wanted.min(tokens.len()));
    for (line, token) in tokens.take(wanted) {
        let coord: Coord = token
            .parse()
            .map_err(|_| Error::parse(line, format!("invalid coordinate `{token}`")))?;
        if !INPUT_COORDS.contains(&coord) {
            return Err(Error::parse(
                line,
                format!("coordinate `{token}` is out of range"),
            ));
        }
        coords.push(coord);
    }

    if coords.len() < wanted {
        return Err(Error::MissingPoints {
            expected,
            found: coords.len() / 2,
        });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_single_line() {
        let points = read_points_text("2 0 0 5 0".as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(5, 0)]);
    }

    #[test]
    fn test_text_one_pair_per_line() {
        let input = "3\n0 0\n-2 7\n  4   -1\n";
        let points = read_points_text(input.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(-2, 7), Point::new(4, -1)]
        );
    }

    #[test]
    fn test_text_trailing_tokens_ignored() {
        let points = read_points_text("1\n3 3\n9 9\n".as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new(3, 3)]);
    }

    #[test]
    fn test_text_empty_input() {
        let err = read_points_text("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_text_bad_coordinate_reports_line() {
        let err = read_points_text("2\n0 0\n1 x\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("`x`"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_text_bad_count() {
        let err = read_points_text("-3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_text_missing_points() {
        let err = read_points_text("3\n0 0\n1 1\n2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingPoints {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_text_extreme_coordinates_rejected() {
        let input = "2\n9223372036854775807 0\n-9223372036854775808 0\n";
        let err = read_points_text(input.as_bytes()).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("out of range"));
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = read_points_text("1\n0 -2147483649\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_text_32_bit_bounds_accepted() {
        let points = read_points_text("2 2147483647 0 -2147483648 0".as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![Point::new(2_147_483_647, 0), Point::new(-2_147_483_648, 0)]
        );
    }

    #[test]
    fn test_json_extreme_coordinates_rejected() {
        let input = r#"{"points": [{"col": 0, "row": 0}, {"col": 9223372036854775807, "row": 0}]}"#;
        let err = read_points(input.as_bytes(), InputFormat::Json, 100).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                index: 1,
                point: Point {
                    col: i64::MAX,
                    row: 0
                }
            }
        ));
    }

    #[test]
    fn test_json_input() {
        let input = r#"{"points": [{"col": 1, "row": 2}, {"col": -3, "row": 0}]}"#;
        let points = read_points(input.as_bytes(), InputFormat::Json, 100).unwrap();
        assert_eq!(points, vec![Point::new(1, 2), Point::new(-3, 0)]);
    }

    #[test]
    fn test_json_malformed() {
        let err = read_points("{\"points\": 3}".as_bytes(), InputFormat::Json, 100).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_too_many_points() {
        let err = read_points("3 0 0 1 1 2 2".as_bytes(), InputFormat::Text, 2).unwrap_err();
        assert!(matches!(err, Error::TooManyPoints { count: 3, max: 2 }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_points("no/such/tour.txt", InputFormat::Text, 100).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
