//! Reading points from text.
//!
//! Both readers return validated points: at least one point, every point with the same
//! number of coordinates, every coordinate finite.

use crate::validation::DataValidator;
use crate::MstError;
use num_traits::Float;
use std::fmt::Display;
use std::str::FromStr;

/// Parses comma separated rows, one point per row. When `has_header` is set the first
/// non-empty line is skipped. Blank lines are ignored.
///
/// # Examples
/// ```
///use mst_equivalence::parse_csv_points;
///
///let csv = "x,y\n0.5,1\n2,-3.25\n";
///let points: Vec<Vec<f64>> = parse_csv_points(csv, true).unwrap();
///assert_eq!(vec![vec![0.5, 1.0], vec![2.0, -3.25]], points);
/// ```
pub fn parse_csv_points<T>(contents: &str, has_header: bool) -> Result<Vec<Vec<T>>, MstError>
where
    T: Float + FromStr,
    T::Err: Display,
{
    let rows = non_empty_lines(contents).skip(usize::from(has_header));
    parse_rows(rows, |line| line.split(',').collect())
}

/// Parses whitespace separated rows, one point per row.
pub fn parse_whitespace_points<T>(contents: &str) -> Result<Vec<Vec<T>>, MstError>
where
    T: Float + FromStr,
    T::Err: Display,
{
    parse_rows(non_empty_lines(contents), |line| {
        line.split_whitespace().collect()
    })
}

fn non_empty_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_rows<'a, T, I, S>(rows: I, split: S) -> Result<Vec<Vec<T>>, MstError>
where
    T: Float + FromStr,
    T::Err: Display,
    I: Iterator<Item = (usize, &'a str)>,
    S: Fn(&'a str) -> Vec<&'a str>,
{
    let points = rows
        .map(|(line, text)| {
            split(text)
                .into_iter()
                .map(|field| {
                    field.trim().parse::<T>().map_err(|err| MstError::Parse {
                        line,
                        message: format!("\"{}\": {err}", field.trim()),
                    })
                })
                .collect::<Result<Vec<T>, MstError>>()
        })
        .collect::<Result<Vec<Vec<T>>, MstError>>()?;
    DataValidator::new(&points).validate_points()?;
    Ok(points)
}
