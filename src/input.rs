
use {
    barren_algorithms::rect::{RectError, Rectangle},
    regex::Regex,
    std::{num::ParseIntError, sync::LazyLock},
    thiserror::Error,
};

static RECTANGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([0-9]+) ([0-9]+) ([0-9]+) ([0-9]+)"$"#).unwrap());

#[derive(Debug, Error)]
pub enum InputError {
    #[error("The rectangles must be enclosed in braces")]
    MalformedInput,
    #[error("The input does not contain any rectangles")]
    NoRectangles,
    #[error("`{0}` is not of the form \"x1 y1 x2 y2\"")]
    MalformedRectangle(String),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoordinate(String, #[source] ParseIntError),
    #[error("`{0}` does not describe a rectangle")]
    InvalidRectangle(String, #[source] RectError),
}

/// Parses a list of the form `{"x1 y1 x2 y2","x1 y1 x2 y2",...}`.
///
/// Whitespace around the braces is ignored. A trailing comma after the last
/// rectangle is allowed.
pub fn parse_rectangles(s: &str) -> Result<Vec<Rectangle>, InputError> {
    let body = s
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or(InputError::MalformedInput)?;
    let body = body.strip_suffix(',').unwrap_or(body);
    if body.is_empty() {
        return Err(InputError::NoRectangles);
    }
    body.split(',').map(parse_rectangle).collect()
}

/// Parses a single rectangle of the form `"x1 y1 x2 y2"`, quotes included.
///
/// `x1 y1` is the lower left corner, `x2 y2` the upper right corner.
pub fn parse_rectangle(s: &str) -> Result<Rectangle, InputError> {
    let Some(caps) = RECTANGLE.captures(s) else {
        return Err(InputError::MalformedRectangle(s.to_string()));
    };
    let (_, [x1, y1, x2, y2]) = caps.extract();
    Rectangle::from_coords(
        parse_coordinate(x1)?,
        parse_coordinate(y1)?,
        parse_coordinate(x2)?,
        parse_coordinate(y2)?,
    )
    .map_err(|e| InputError::InvalidRectangle(s.to_string(), e))
}

fn parse_coordinate(s: &str) -> Result<i32, InputError> {
    s.parse()
        .map_err(|e| InputError::InvalidCoordinate(s.to_string(), e))
}
