#[cfg(test)]
mod tests;

use {
    crate::input::{self, InputError},
    barren_algorithms::rect::{Rectangle, field::RectangleField},
    log::debug,
    thiserror::Error,
};

pub const DEFAULT_WIDTH: i32 = 400;
pub const DEFAULT_HEIGHT: i32 = 600;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("The field must be at least one cell wide and one cell high, got {0}x{1}")]
    EmptyField(i32, i32),
    #[error("Could not parse the rectangles to remove")]
    Input(#[from] InputError),
}

/// The size of the field, in cells. The lower left cell of the field is `(0, 0)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldDimensions {
    pub width: i32,
    pub height: i32,
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl FieldDimensions {
    fn seed(self) -> Result<Rectangle, ProcessError> {
        let empty = ProcessError::EmptyField(self.width, self.height);
        if self.width <= 0 || self.height <= 0 {
            return Err(empty);
        }
        Rectangle::from_coords(0, 0, self.width - 1, self.height - 1).map_err(|_| empty)
    }
}

/// Removes the rectangles described by `input` from a field of the given size.
///
/// Returns the areas of the connected regions that remain, in ascending order and
/// separated by spaces. Nothing is computed if the input cannot be parsed.
pub fn process(input: &str, dims: FieldDimensions) -> Result<String, ProcessError> {
    let seed = dims.seed()?;
    let exclusions = input::parse_rectangles(input)?;
    debug!(
        "Removing {} rectangles from a {}x{} field",
        exclusions.len(),
        dims.width,
        dims.height
    );
    let mut field = RectangleField::from(seed);
    field.remove_all(&exclusions);
    debug!("{} cells remain", field.total_area());
    Ok(field.sorted_areas_as_string())
}
