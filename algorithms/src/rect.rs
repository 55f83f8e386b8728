pub mod field;

use {
    smallvec::SmallVec,
    std::fmt::{Debug, Display, Formatter},
    thiserror::Error,
};

/// The pieces that remain after subtracting one rectangle from another.
///
/// There are never more than eight of them.
pub type Pieces = SmallVec<[Rectangle; 8]>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns whether the two points are grid neighbors along exactly one axis.
    ///
    /// Diagonal neighbors and identical points are not adjacent.
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = (self.x as i64 - other.x as i64).abs();
        let dy = (self.y as i64 - other.y as i64).abs();
        dx + dy == 1
    }
}

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RectError {
    #[error("A rectangle requires both a lower left and an upper right corner")]
    InvalidBounds,
    #[error("The upper right corner ({0}) lies to the left of the lower left corner ({1})")]
    InvertedHorizontal(i32, i32),
    #[error("The upper right corner ({0}) lies below the lower left corner ({1})")]
    InvertedVertical(i32, i32),
}

/// An axis-aligned rectangle of grid cells.
///
/// Both corners are inclusive: a rectangle whose corners coincide covers exactly one
/// cell. Only the lower left and upper right corners can be chosen, the other two are
/// derived when the rectangle is constructed.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rectangle {
    lower_left: Point,
    upper_left: Point,
    lower_right: Point,
    upper_right: Point,
}

impl Debug for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rectangle")
            .field("x1", &self.left())
            .field("y1", &self.bottom())
            .field("x2", &self.right())
            .field("y2", &self.top())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.left(),
            self.bottom(),
            self.right(),
            self.top()
        )
    }
}

impl Rectangle {
    pub fn from_corners(
        lower_left: Option<Point>,
        upper_right: Option<Point>,
    ) -> Result<Self, RectError> {
        match (lower_left, upper_right) {
            (Some(ll), Some(ur)) => Self::new(ll, ur),
            _ => Err(RectError::InvalidBounds),
        }
    }

    pub fn new(lower_left: Point, upper_right: Point) -> Result<Self, RectError> {
        if upper_right.x < lower_left.x {
            return Err(RectError::InvertedHorizontal(upper_right.x, lower_left.x));
        }
        if upper_right.y < lower_left.y {
            return Err(RectError::InvertedVertical(upper_right.y, lower_left.y));
        }
        Ok(Self {
            lower_left,
            upper_left: Point::new(lower_left.x, upper_right.y),
            lower_right: Point::new(upper_right.x, lower_left.y),
            upper_right,
        })
    }

    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, RectError> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn lower_right(&self) -> Point {
        self.lower_right
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    pub fn left(&self) -> i32 {
        self.lower_left.x
    }

    pub fn right(&self) -> i32 {
        self.upper_right.x
    }

    pub fn bottom(&self) -> i32 {
        self.lower_left.y
    }

    pub fn top(&self) -> i32 {
        self.upper_right.y
    }

    /// The number of columns covered by this rectangle.
    pub fn width(&self) -> u64 {
        (self.right() as i64 - self.left() as i64 + 1) as u64
    }

    /// The number of rows covered by this rectangle.
    pub fn height(&self) -> u64 {
        (self.top() as i64 - self.bottom() as i64 + 1) as u64
    }

    /// The number of cells covered by this rectangle. Never 0.
    ///
    /// Exact for every rectangle, including one spanning the whole coordinate plane.
    pub fn area(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// Sums the areas of the rectangles.
    ///
    /// Overlap is not accounted for; the caller is responsible for passing disjoint
    /// rectangles.
    pub fn calculate_area<'a, I>(rects: I) -> u128
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        rects.into_iter().map(|r| r.area()).sum()
    }

    /// Returns the cells shared by both rectangles, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x1 = self.left().max(other.left());
        let y1 = self.bottom().max(other.bottom());
        let x2 = self.right().min(other.right());
        let y2 = self.top().min(other.top());
        Self::from_coords(x1, y1, x2, y2).ok()
    }

    /// Subtracts `other` from this rectangle.
    ///
    /// The remainder is split into up to eight disjoint rectangles surrounding the
    /// intersection: the four corner regions and the four regions beside its edges.
    /// If the rectangles do not intersect, the result contains only `self`.
    pub fn remove(&self, other: &Self) -> Pieces {
        let mut res = Pieces::new();
        let Some(int) = self.intersection(other) else {
            res.push(*self);
            return res;
        };
        let (left, right, bottom, top) = (self.left(), self.right(), self.bottom(), self.top());
        let (int_left, int_right, int_bottom, int_top) =
            (int.left(), int.right(), int.bottom(), int.top());
        let above = int_top.checked_add(1);
        let below = int_bottom.checked_sub(1);
        let before = int_left.checked_sub(1);
        let after = int_right.checked_add(1);
        let candidates = [
            // upper left
            piece(Some(left), above, before, Some(top)),
            // upper
            piece(Some(int_left), above, Some(int_right), Some(top)),
            // upper right
            piece(after, above, Some(right), Some(top)),
            // right
            piece(after, Some(int_bottom), Some(right), Some(int_top)),
            // lower right
            piece(after, Some(bottom), Some(right), below),
            // lower
            piece(Some(int_left), Some(bottom), Some(int_right), below),
            // lower left
            piece(Some(left), Some(bottom), before, below),
            // left
            piece(Some(left), Some(int_bottom), before, Some(int_top)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if !res.contains(&candidate) {
                res.push(candidate);
            }
        }
        res
    }

    /// Returns whether the rectangles are disjoint and touch at a pair of corners.
    ///
    /// Two corners touch if they are grid neighbors along one axis, for example the
    /// lower right corner of one rectangle and the lower left corner of a rectangle
    /// directly to its right.
    pub fn aligns_with(&self, other: &Self) -> bool {
        if self.intersection(other).is_some() {
            return false;
        }
        let pairs = [
            (self.lower_left, other.lower_right),
            (self.lower_left, other.upper_left),
            (self.upper_left, other.upper_right),
            (self.upper_left, other.lower_left),
            (self.lower_right, other.lower_left),
            (self.lower_right, other.upper_right),
            (self.upper_right, other.upper_left),
            (self.upper_right, other.lower_right),
        ];
        pairs.into_iter().any(|(a, b)| a.is_adjacent(b))
    }

    pub fn aligns_with_any<'a, I>(&self, rects: I) -> bool
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        rects.into_iter().any(|r| self.aligns_with(r))
    }
}

fn piece(x1: Option<i32>, y1: Option<i32>, x2: Option<i32>, y2: Option<i32>) -> Option<Rectangle> {
    Rectangle::from_coords(x1?, y1?, x2?, y2?).ok()
}
