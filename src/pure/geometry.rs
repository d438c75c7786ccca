//! Geometry primitives
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An x,y coordinate pair.
///
/// Coordinates are signed: windows are free to sit partially (or entirely) outside of the
/// visible screen area.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// An absolute x coordinate relative to the root window
    pub x: i32,
    /// An absolute y coordinate relative to the root window
    pub y: i32,
}

impl Point {
    /// Create a new Point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by the position of a [Rect], giving the position of a child window
    /// in the coordinate space of this point.
    pub fn offset_by(&self, r: &Rect) -> Self {
        Self {
            x: self.x + r.x,
            y: self.y + r.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from(raw: (i32, i32)) -> Self {
        let (x, y) = raw;

        Self { x, y }
    }
}

// A Rect converts to its top left corner
impl From<Rect> for Point {
    fn from(r: Rect) -> Self {
        let Rect { x, y, .. } = r;

        Self { x, y }
    }
}

impl From<&Rect> for Point {
    fn from(r: &Rect) -> Self {
        let &Rect { x, y, .. } = r;

        Self { x, y }
    }
}

/// An X window / screen position: top left corner + extent
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Rect {
    /// The x-coordinate of the top left corner of this rect
    pub x: i32,
    /// The y-coordinate of the top left corner of this rect
    pub y: i32,
    /// The width of this rect
    pub w: u32,
    /// The height of this rect
    pub h: u32,
}

impl Rect {
    /// Create a new Rect.
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// The four corners of this [Rect] in [Point] form returned in clockwise
    /// order from the top left corner.
    /// ```
    /// # use xrats::pure::geometry::{Rect, Point};
    /// let r = Rect::new(-10, 0, 100, 200);
    /// let corners = r.corners();
    ///
    /// assert_eq!(
    ///     corners,
    ///     (
    ///         Point { x: -10, y: 0 },
    ///         Point { x: 90, y: 0 },
    ///         Point { x: 90, y: 200 },
    ///         Point { x: -10, y: 200 },
    ///     )
    /// );
    /// ```
    pub fn corners(&self) -> (Point, Point, Point, Point) {
        let &Rect { x, y, w, h } = self;
        let (w, h) = (w as i32, h as i32);

        (
            Point { x, y },
            Point { x: x + w, y },
            Point { x: x + w, y: y + h },
            Point { x, y: y + h },
        )
    }

    /// The same [Rect] with its top left corner moved to `p`.
    pub fn with_position<P>(&self, p: P) -> Self
    where
        P: Into<Point>,
    {
        let Point { x, y } = p.into();

        Self { x, y, ..*self }
    }

    /// Update the position of this [Rect] by specified deltas.
    ///
    /// Unlike window placement within a single screen, positions here are not clamped: a
    /// [Rect] is allowed to move off of the visible area entirely.
    /// ```
    /// # use xrats::pure::geometry::Rect;
    /// let mut r = Rect::new(0, 0, 100, 200);
    ///
    /// r.reposition(20, 30);
    /// assert_eq!(r, Rect::new(20, 30, 100, 200));
    ///
    /// r.reposition(-40, -20);
    /// assert_eq!(r, Rect::new(-20, 10, 100, 200));
    /// ```
    pub fn reposition(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Check whether this Rect contains `p`.
    ///
    /// Points lying on the edges of the Rect are considered to be contained.
    pub fn contains_point<P>(&self, p: P) -> bool
    where
        P: Into<Point>,
    {
        let p = p.into();
        let (x, y) = (self.x as i64, self.y as i64);
        let (px, py) = (p.x as i64, p.y as i64);

        (x..=(x + self.w as i64)).contains(&px) && (y..=(y + self.h as i64)).contains(&py)
    }
}

/// The set of monitor rectangles making up the visible area of the desktop.
///
/// A point is on screen if it is contained in at least one of these rectangles. The set is
/// fixed for the lifetime of the process: changes to the monitor layout are not tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewports {
    rects: Vec<Rect>,
}

impl Viewports {
    /// Create a new Viewports from an ordered list of monitor rectangles.
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Check whether `p` is contained within at least one viewport.
    pub fn contains_point<P>(&self, p: P) -> bool
    where
        P: Into<Point>,
    {
        let p = p.into();

        self.rects.iter().any(|r| r.contains_point(p))
    }

    /// Iterate over the individual viewport rectangles in the order they were reported.
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }
}
