use std::fmt::{Display, Formatter, Result as FmtResult};

/// A position on the drawing surface.
///
/// Points are logical: they are measured from the cell the drawing started
/// in, grow downwards in `y`, and may be negative. Growing the grid in any
/// direction never changes the logical position of a cell already drawn, so
/// a `Point` recorded early stays valid for the rest of the rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `steps` cells away in `direction`.
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset of one step, in logical coordinates (`y` grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A rectangular, growable buffer of characters.
///
/// The grid keeps the storage index of the logical origin internally. Every
/// read and write goes through [`Grid::storage_index`], so callers only ever
/// deal in logical [`Point`]s and never have to shift stored coordinates
/// after growing the grid left or up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    length: usize,
    blank: char,
    /// Storage column of logical `x = 0`.
    origin_x: usize,
    /// Storage row of logical `y = 0`.
    origin_y: usize,
}

impl Grid {
    /// A `height × length` grid filled with `blank`, with the logical origin
    /// at its top-left cell. Both dimensions are clamped to at least one cell.
    pub fn new(height: usize, length: usize, blank: char) -> Self {
        let height = height.max(1);
        let length = length.max(1);
        Self {
            rows: vec![vec![blank; length]; height],
            length,
            blank,
            origin_x: 0,
            origin_y: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn blank(&self) -> char {
        self.blank
    }

    /// Leftmost logical column.
    pub fn min_x(&self) -> i32 {
        -(self.origin_x as i32)
    }

    /// Rightmost logical column.
    pub fn max_x(&self) -> i32 {
        self.length as i32 - 1 - self.origin_x as i32
    }

    /// Topmost logical row.
    pub fn min_y(&self) -> i32 {
        -(self.origin_y as i32)
    }

    /// Bottom logical row.
    pub fn max_y(&self) -> i32 {
        self.rows.len() as i32 - 1 - self.origin_y as i32
    }

    pub fn contains(&self, point: Point) -> bool {
        self.storage_index(point).is_some()
    }

    /// Translate a logical point into `(row, column)` storage indices, or
    /// `None` if the point lies outside the current bounds.
    pub fn storage_index(&self, point: Point) -> Option<(usize, usize)> {
        let column = usize::try_from(point.x + self.origin_x as i32).ok()?;
        let row = usize::try_from(point.y + self.origin_y as i32).ok()?;
        (row < self.rows.len() && column < self.length).then_some((row, column))
    }

    pub fn get(&self, point: Point) -> Option<char> {
        let (row, column) = self.storage_index(point)?;
        Some(self.rows[row][column])
    }

    /// Write `ch` at `point`. Returns `false`, leaving the grid untouched,
    /// when the point is out of bounds.
    pub fn set(&mut self, point: Point, ch: char) -> bool {
        match self.storage_index(point) {
            Some((row, column)) => {
                self.rows[row][column] = ch;
                true
            }
            None => false,
        }
    }

    pub fn grow_right(&mut self) {
        for row in self.rows.iter_mut() {
            row.push(self.blank);
        }
        self.length += 1;
    }

    pub fn grow_left(&mut self) {
        for row in self.rows.iter_mut() {
            row.insert(0, self.blank);
        }
        self.length += 1;
        self.origin_x += 1;
    }

    pub fn grow_up(&mut self) {
        self.rows.insert(0, vec![self.blank; self.length]);
        self.origin_y += 1;
    }

    pub fn grow_down(&mut self) {
        self.rows.push(vec![self.blank; self.length]);
    }

    /// Whether every cell of logical column `x` holds the blank value.
    /// Columns outside the grid count as blank.
    pub fn is_column_blank(&self, x: i32) -> bool {
        match self.storage_index(Point::new(x, self.min_y())) {
            Some((_, column)) => self.rows.iter().all(|row| row[column] == self.blank),
            None => true,
        }
    }

    /// Delete logical column `x` from every row.
    ///
    /// Cells between `x` and the origin keep their logical coordinates;
    /// cells on the far side of `x` shift one column towards the origin.
    /// A grid never drops below one column.
    pub fn remove_column(&mut self, x: i32) -> bool {
        let Some((_, column)) = self.storage_index(Point::new(x, self.min_y())) else {
            return false;
        };
        if self.length == 1 {
            return false;
        }
        for row in self.rows.iter_mut() {
            row.remove(column);
        }
        self.length -= 1;
        if column < self.origin_x {
            self.origin_x -= 1;
        }
        true
    }

    /// Remove all-blank columns from both horizontal edges.
    pub fn trim_blank_edges(&mut self) {
        while self.length > 1 && self.is_column_blank(self.max_x()) {
            self.remove_column(self.max_x());
        }
        while self.length > 1 && self.is_column_blank(self.min_x()) {
            self.remove_column(self.min_x());
        }
    }

    /// Number of cells holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell == ch).count()
    }

    /// The grid as equal-length text rows, top row first.
    pub fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
