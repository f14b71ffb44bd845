use super::*;
use tracing::*;

/// A write head bound to a [`Grid`] for one rendering pass.
///
/// Stepping off any edge grows the grid by one row or column first, so the
/// cursor is always on a valid cell. Because the grid keeps its own origin,
/// growth to the left or upwards leaves the cursor's logical position (and
/// every point recorded earlier) unchanged.
pub struct Cursor<'g> {
    grid: &'g mut Grid,
    at: Point,
}

impl<'g> Cursor<'g> {
    /// A cursor at `start`. The start point must lie inside the grid; if it
    /// does not, the grid is grown until it does.
    pub fn new(grid: &'g mut Grid, start: Point) -> Self {
        let at = Point::new(grid.min_x(), grid.min_y());
        let mut cursor = Self { grid, at };
        cursor.move_to(start);
        cursor
    }

    pub fn position(&self) -> Point {
        self.at
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    pub fn move_right(&mut self) {
        if self.at.x + 1 > self.grid.max_x() {
            self.grid.grow_right();
        }
        self.at.x += 1;
    }

    pub fn move_left(&mut self) {
        if self.at.x - 1 < self.grid.min_x() {
            self.grid.grow_left();
        }
        self.at.x -= 1;
    }

    pub fn move_up(&mut self) {
        if self.at.y - 1 < self.grid.min_y() {
            self.grid.grow_up();
        }
        self.at.y -= 1;
    }

    pub fn move_down(&mut self) {
        if self.at.y + 1 > self.grid.max_y() {
            self.grid.grow_down();
        }
        self.at.y += 1;
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    pub fn step_n(&mut self, direction: Direction, steps: usize) {
        for _ in 0..steps {
            self.step(direction);
        }
    }

    /// Walk to `target` one cell at a time, horizontally first, so that any
    /// growth on the way happens exactly as it would for single steps.
    pub fn move_to(&mut self, target: Point) {
        trace!("cursor {:?} -> {:?}", self.at, target);
        while self.at.x < target.x {
            self.move_right();
        }
        while self.at.x > target.x {
            self.move_left();
        }
        while self.at.y < target.y {
            self.move_down();
        }
        while self.at.y > target.y {
            self.move_up();
        }
    }

    pub fn get(&self) -> char {
        self.grid.get(self.at).unwrap_or(self.grid.blank())
    }

    pub fn set(&mut self, ch: char) {
        let written = self.grid.set(self.at, ch);
        debug_assert!(written, "cursor at {:?} is outside the grid", self.at);
    }

    pub fn is_blank(&self) -> bool {
        self.get() == self.grid.blank()
    }

    /// Write `label` left to right, stepping right after every character.
    /// Spaces in the label are skipped over without being written.
    pub fn write_forward(&mut self, label: &str) {
        for ch in label.chars() {
            if ch != ' ' {
                self.set(ch);
            }
            self.move_right();
        }
    }

    /// Write `label` starting here and come back to the first character.
    pub fn stamp(&mut self, label: &str) {
        let start = self.at;
        for (i, ch) in label.chars().enumerate() {
            if i > 0 {
                self.move_right();
            }
            if ch != ' ' {
                self.set(ch);
            }
        }
        self.move_to(start);
    }

    /// Write `label` right to left starting from its last character, so the
    /// finished text reads normally and ends at the starting cell.
    pub fn write_backward(&mut self, label: &str) {
        for ch in label.chars().rev() {
            if ch != ' ' {
                self.set(ch);
            }
            self.move_left();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_past_edges_grows_grid() {
        let mut grid = Grid::new(1, 1, ' ');
        {
            let mut cursor = Cursor::new(&mut grid, Point::new(0, 0));
            cursor.set('C');
            cursor.move_left();
            cursor.move_left();
            cursor.set('x');
            cursor.move_up();
            cursor.set('u');
            cursor.move_to(Point::new(1, 1));
            cursor.set('d');
            assert_eq!(cursor.position(), Point::new(1, 1));
        }
        assert_eq!(grid.length(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(Point::new(0, 0)), Some('C'));
        assert_eq!(grid.rows(), vec!["u   ", "x C ", "   d"]);
    }

    #[test]
    fn test_move_to_returns_to_recorded_point_after_growth() {
        let mut grid = Grid::new(1, 1, ' ');
        let mut cursor = Cursor::new(&mut grid, Point::new(0, 0));
        cursor.set('C');
        let carbon = cursor.position();

        cursor.step_n(Direction::Left, 5);
        cursor.step_n(Direction::Up, 3);
        cursor.move_to(carbon);

        assert_eq!(cursor.get(), 'C');
        assert_eq!(cursor.grid().length(), 6);
        assert_eq!(cursor.grid().height(), 4);
    }

    #[test]
    fn test_write_forward_and_backward() {
        let mut grid = Grid::new(1, 1, '.');
        {
            let mut cursor = Cursor::new(&mut grid, Point::new(0, 0));
            cursor.write_forward("Br");
            assert_eq!(cursor.position(), Point::new(2, 0));
            cursor.move_to(Point::new(-1, 0));
            cursor.write_backward("C l");
        }
        assert_eq!(grid.rows(), vec![".C.lBr."]);
    }
}
