/// Index into a [`crate::Palette`]
pub type PaletteIndex = u32;

/// Row-major rectangle of palette indices.
///
/// Reads and writes are bounds checked and silently ignore coordinates
/// outside `[0, width) x [0, height)`, so tools never need to clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    background: PaletteIndex,
    cells: Vec<PaletteIndex>,
}

impl Grid {
    /// Creates a grid filled with `background`
    pub fn new(width: usize, height: usize, background: PaletteIndex) -> Self {
        Self {
            width,
            height,
            background,
            cells: vec![background; width * height],
        }
    }

    /// Builds a grid from rows that the caller has already checked to be
    /// `height` rows of `width` cells each.
    pub(crate) fn from_rows(
        width: usize,
        height: usize,
        background: PaletteIndex,
        rows: &[Vec<PaletteIndex>],
    ) -> Self {
        debug_assert_eq!(rows.len(), height);
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height,
            background,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> PaletteIndex {
        self.background
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.offset(x, y).is_some()
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<PaletteIndex> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Writes a cell. Returns `false` (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: PaletteIndex) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Reallocates to the new size, keeping the overlapping top-left region.
    /// New cells get the background index; cells that fall outside are lost.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }

        let mut cells = vec![self.background; width * height];
        let keep_w = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = y * self.width;
            let dst = y * width;
            cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    /// Resets every cell to the background index
    pub fn clear(&mut self) {
        self.fill_all(self.background);
    }

    pub fn fill_all(&mut self, value: PaletteIndex) {
        self.cells.fill(value);
    }

    /// Replaces every cell equal to `from` with `to`, returning how many changed
    pub fn replace_all(&mut self, from: PaletteIndex, to: PaletteIndex) -> usize {
        if from == to {
            return 0;
        }
        let mut count = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == from) {
            *cell = to;
            count += 1;
        }
        count
    }

    /// Wrap-around rotation: rows move up by `rows` and every row moves left
    /// by `cols`. Negative offsets rotate the other way.
    pub fn rotate(&mut self, rows: i32, cols: i32) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let row_shift = i64::from(rows).rem_euclid(self.height as i64) as usize;
        let col_shift = i64::from(cols).rem_euclid(self.width as i64) as usize;

        self.cells.rotate_left(row_shift * self.width);
        if col_shift != 0 {
            for row in self.cells.chunks_mut(self.width) {
                row.rotate_left(col_shift);
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PaletteIndex]> + '_ {
        // chunks() panics on a zero width, and a zero-width grid has no cells anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn to_rows(&self) -> Vec<Vec<PaletteIndex>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.rows().map(<[PaletteIndex]>::to_vec).collect()
    }

    pub(crate) fn cells(&self) -> &[PaletteIndex] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> Grid {
        let rows: Vec<Vec<PaletteIndex>> = (0..height)
            .map(|y| (0..width).map(|x| (y * width + x) as PaletteIndex).collect())
            .collect();
        Grid::from_rows(width, height, 0, &rows)
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(3, 2, 0);
        assert!(grid.set(2, 1, 7));
        assert_eq!(grid.get(2, 1), Some(7));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut grid = Grid::new(3, 2, 0);
        assert!(!grid.set(3, 0, 7));
        assert!(!grid.set(-1, 0, 7));
        assert!(!grid.set(0, 2, 7));
        assert_eq!(grid.get(-1, -1), None);
        assert!(grid.cells().iter().all(|c| *c == 0));
    }

    #[test]
    fn resize_keeps_top_left() {
        let mut grid = numbered(3, 3);
        grid.resize(2, 4);
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 1], vec![3, 4], vec![6, 7], vec![0, 0]]
        );

        grid.resize(4, 1);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0, 0]]);
    }

    #[test]
    fn rotate_wraps_rows_and_columns() {
        let mut grid = numbered(3, 2);
        grid.rotate(1, 1);
        assert_eq!(grid.to_rows(), vec![vec![4, 5, 3], vec![1, 2, 0]]);

        let mut grid = numbered(3, 2);
        grid.rotate(-1, -1);
        assert_eq!(grid.to_rows(), vec![vec![5, 3, 4], vec![2, 0, 1]]);
    }

    #[test]
    fn full_rotation_is_identity() {
        let mut grid = numbered(4, 3);
        let before = grid.clone();
        grid.rotate(3, 4);
        assert_eq!(grid, before);
    }

    #[test]
    fn replace_all_counts_changes() {
        let mut grid = Grid::new(2, 2, 0);
        grid.set(0, 0, 3);
        assert_eq!(grid.replace_all(0, 5), 3);
        assert_eq!(grid.to_rows(), vec![vec![3, 5], vec![5, 5]]);
        assert_eq!(grid.replace_all(5, 5), 0);
    }
}
