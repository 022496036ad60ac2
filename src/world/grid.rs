use glam::{IVec2, Vec2};

/// Fixed-size occupancy map, row-major (`cells[y][x]`).
///
/// Anything outside `[0, W) × [0, H)` reads as solid, so every ray and every
/// collision probe terminates at the map border without a separate check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid<const W: usize, const H: usize> {
    cells: [[u8; W]; H],
}

impl<const W: usize, const H: usize> TileGrid<W, H> {
    pub const fn new(cells: [[u8; W]; H]) -> Self {
        Self { cells }
    }

    /// Grid with no interior walls; only the implicit border is solid.
    pub const fn empty() -> Self {
        Self {
            cells: [[0; W]; H],
        }
    }

    #[inline(always)]
    pub const fn width(&self) -> i32 {
        W as i32
    }

    #[inline(always)]
    pub const fn height(&self) -> i32 {
        H as i32
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..W as i32).contains(&x) && (0..H as i32).contains(&y)
    }

    /// Occupancy query with the implicit boundary wall.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return true;
        }
        self.cells[y as usize][x as usize] != 0
    }

    #[inline]
    pub fn is_solid_cell(&self, cell: IVec2) -> bool {
        self.is_solid(cell.x, cell.y)
    }

    /// Cell containing the continuous position `pos`.
    #[inline]
    pub fn cell_of(pos: Vec2) -> IVec2 {
        pos.floor().as_ivec2()
    }

    /// Mark a cell; out-of-range writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if self.contains(x, y) {
            self.cells[y as usize][x as usize] = value;
        }
    }
}
