// render.rs - Canvas geometry for the grid painter

use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Gap left between a filled cell and its grid lines.
pub const CELL_INSET: f32 = 1.0;

pub fn canvas_size(width: usize, height: usize, cell_size: f32) -> Vec2 {
    vec2(width as f32 * cell_size, height as f32 * cell_size)
}

/// One segment per row boundary followed by one per column boundary.
pub fn grid_lines(origin: Pos2, width: usize, height: usize, cell_size: f32) -> Vec<[Pos2; 2]> {
    let size = canvas_size(width, height, cell_size);
    let rows = (0..=height).map(|i| {
        let y = origin.y + i as f32 * cell_size;
        [pos2(origin.x, y), pos2(origin.x + size.x, y)]
    });
    let cols = (0..=width).map(|j| {
        let x = origin.x + j as f32 * cell_size;
        [pos2(x, origin.y), pos2(x, origin.y + size.y)]
    });
    rows.chain(cols).collect()
}

/// Area filled (alive) or cleared (dead) for the cell at `(x, y)`.
pub fn cell_rect(origin: Pos2, x: usize, y: usize, cell_size: f32) -> Rect {
    let min = origin + vec2(x as f32, y as f32) * cell_size + Vec2::splat(CELL_INSET);
    Rect::from_min_size(min, Vec2::splat(cell_size - 2.0 * CELL_INSET))
}

/// Maps a canvas-local pointer position to a cell. Points outside the grid
/// map to `None`.
pub fn pointer_to_cell(
    local: Vec2,
    cell_size: f32,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    if !(local.x >= 0.0 && local.y >= 0.0) {
        return None;
    }
    let x = (local.x / cell_size).floor() as usize;
    let y = (local.y / cell_size).floor() as usize;
    (x < width && y < height).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_matches_grid() {
        assert_eq!(canvas_size(50, 30, 15.0), vec2(750.0, 450.0));
    }

    #[test]
    fn one_line_per_boundary() {
        let lines = grid_lines(pos2(10.0, 20.0), 4, 3, 10.0);
        assert_eq!(lines.len(), (3 + 1) + (4 + 1));

        // First horizontal and last vertical line
        assert_eq!(lines[0], [pos2(10.0, 20.0), pos2(50.0, 20.0)]);
        assert_eq!(lines[lines.len() - 1], [pos2(50.0, 20.0), pos2(50.0, 50.0)]);
    }

    #[test]
    fn cells_are_inset_by_one_pixel() {
        let rect = cell_rect(pos2(100.0, 50.0), 2, 1, 15.0);
        assert_eq!(rect.min, pos2(131.0, 66.0));
        assert_eq!(rect.max, pos2(144.0, 79.0));
    }

    #[test]
    fn pointer_maps_by_integer_division() {
        assert_eq!(pointer_to_cell(vec2(0.0, 0.0), 15.0, 10, 10), Some((0, 0)));
        assert_eq!(pointer_to_cell(vec2(14.9, 29.9), 15.0, 10, 10), Some((0, 1)));
        assert_eq!(pointer_to_cell(vec2(149.0, 15.0), 15.0, 10, 10), Some((9, 1)));
    }

    #[test]
    fn pointer_outside_grid_is_rejected() {
        assert_eq!(pointer_to_cell(vec2(-0.5, 3.0), 15.0, 10, 10), None);
        assert_eq!(pointer_to_cell(vec2(3.0, -0.5), 15.0, 10, 10), None);
        assert_eq!(pointer_to_cell(vec2(150.0, 3.0), 15.0, 10, 10), None);
        assert_eq!(pointer_to_cell(vec2(3.0, 150.0), 15.0, 10, 10), None);
        assert_eq!(pointer_to_cell(vec2(f32::NAN, 3.0), 15.0, 10, 10), None);
    }
}
