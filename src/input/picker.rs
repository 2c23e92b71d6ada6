// Pointer picking over the instanced grid.
//
// Converts a cursor position to normalized device coordinates, casts a ray
// from the camera through that point, and intersects it against every cell's
// cube. Instance slot k is grid cell k, so resolving a hit back to the grid
// is plain array indexing. Picking only reads; it never touches simulation
// state.

use glam::Vec3;

use crate::simulation::grid::{CellGrid, CELL_SIZE};
use crate::ui::camera::{CameraController, FOV_Y};

/// Hover report delivered to the host: grid coordinates of the hit cell plus
/// the raw screen position of the pointer for tooltip placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEvent {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
}

/// Host-supplied hover consumer. `None` means "no hover".
pub type HoverCallback = Box<dyn FnMut(Option<HoverEvent>)>;

/// Resolves pointer positions to grid cells.
pub struct PointerPicker {
    hovered: Option<usize>,
}

impl PointerPicker {
    pub fn new() -> Self {
        Self { hovered: None }
    }

    /// Index of the currently hovered cell, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Resolve a pointer position against the grid. Returns the hover result
    /// for this event; a miss clears any previous hover.
    pub fn pick(
        &mut self,
        grid: &CellGrid,
        camera: &CameraController,
        screen_x: f32,
        screen_y: f32,
        width: f32,
        height: f32,
    ) -> Option<HoverEvent> {
        let (ray_origin, ray_direction) =
            screen_to_ray(camera, screen_x, screen_y, width, height);

        let half = CELL_SIZE * 0.5;
        let mut best: Option<(usize, f32)> = None;
        for cell in grid.cells() {
            if let Some(t) = ray_cube_intersection(ray_origin, ray_direction, cell.position, half)
            {
                if best.is_none_or(|(_, best_t)| t < best_t) {
                    best = Some((cell.index, t));
                }
            }
        }

        // A hit outside the arena (stale instance id) counts as a miss.
        match best.and_then(|(index, _)| grid.cell(index)) {
            Some(cell) => {
                self.hovered = Some(cell.index);
                Some(HoverEvent {
                    row: cell.row,
                    col: cell.col,
                    x: screen_x,
                    y: screen_y,
                })
            }
            None => {
                self.hovered = None;
                None
            }
        }
    }

    /// Forget the current hover (pointer left the surface).
    pub fn clear(&mut self) {
        self.hovered = None;
    }
}

impl Default for PointerPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert screen coordinates to a world-space ray from the camera.
fn screen_to_ray(
    camera: &CameraController,
    screen_x: f32,
    screen_y: f32,
    width: f32,
    height: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * screen_x / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * screen_y / height);

    let aspect = width / height;
    let tan_half_fov = (FOV_Y / 2.0).tan();

    let ray_view = Vec3::new(
        ndc_x * aspect * tan_half_fov,
        ndc_y * tan_half_fov,
        -1.0,
    )
    .normalize();

    let ray_direction = camera.rotation * ray_view;
    let ray_origin = camera.position();

    (ray_origin, ray_direction)
}

/// Slab test against an axis-aligned cube. Returns the entry distance along
/// the ray, or `None` when the ray misses or the cube is behind the origin.
fn ray_cube_intersection(origin: Vec3, direction: Vec3, center: Vec3, half: f32) -> Option<f32> {
    let inv = direction.recip();
    let lo = (center - Vec3::splat(half) - origin) * inv;
    let hi = (center + Vec3::splat(half) - origin) * inv;

    let t_min = lo.min(hi).max_element();
    let t_max = lo.max(hi).min_element();

    if t_max >= t_min.max(0.0) {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::grid::GridConfig;

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 800.0;

    fn setup() -> (CellGrid, CameraController) {
        let grid = CellGrid::new(GridConfig { rows: 4, cols: 4 }).unwrap();
        (grid, CameraController::new(5.0))
    }

    /// Screen position a world point projects to, inverse of the pick ray.
    fn project(camera: &CameraController, world: Vec3) -> (f32, f32) {
        let clip = camera.view_proj(WIDTH / HEIGHT) * world.extend(1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        (
            (ndc_x + 1.0) / 2.0 * WIDTH,
            (1.0 - ndc_y) / 2.0 * HEIGHT,
        )
    }

    #[test]
    fn ray_through_cell_center_reports_its_row_and_col() {
        let (grid, camera) = setup();
        let mut picker = PointerPicker::new();

        for &index in &[0usize, 5, 10, 15] {
            let cell = grid.cell(index).unwrap();
            let (sx, sy) = project(&camera, cell.position);
            let hover = picker
                .pick(&grid, &camera, sx, sy, WIDTH, HEIGHT)
                .unwrap_or_else(|| panic!("expected hit on cell {index}"));
            assert_eq!(hover.row, index / 4);
            assert_eq!(hover.col, index % 4);
            assert_eq!(hover.x, sx);
            assert_eq!(hover.y, sy);
            assert_eq!(picker.hovered(), Some(index));
        }
    }

    #[test]
    fn ray_between_cells_misses() {
        let (grid, camera) = setup();
        let mut picker = PointerPicker::new();

        // Midpoint between two adjacent cell centers lies in the gap
        // (spacing 0.18 vs cube size 0.15).
        let a = grid.cell(0).unwrap().position;
        let b = grid.cell(1).unwrap().position;
        let (sx, sy) = project(&camera, (a + b) / 2.0);
        assert_eq!(picker.pick(&grid, &camera, sx, sy, WIDTH, HEIGHT), None);
    }

    #[test]
    fn miss_clears_previous_hover() {
        let (grid, camera) = setup();
        let mut picker = PointerPicker::new();

        let cell = grid.cell(6).unwrap();
        let (sx, sy) = project(&camera, cell.position);
        assert!(picker.pick(&grid, &camera, sx, sy, WIDTH, HEIGHT).is_some());

        // Top-left corner of the window looks past the grid entirely.
        assert_eq!(picker.pick(&grid, &camera, 0.0, 0.0, WIDTH, HEIGHT), None);
        assert_eq!(picker.hovered(), None);
    }

    #[test]
    fn pointer_leave_clears_hover() {
        let (grid, camera) = setup();
        let mut picker = PointerPicker::new();

        let cell = grid.cell(9).unwrap();
        let (sx, sy) = project(&camera, cell.position);
        assert!(picker.pick(&grid, &camera, sx, sy, WIDTH, HEIGHT).is_some());

        picker.clear();
        assert_eq!(picker.hovered(), None);
    }

    #[test]
    fn nearest_cube_wins_along_the_ray() {
        let (grid, camera) = setup();
        // A ray straight down the camera axis passes near the grid center;
        // the closest intersected cube must be reported, not an arbitrary one.
        let mut picker = PointerPicker::new();
        let cell = grid.cell(10).unwrap();
        let (sx, sy) = project(&camera, cell.position);
        let hover = picker.pick(&grid, &camera, sx, sy, WIDTH, HEIGHT).unwrap();
        assert_eq!((hover.row, hover.col), (2, 2));
    }
}
