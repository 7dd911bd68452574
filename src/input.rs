//! Input handling: event normalisation, coordinate conversion, click targets.

use ratzilla::ratatui::layout::Rect;

/// Input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A character key.
    Key(char),
    Enter,
    Backspace,
    /// A click/tap on a registered target, identified by its action ID.
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-row click target at the given row within an area.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Split `area` into a `cols`-wide grid and register one target per cell,
    /// row-major. Returns the cell rects in the same order as `action_ids`.
    ///
    /// The last column absorbs any leftover width so the grid has no gaps.
    pub fn register_grid_targets(&mut self, area: Rect, cols: u16, action_ids: &[u16]) -> Vec<Rect> {
        if cols == 0 || action_ids.is_empty() || area.width == 0 || area.height == 0 {
            return Vec::new();
        }
        let rows = (action_ids.len() as u16).div_ceil(cols);
        let cell_w = area.width / cols;
        let cell_h = (area.height / rows).max(1);
        let mut cells = Vec::with_capacity(action_ids.len());

        for (i, &action_id) in action_ids.iter().enumerate() {
            let col = i as u16 % cols;
            let row = i as u16 / cols;
            let y = area.y + row * cell_h;
            if y >= area.y + area.height {
                break;
            }
            let x = area.x + col * cell_w;
            let w = if col == cols - 1 {
                area.x + area.width - x
            } else {
                cell_w
            };
            let h = cell_h.min(area.y + area.height - y);
            let rect = Rect::new(x, y, w, h);
            self.add_click_target(rect, action_id);
            cells.push(rect);
        }
        cells
    }

    /// Hit-test a terminal cell; later-registered (topmost) targets win.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate (relative to the grid's top edge) to a row.
///
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        None
    } else {
        Some(row)
    }
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(20, 5), Some(1));
    }

    #[test]
    fn clear_removes_targets() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert_eq!(cs.hit_test(0, 1), None);
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99);
        cs.add_row_target(area, 15, 98);
        cs.add_row_target(area, 12, 97);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(97));
    }

    // ── register_grid_targets ──────────────────────────────

    #[test]
    fn keypad_grid_three_by_four() {
        let mut cs = ClickState::new();
        let ids: Vec<u16> = (0..12).collect();
        let cells = cs.register_grid_targets(Rect::new(0, 0, 31, 8), 3, &ids);

        assert_eq!(cells.len(), 12);
        // 31 / 3 = 10 wide; last column absorbs the extra col.
        assert_eq!(cells[0], Rect::new(0, 0, 10, 2));
        assert_eq!(cells[2], Rect::new(20, 0, 11, 2));
        assert_eq!(cells[11], Rect::new(20, 6, 11, 2));

        assert_eq!(cs.hit_test(0, 0), Some(0));
        assert_eq!(cs.hit_test(15, 3), Some(4));
        assert_eq!(cs.hit_test(30, 7), Some(11));
    }

    #[test]
    fn grid_too_short_drops_overflow_rows() {
        let mut cs = ClickState::new();
        let ids: Vec<u16> = (0..12).collect();
        // 4 rows wanted, only 2 available → cell_h = 1, rows 2..3 dropped.
        let cells = cs.register_grid_targets(Rect::new(0, 0, 30, 2), 3, &ids);
        assert_eq!(cells.len(), 6);
        assert_eq!(cs.hit_test(0, 2), None);
    }

    #[test]
    fn grid_degenerate_inputs() {
        let mut cs = ClickState::new();
        assert!(cs.register_grid_targets(Rect::new(0, 0, 30, 4), 0, &[1]).is_empty());
        assert!(cs.register_grid_targets(Rect::new(0, 0, 30, 4), 3, &[]).is_empty());
        assert!(cs.register_grid_targets(Rect::new(0, 0, 0, 4), 3, &[1]).is_empty());
        assert!(cs.targets.is_empty());
    }

    // ── layout / pixel conversion ──────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
    }

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    #[test]
    fn tap_on_keypad_cell_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 40;
        cs.terminal_rows = 30;
        let ids: Vec<u16> = (100..112).collect();
        cs.register_grid_targets(Rect::new(4, 20, 30, 8), 3, &ids);

        // 10px wide, 15px tall cells.
        let (grid_w, grid_h) = (400.0, 450.0);
        let col = pixel_x_to_col(4.0 * 10.0 + 15.0, grid_w, cs.terminal_cols).unwrap();
        let row = pixel_y_to_row(22.0 * 15.0 + 7.0, grid_h, cs.terminal_rows).unwrap();
        assert_eq!((col, row), (5, 22));
        assert_eq!(cs.hit_test(col, row), Some(103));
    }
}
