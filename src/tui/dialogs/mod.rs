//! TUI dialog components

mod confirm;
mod task_form;

pub use confirm::ConfirmDialog;
pub use task_form::{TaskFormData, TaskFormDialog};

use ratatui::prelude::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// Center a fixed-size dialog within `area`, clamping to its bounds.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_centers() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 6);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 6);
    }
}
