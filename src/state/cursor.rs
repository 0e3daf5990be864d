use crate::config::{CURSOR_HOVER_SIZE_PX, CURSOR_SIZE_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub size_px: u32,
    pub highlighted: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size_px: CURSOR_SIZE_PX,
            highlighted: false,
        }
    }
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        if self.x == x && self.y == y {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    pub fn enter_interactive(&mut self) -> bool {
        self.set_highlight(true)
    }

    pub fn leave_interactive(&mut self) -> bool {
        self.set_highlight(false)
    }

    fn set_highlight(&mut self, on: bool) -> bool {
        if self.highlighted == on {
            return false;
        }
        self.highlighted = on;
        self.size_px = if on { CURSOR_HOVER_SIZE_PX } else { CURSOR_SIZE_PX };
        true
    }

    pub fn style(&self) -> String {
        let background = if self.highlighted {
            "rgba(168, 85, 247, 0.2)"
        } else {
            "rgba(168, 85, 247, 0.5)"
        };
        format!(
            "left: {}px; top: {}px; width: {size}px; height: {size}px; background-color: {};",
            self.x,
            self.y,
            background,
            size = self.size_px,
        )
    }
}
