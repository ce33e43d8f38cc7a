//! Per-frame pointer state

/// Pointer buttons the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button
    Left,
    /// Wheel button
    Middle,
    /// Secondary button
    Right,
}

/// Pointer input collected during one frame
///
/// Edge-triggered flags (`*_released`, `moved`) only hold for the frame in
/// which the event arrived; [`PointerState::next_frame`] clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Position in viewport pixels
    pub position: (i32, i32),
    /// Position at the end of the previous frame
    pub last_position: (i32, i32),
    /// Left button went down this frame
    pub left_down: bool,
    /// Left button went up this frame
    pub left_released: bool,
    /// Left button is held since an earlier frame
    pub left_was_down: bool,
    /// Middle button went up this frame
    pub middle_released: bool,
    /// Right button went up this frame
    pub right_released: bool,
    /// Pointer moved this frame
    pub moved: bool,
    /// Relative motion reported this frame
    pub offset: (i32, i32),
}

impl PointerState {
    /// State for the following frame
    ///
    /// Keeps the position and whether the left button is still held.
    #[must_use]
    pub const fn next_frame(&self) -> Self {
        Self {
            position: self.position,
            last_position: self.position,
            left_down: false,
            left_released: false,
            left_was_down: self.left_was_down,
            middle_released: false,
            right_released: false,
            moved: false,
            offset: (0, 0),
        }
    }

    /// Record a button press
    pub const fn press(&mut self, button: PointerButton) {
        if matches!(button, PointerButton::Left) {
            self.left_down = true;
            self.left_was_down = true;
        }
    }

    /// Record a button release
    pub const fn release(&mut self, button: PointerButton) {
        match button {
            PointerButton::Left => {
                self.left_released = true;
                self.left_was_down = false;
            }
            PointerButton::Middle => self.middle_released = true,
            PointerButton::Right => self.right_released = true,
        }
    }

    /// Record relative motion
    pub const fn move_by(&mut self, offset: (i32, i32)) {
        self.moved = true;
        self.offset = offset;
    }

    /// Set the absolute position
    pub const fn move_to(&mut self, position: (i32, i32)) {
        self.position = position;
    }

    /// A frame containing a single left click at `position`
    pub const fn click_at(position: (i32, i32)) -> Self {
        let mut state = Self {
            position,
            last_position: position,
            left_down: false,
            left_released: false,
            left_was_down: false,
            middle_released: false,
            right_released: false,
            moved: false,
            offset: (0, 0),
        };
        state.release(PointerButton::Left);
        state
    }

    /// Whether the left button is being dragged
    pub const fn is_dragging(&self) -> bool {
        self.left_was_down && self.moved
    }
}
