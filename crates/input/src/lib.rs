//! Flight control state: normalized key flags and pointer look deltas.
//!
//! The window loop feeds raw keyboard and pointer events in; the session
//! reads held flags, edge triggers, and the drained look delta once per
//! simulation step.

use glam::Vec2;

/// The discrete flight controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Accelerate,
    Decelerate,
    RollLeft,
    RollRight,
}

impl Control {
    fn index(self) -> usize {
        match self {
            Control::Accelerate => 0,
            Control::Decelerate => 1,
            Control::RollLeft => 2,
            Control::RollRight => 3,
        }
    }
}

/// Per-frame control state for the flight loop.
///
/// A control is "just pressed" only when its key transitions from released
/// to held, so OS key repeat never re-triggers edge actions. Pointer motion
/// accumulates between steps and is drained once per step with
/// [`FlightControls::take_look_delta`]. Edge flags are consumed with
/// [`FlightControls::end_frame`] after the step has read them.
#[derive(Debug, Default)]
pub struct FlightControls {
    /// Controls currently held down.
    held: [bool; 4],
    /// Controls newly pressed since the last `end_frame`.
    pressed: [bool; 4],
    /// Pointer motion accumulated since the last drain.
    accumulated_look: Vec2,
    /// Pause toggle requested since it was last consumed (edge-triggered).
    pause_requested: bool,
    /// Pause key currently held; OS key repeat must not re-toggle.
    pause_held: bool,
}

impl FlightControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a normalized control press/release.
    pub fn process_control(&mut self, control: Control, pressed: bool) {
        let i = control.index();
        if pressed {
            if !self.held[i] {
                self.pressed[i] = true;
            }
            self.held[i] = true;
        } else {
            self.held[i] = false;
        }
    }

    /// Process a pointer motion sample (raw device delta).
    pub fn process_pointer_motion(&mut self, delta: (f64, f64)) {
        self.accumulated_look.x += delta.0 as f32;
        self.accumulated_look.y += delta.1 as f32;
    }

    /// Process a keyboard event using the default bindings
    /// (W/S accelerate/decelerate, A/D roll, Space pause).
    pub fn process_key_event(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();
        match key {
            KeyCode::KeyW => self.process_control(Control::Accelerate, pressed),
            KeyCode::KeyS => self.process_control(Control::Decelerate, pressed),
            KeyCode::KeyA => self.process_control(Control::RollLeft, pressed),
            KeyCode::KeyD => self.process_control(Control::RollRight, pressed),
            KeyCode::Space => {
                if pressed {
                    if !self.pause_held {
                        self.request_pause_toggle();
                    }
                    self.pause_held = true;
                } else {
                    self.pause_held = false;
                }
            }
            _ => {}
        }
    }

    /// Request a pause/resume toggle (edge-triggered).
    pub fn request_pause_toggle(&mut self) {
        self.pause_requested = true;
    }

    /// Check if a control is currently held.
    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Check if a control was newly pressed since the last `end_frame`.
    pub fn just_pressed(&self, control: Control) -> bool {
        self.pressed[control.index()]
    }

    /// True while neither roll key is held; the integrator damps roll
    /// velocity toward zero in that state.
    pub fn roll_released(&self) -> bool {
        !self.held[Control::RollLeft.index()] && !self.held[Control::RollRight.index()]
    }

    /// Drain the accumulated pointer delta for this step.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.accumulated_look)
    }

    /// Consume a pending pause toggle request, if any.
    pub fn take_pause_request(&mut self) -> bool {
        std::mem::take(&mut self.pause_requested)
    }

    /// Consume this step's edge state. Call once per simulation step, after
    /// the integrator has read the `just_pressed` flags.
    pub fn end_frame(&mut self) {
        self.pressed = [false; 4];
    }

    /// Release everything (session restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
