//! Presentation-side timed effects. The simulation requests an effect and
//! this queue owns its lifetime, advanced by the same frame step — no
//! timers that could race the next frame's read.

/// Fullscreen flash raised on every collection.
#[derive(Debug, Clone, Copy)]
struct Flash {
    opacity: f32,
    remaining: f32,
}

const FLASH_OPACITY: f32 = 0.5;
const FLASH_DURATION: f32 = 0.1;

/// Fixed-lifetime visual effects owned by the presentation boundary.
#[derive(Debug, Default)]
pub struct VisualEffects {
    flash: Option<Flash>,
}

impl VisualEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the collection flash for its fixed duration. Re-triggering
    /// restarts the timer.
    pub fn trigger_flash(&mut self) {
        self.flash = Some(Flash {
            opacity: FLASH_OPACITY,
            remaining: FLASH_DURATION,
        });
    }

    /// Expire effects that ran out this frame.
    pub fn update(&mut self, dt: f32) {
        if let Some(flash) = &mut self.flash {
            flash.remaining -= dt;
            if flash.remaining <= 0.0 {
                self.flash = None;
            }
        }
    }

    /// Current flash opacity for the renderer; zero when idle.
    pub fn flash_opacity(&self) -> f32 {
        self.flash.map_or(0.0, |f| f.opacity)
    }

    pub fn reset(&mut self) {
        self.flash = None;
    }
}
