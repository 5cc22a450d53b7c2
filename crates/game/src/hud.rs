//! HUD boundary: per-frame readouts the session pushes to a presentation
//! sink. Distance is reported in world units; sinks apply the AU display
//! scaling (1 AU = 1000 units).

/// Fuel gauge band, driving the gauge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelBand {
    Low,
    Mid,
    High,
}

impl FuelBand {
    /// Band thresholds: above 40% high, above 15% mid, else low.
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction > 0.40 {
            FuelBand::High
        } else if fraction > 0.15 {
            FuelBand::Mid
        } else {
            FuelBand::Low
        }
    }
}

/// Readouts pushed every flying frame.
#[derive(Debug, Clone, Copy)]
pub struct HudFrame {
    pub speed_fraction: f32,
    pub fuel_fraction: f32,
    pub fuel_band: FuelBand,
    /// Total distance flown, world units.
    pub distance: f64,
    pub fuel_stars: u32,
}

/// Final report pushed once on fuel exhaustion.
#[derive(Debug, Clone, Copy)]
pub struct FinalStats {
    /// Total distance flown, world units.
    pub distance: f64,
    pub fuel_stars: u32,
    /// Chain score, floored for display.
    pub score: u64,
}

/// Presentation sink for HUD readouts.
pub trait HudSink {
    fn frame(&mut self, hud: &HudFrame);
    fn game_over(&mut self, stats: &FinalStats);
}

/// Drops every sample. For tests and warmup runs.
pub struct NullHud;

impl HudSink for NullHud {
    fn frame(&mut self, _hud: &HudFrame) {}
    fn game_over(&mut self, _stats: &FinalStats) {}
}

/// Logs readouts at a throttled cadence (the headless demo's HUD).
pub struct LogHud {
    every: u64,
    frames_seen: u64,
}

impl LogHud {
    /// Log one line every `every` frames.
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames_seen: 0,
        }
    }
}

impl HudSink for LogHud {
    fn frame(&mut self, hud: &HudFrame) {
        self.frames_seen += 1;
        if self.frames_seen % self.every == 0 {
            log::info!(
                "speed {:3.0}%  fuel {:3.0}% ({:?})  {:.1} AU  red stars {}",
                hud.speed_fraction * 100.0,
                hud.fuel_fraction * 100.0,
                hud.fuel_band,
                hud.distance / 1000.0,
                hud.fuel_stars,
            );
        }
    }

    fn game_over(&mut self, stats: &FinalStats) {
        log::info!(
            "out of fuel: {:.1} AU flown, {} red stars, score {}",
            stats.distance / 1000.0,
            stats.fuel_stars,
            stats.score,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(FuelBand::from_fraction(1.0), FuelBand::High);
        assert_eq!(FuelBand::from_fraction(0.41), FuelBand::High);
        assert_eq!(FuelBand::from_fraction(0.40), FuelBand::Mid);
        assert_eq!(FuelBand::from_fraction(0.16), FuelBand::Mid);
        assert_eq!(FuelBand::from_fraction(0.15), FuelBand::Low);
        assert_eq!(FuelBand::from_fraction(0.0), FuelBand::Low);
    }
}
