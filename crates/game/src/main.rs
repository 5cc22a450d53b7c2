//! stardash: arcade flight through a procedural starfield.
//!
//! Runs the simulation headless: a scripted pilot throttles up, cruises
//! with occasional rolls, and flies until the tank runs dry, logging HUD
//! readouts along the way. A windowed shell drives the same [`Session`]
//! from its display loop and feeds it real input events.

mod config;
mod effects;
mod flight;
mod hud;
mod session;

use anyhow::{Context, Result};
use config::Tuning;
use hud::LogHud;
use input::Control;
use session::{Session, SessionPhase};
use std::path::Path;

/// Display refresh rate the demo simulates.
const DEMO_HZ: f64 = 60.0;
/// Hard stop so an unusually lucky run still terminates (ten minutes).
const MAX_DEMO_FRAMES: u64 = 60 * 60 * 10;

fn main() -> Result<()> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_from(Path::new(&path))
            .with_context(|| format!("loading tunables from {path}"))?,
        None => Tuning::load_or_default(),
    };
    log::info!(
        "{} stars, field radius {}",
        tuning.star_count,
        tuning.field_radius
    );

    let mut session = Session::new(tuning);
    let mut hud = LogHud::new(60);

    let dt = 1.0 / DEMO_HZ;
    let mut now = 0.0;
    session.start(now);
    session
        .controls_mut()
        .process_control(Control::Accelerate, true);

    let mut frame: u64 = 0;
    while session.phase() != SessionPhase::GameOver && frame < MAX_DEMO_FRAMES {
        // Gentle scripted piloting: a roll every few seconds plus a nudge
        // of pointer motion to sweep the view through the field.
        match frame % 600 {
            0 => session
                .controls_mut()
                .process_control(Control::RollLeft, true),
            120 => session
                .controls_mut()
                .process_control(Control::RollLeft, false),
            300 => session
                .controls_mut()
                .process_control(Control::RollRight, true),
            420 => session
                .controls_mut()
                .process_control(Control::RollRight, false),
            _ => {}
        }
        if frame % 240 == 0 {
            session.controls_mut().process_pointer_motion((12.0, -4.0));
        }

        session.advance(now, &mut hud);
        now += dt;
        frame += 1;
    }

    let stats = session.stats();
    log::info!(
        "demo finished after {frame} frames: {:.1} AU, {} red stars, score {}",
        stats.distance_au(),
        stats.fuel_stars_collected,
        stats.total_score as u64,
    );
    Ok(())
}
