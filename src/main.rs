//! nPong headless runner
//!
//! Plays an AI-vs-AI demo match on a synthetic 60 Hz clock and reports the
//! result. Usage: `npong [settings.json]`. Set `RUST_LOG=debug` to see every
//! event.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use npong::sim::EventKind;
    use npong::{FrameClock, GameMode, MatchSimulation, Settings};

    /// Simulated match length
    const DEMO_SECONDS: f64 = 60.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("nPong (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    settings.mode = GameMode::Demo;

    let mut sim = MatchSimulation::new(settings);
    let mut clock = FrameClock::new();
    let intents = sim.intents();

    let frames = (DEMO_SECONDS * 1000.0 / FRAME_MS) as u64;
    let mut transits = 0;
    let mut recoveries = 0;
    for frame in 0..=frames {
        let dt = clock.tick(frame as f64 * FRAME_MS);
        for event in sim.update(&intents, dt) {
            log::debug!(
                "frame {frame}: {:?} at ({:.0}, {:.0})",
                event.kind,
                event.pos.x,
                event.pos.y
            );
            match event.kind {
                EventKind::PortalTransit { .. } => transits += 1,
                EventKind::StuckRecovery => recoveries += 1,
                _ => {}
            }
        }
    }

    let state = sim.state();
    println!(
        "Final score {} - {} after {} frames",
        state.score.left, state.score.right, state.frame
    );
    println!(
        "Dimension: {} ({} portal transits, {} stuck recoveries)",
        state.dimension_config().name,
        transits,
        recoveries
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
