//! End-to-end runs: decode or seed, step, render, stop.

use polylife::{
    fill_random, CaptureDisplay, LifeEngine, NullClock, PatternDecoder, RuleTable, RunContext,
    SparseLife, StopReason, Universe, Viewport, LAVA_PALETTE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine(viewport: Viewport) -> LifeEngine<SparseLife> {
    LifeEngine::new(SparseLife::new(RuleTable::conway()), viewport)
}

#[test]
fn empty_universe_reads_stagnant_quickly() {
    let mut engine = engine(Viewport::new(0, 0, 64, 64));
    let mut display = CaptureDisplay::new(64, 64);
    let mut clock = NullClock;
    let outcome = engine
        .run(&mut RunContext::new(&mut display, &mut clock))
        .unwrap();
    assert_eq!(outcome.reason, StopReason::Stagnant);
    // One sample per 12 generations, threshold 10: detection on the 11th.
    assert_eq!(outcome.steps, 132);
    assert_eq!(display.frames_presented() as u32, outcome.steps + 1);
}

#[test]
fn r_pentomino_settles_before_step_limit() {
    let mut engine = engine(Viewport::new(-40, -40, 80, 80));
    PatternDecoder::new(0, 0)
        .decode_str("b2o$2ob$bo!", engine.universe_mut())
        .unwrap();
    let mut display = CaptureDisplay::new(80, 80);
    let mut clock = NullClock;
    let outcome = engine
        .run(&mut RunContext::new(&mut display, &mut clock))
        .unwrap();
    assert_eq!(outcome.reason, StopReason::Stagnant);
    assert!(outcome.steps < 8000, "ran all {} steps", outcome.steps);
    // Something should still be alive in the settled debris.
    let mut population = 0usize;
    engine.universe().for_each_live(&mut |_, _, _| population += 1);
    assert!(population > 0);
}

#[test]
fn decoded_pattern_lands_where_asked() {
    let mut universe = SparseLife::new(RuleTable::conway());
    PatternDecoder::new(-2, 3)
        .decode_str("b2o$2ob$bo!", &mut universe)
        .unwrap();
    let cells: Vec<_> = universe.live_cells().collect();
    assert_eq!(
        cells,
        vec![(-1, 3, 1), (0, 3, 1), (-2, 4, 1), (-1, 4, 1), (-1, 5, 1)]
    );
}

#[test]
fn random_lava_soup_runs_to_completion() {
    let rule = RuleTable::generations(&[4, 5, 6, 7, 8], &[1, 2, 3, 4, 5], 8).unwrap();
    let viewport = Viewport::new(0, 0, 64, 64);
    let mut engine = LifeEngine::new(SparseLife::new(rule), viewport);
    engine.set_color_map(&LAVA_PALETTE);

    let mut rng = StdRng::seed_from_u64(2024);
    fill_random(engine.universe_mut(), viewport, 0.3, &mut rng).unwrap();

    let mut config = engine.config();
    config.max_steps = 150;
    engine.set_config(config);

    let mut display = CaptureDisplay::new(64, 64);
    let mut clock = NullClock;
    let outcome = engine
        .run(&mut RunContext::new(&mut display, &mut clock))
        .unwrap();
    assert!(outcome.steps <= 150);
    assert!(display.frames_presented() > 0);
}

#[test]
fn panning_viewport_slides_over_the_plane() {
    let mut engine = engine(Viewport::new(0, 0, 16, 16));
    // A block sitting still while the camera pans off it.
    for (x, y) in [(8, 8), (9, 8), (8, 9), (9, 9)] {
        engine.universe_mut().set(x, y, 1).unwrap();
    }
    engine.set_pan(2, 0, 1);
    let mut config = engine.config();
    config.max_steps = 20;
    config.stagnant_threshold = u32::MAX;
    engine.set_config(config);

    let mut display = CaptureDisplay::new(16, 16);
    let mut clock = NullClock;
    engine
        .run(&mut RunContext::new(&mut display, &mut clock))
        .unwrap();
    assert_eq!(engine.viewport().x, 40);
    // The block is far behind the camera; the last frame is dark.
    assert!(display.lit_pixels().is_empty());
}
