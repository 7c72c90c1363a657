/*!
 * Mock generator helpers for the plainmed test suite
 *
 * These helpers build pre-scripted generators so tests can exercise the
 * full pipeline without external API calls.
 */

pub use plainmed::providers::mock::MockGenerator;

/// Plausible outputs for one full pipeline run, in stage order.
pub const FULL_RUN_SCRIPT: [&str; 4] = [
    "The patient presents sinus tachycardia.",
    "The patient presents with sinus tachycardia.",
    "The patient has a fast heartbeat that starts in the heart's natural pacemaker.",
    "87%",
];

/// A generator scripted with a plausible full pipeline run.
pub fn full_run_generator() -> MockGenerator {
    MockGenerator::scripted(FULL_RUN_SCRIPT)
}

/// A generator that succeeds for `successes` stages and then runs out of
/// script, failing the next stage.
pub fn failing_after(successes: usize) -> MockGenerator {
    MockGenerator::scripted(FULL_RUN_SCRIPT.iter().take(successes).copied())
}
