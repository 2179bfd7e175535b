//! Recommendation engine: calorie and macro targets, catalog filtering,
//! scoring, plan assembly, progress and tips.
//!
//! Every function here is a pure transformation of its inputs. Randomness is
//! always passed in as an `Rng` so callers decide between `thread_rng` and a
//! seeded generator.

pub mod calories;
pub mod filter;
pub mod macros;
pub mod model;
pub mod planner;
pub mod progress;
pub mod scorer;
pub mod tips;
