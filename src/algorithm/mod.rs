/// Word placement orchestration and generation entry points
pub mod executor;
/// Random letter fill for unused cells
pub mod fill;
/// Candidate crossings with already placed words
pub mod intersection;
/// Placement feasibility checks and grid writes
pub mod placement;
/// Seeded random selection shared across generation steps
pub mod selection;
