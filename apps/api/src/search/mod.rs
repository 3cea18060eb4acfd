// Evidence Gatherer: query templating → Parallel.ai search → normalization.
// Provider failure degrades to an empty evidence sequence, never an error.

pub mod client;
pub mod gather;
pub mod handlers;
pub mod normalize;
pub mod queries;
