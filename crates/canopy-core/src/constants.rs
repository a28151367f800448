/// Canopy system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hop distance assigned to units absent from the expansion distance map.
/// Large enough that the distance penalty dominates every other factor.
pub const DISTANCE_SENTINEL: u32 = 999;

/// Score assigned when a similarity input is missing or degenerate.
pub const MISSING_SIMILARITY: f32 = -1.0;
