//! Named defaults for every tunable. Kept in one place so the config
//! structs' `Default` impls stay readable.

/// Minimum local similarity for a section to seed itself.
pub const DEFAULT_TAU_LOCAL: f32 = 0.35;
/// Minimum best-child subtree similarity to justify descending.
pub const DEFAULT_TAU_CHILD: f32 = 0.45;
/// Tolerance by which local score may trail the best child and still win.
pub const DEFAULT_MARGIN: f32 = 0.05;
/// Children explored per descent.
pub const DEFAULT_TOP_K_CHILDREN: usize = 2;
/// Root sections explored per query.
pub const DEFAULT_TOP_R_ROOTS: usize = 3;

/// Maximum BFS depth from the nearest seed.
pub const DEFAULT_MAX_DEPTH: u32 = 3;
/// Hard cap on visited nodes during expansion.
pub const DEFAULT_MAX_NODES: usize = 200;

pub const DEFAULT_W_TEXT: f32 = 1.0;
pub const DEFAULT_W_TYPE: f32 = 0.3;
pub const DEFAULT_W_LEVEL: f32 = 0.15;
pub const DEFAULT_W_DIST: f32 = 0.2;

pub const DEFAULT_BONUS_CHUNK: f32 = 0.6;
pub const DEFAULT_BONUS_CAPTION: f32 = 0.2;
pub const DEFAULT_BONUS_SECTION_TITLE: f32 = 0.8;
pub const DEFAULT_BONUS_LIST_ITEM: f32 = 1.0;

/// Ranked text units returned per query.
pub const DEFAULT_TOP_K_UNITS: usize = 20;
