//! Constants shared by the voting ledger crates

// ===== Payment =====

/// Exact fee for one vote: 0.001 of the native unit, in the smallest unit
pub const VOTE_FEE: i128 = 10_000;

// ===== Topic Limits =====

/// Fewest options a topic may offer
pub const MIN_OPTIONS: u32 = 2;

/// Most options a topic may offer
pub const MAX_OPTIONS: u32 = 10;

/// Longest title accepted, in bytes
pub const MAX_TITLE_LEN: u32 = 1024;

/// Largest page returned by `get_topics`
pub const MAX_PAGE_SIZE: u32 = 50;

// ===== Results =====

/// Basis points representing 100%
pub const MAX_BASIS_POINTS: u32 = 10_000;

// ===== Storage TTL (in ledgers) =====
// ~5s per ledger: 17_280 ledgers per day.

/// Day of ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Extend entries once their TTL drops below this
pub const LEDGER_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

/// Extend entries to this TTL
pub const LEDGER_TTL_EXTEND: u32 = 120 * DAY_IN_LEDGERS;
