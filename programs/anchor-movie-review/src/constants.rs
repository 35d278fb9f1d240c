// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Reward mint PDA seed. The mint is its own mint authority.
pub const MINT_SEED: &[u8] = b"mint";

// ══════════════════════════════════════════════════════════════════════════════
// CONTENT LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Maximum title length in bytes.
/// The title is used verbatim as a PDA seed, and seeds are capped at 32 bytes.
pub const MAX_TITLE_LENGTH: usize = 32;

/// Maximum description length in bytes
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

// ══════════════════════════════════════════════════════════════════════════════
// REWARD POLICY
// ══════════════════════════════════════════════════════════════════════════════

/// Decimals of the reward mint
pub const REWARD_MINT_DECIMALS: u8 = 6;

/// Whole tokens minted for every new review.
/// Scaled by the mint decimals: 10 * 10^6 = 10_000_000 base units.
pub const REWARD_TOKENS: u64 = 10;
