pub const DEFAULT_MAX_NOTE_BODY_LEN: u64 = 128 * 1024;
pub const DEFAULT_MAX_NOTE_TITLE_LEN: u64 = 256;

pub const MAX_USERNAME_LEN: usize = 64;

// a day
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
// a century, expiries stay far from the end of the representable range
pub const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

// the defaults are taken from the argon2 crate itself
pub const DEFAULT_ARGON2_M_COST: u32 = 19 * 1024;
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
pub const DEFAULT_ARGON2_P_COST: u32 = 1;
pub const DEFAULT_ARGON2_OUTPUT_LEN: Option<usize> = Some(32);

pub const TOKEN_SEGMENT_SEPARATOR: char = '.';
pub const MIN_TOKEN_SECRET_LEN: usize = 32;
pub const GENERATED_TOKEN_SECRET_LEN: usize = 64;

