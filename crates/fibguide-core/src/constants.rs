//! Constants for strategy limits and process exit codes.

/// Largest index the naive recursive strategy accepts by default.
///
/// F(35) takes roughly 30 million calls; each additional index multiplies
/// the work by about 1.6.
pub const DEFAULT_RECURSION_LIMIT: u64 = 35;

/// Ceiling for a configured recursion limit.
///
/// F(45) already takes a few billion calls; nothing above it finishes in
/// reasonable time.
pub const MAX_RECURSION_LIMIT: u64 = 45;

/// Most values the memo table or a sequence prefix will hold.
///
/// Both keep every term in memory, and the total size grows with the
/// square of the count.
pub const MAX_MATERIALIZED_TERMS: u64 = 100_000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used as a test oracle and by the membership fast path.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy hit its bounded-depth guard or a capacity ceiling.
    pub const ERROR_RESOURCE: i32 = 2;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Invalid argument (negative index, count or zero modulus).
    pub const ERROR_INVALID_ARGUMENT: i32 = 5;
}
