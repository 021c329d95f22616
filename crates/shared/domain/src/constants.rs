//! Domain-level constants.
//!
//! These constants define password hashing defaults and formats.

// =============================================================================
// Password Hashing
// =============================================================================

/// Default Argon2 memory cost in KiB (19 MiB)
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

/// Default Argon2 number of passes
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default Argon2 degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

/// Leading marker shared by bcrypt modular-crypt hashes (`$2a$`, `$2b$`, `$2y$`)
pub const BCRYPT_HASH_PREFIX: &str = "$2";
