//! Account role priorities.
//!
//! Roles are stored as small integers; `1` is the lowest priority and `5`
//! the highest. The bounds must match the `ck_accounts_role` constraint in
//! the initial migration.

/// Lowest accepted role priority.
pub const ROLE_MIN: i16 = 1;

/// Highest accepted role priority.
pub const ROLE_MAX: i16 = 5;

/// Whether `priority` falls inside the accepted role range.
pub fn is_valid_priority(priority: i64) -> bool {
    (i64::from(ROLE_MIN)..=i64::from(ROLE_MAX)).contains(&priority)
}
