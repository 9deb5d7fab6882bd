//! Integer permission levels.
//!
//! Lower value means greater privilege. Level 0 is the reserved
//! administrator level; registration assigns level 1. A protected operation
//! declares the maximum (least-privileged) level permitted to call it, so
//! the qualification check is `caller_level <= required_level`.

/// Reserved administrator level — the most privileged rank.
pub const ADMIN: i32 = 0;

/// Default level assigned at registration.
pub const MEMBER: i32 = 1;

/// Whether a caller at `caller_level` qualifies for an operation that
/// declares `required_level` as its threshold.
pub fn permits(caller_level: i32, required_level: i32) -> bool {
    caller_level <= required_level
}

/// Whether the given level is the reserved administrator level.
pub fn is_admin(level: i32) -> bool {
    level == ADMIN
}
