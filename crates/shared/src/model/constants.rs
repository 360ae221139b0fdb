pub const USERNAME_MIN_LENGTH: usize = 1;
pub const USERNAME_MAX_LENGTH: usize = 20;

pub const DESCRIPTION_MIN_LENGTH: usize = 1;
pub const DESCRIPTION_MAX_LENGTH: usize = 20;

/// Minutes
pub const DURATION_MIN: i64 = 1;
