/// Decimal scale for monetary amounts (currency minor units)
pub const MONEY_SCALE: u32 = 2;

/// Upper bound on backward schedule steps when counting remaining saving
/// periods; a century of daily occurrences. A well-formed schedule reaches
/// "today" long before this.
pub const MAX_SCHEDULE_STEPS: u32 = 36_600;
