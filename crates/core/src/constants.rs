use rust_decimal::Decimal;

/// Portfolio value below this raises the low-value alert (strict inequality)
pub const LOW_VALUE_ALERT_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Minimum catalogue search query length, in characters
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
