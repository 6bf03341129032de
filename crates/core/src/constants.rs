/// Fallback category label for funds without classification data
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Decimal precision for weight calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
