//! Call-to-action button sizing

/// Pixels per label character
pub const BUTTON_WIDTH_PER_CHAR: u32 = 9;

/// Pixels added to the label width
pub const BUTTON_WIDTH_PADDING: u32 = 20;

/// Narrowest button, in pixels
pub const BUTTON_MIN_WIDTH: u32 = 200;

/// Widest button, in pixels
pub const BUTTON_MAX_WIDTH: u32 = 570;

/// Background colour of a button that does not set one
pub const DEFAULT_BUTTON_COLOR: &str = "#3869D4";

/// Label colour of a button that does not set one
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#FFFFFF";

/// Width in pixels of a button showing `label`
pub fn button_width(label: &str) -> u32 {
    let chars = u32::try_from(label.chars().count()).unwrap_or(u32::MAX);
    chars
        .saturating_mul(BUTTON_WIDTH_PER_CHAR)
        .saturating_add(BUTTON_WIDTH_PADDING)
        .clamp(BUTTON_MIN_WIDTH, BUTTON_MAX_WIDTH)
}
