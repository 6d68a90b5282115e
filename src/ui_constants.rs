// UI constants extracted from scattered magic numbers across the codebase.

/// Card width in logical pixels (the original deck uses 18rem tiles).
pub const CARD_WIDTH: f32 = 288.0;

/// Card height in logical pixels (27rem in the original deck).
pub const CARD_HEIGHT: f32 = 432.0;

/// Gap between cards in the grid.
pub const CARD_GAP: f32 = 24.0;

/// UI spacing constants
pub mod spacing {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 16.0;
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Border radius of card corners
    pub const ROUNDING: f32 = 12.0;

    /// Rounding of type badges and the stats plaque
    pub const BADGE_ROUNDING: f32 = 10.0;

    /// Height of a type badge
    pub const BADGE_HEIGHT: f32 = 22.0;

    /// Sprite area in normalized card coordinates. The v range spans 44%
    /// of a 432px card, so the u range keeps the artwork roughly square.
    pub const SPRITE_LEFT_U: f32 = 0.17;
    pub const SPRITE_RIGHT_U: f32 = 0.83;
    pub const SPRITE_TOP_V: f32 = 0.04;
    pub const SPRITE_BOTTOM_V: f32 = 0.48;

    /// Normalized vertical anchors of the text content
    pub const NAME_V: f32 = 0.555;
    pub const BADGES_V: f32 = 0.645;
    pub const STATS_TOP_V: f32 = 0.74;
    pub const STATS_ROW_STEP_V: f32 = 0.07;
    pub const BASE_EXP_V: f32 = 0.92;
}

/// Tilt/shine interaction constants
pub mod tilt {
    /// Maximum tilt in degrees, reached at the edges of the bounding box
    pub const MAX_TILT_DEG: f32 = 15.0;

    /// Uniform scale applied to the card plane while hovered
    pub const HOVER_SCALE: f32 = 1.05;

    /// Perspective distance in logical pixels (CSS `perspective(1000px)`)
    pub const PERSPECTIVE: f32 = 1000.0;

    /// Shine radius as a fraction of the card diagonal
    pub const SHINE_RADIUS_FRAC: f32 = 0.4;

    /// Peak shine alpha (rgba(255, 255, 255, 0.2))
    pub const SHINE_ALPHA: u8 = 51;
}

/// Card entry animation constants
pub mod entry {
    /// Per-card stagger delay, seconds
    pub const STAGGER_SECS: f64 = 0.1;

    /// Duration of one card's entry animation, seconds
    pub const DURATION_SECS: f64 = 0.7;

    /// Vertical slide distance at the start of the animation
    pub const SLIDE_PX: f32 = 50.0;
}
