/// Page zoom in half steps. `0` is 100%; the range is -3.0 to +4.5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(i8);

const MIN_HALF_STEPS: i8 = -6;
const MAX_HALF_STEPS: i8 = 9;

// percentages per half step, starting at MIN_HALF_STEPS (same values as Chromium)
const PERCENTAGES: [u32; 16] = [
    25, 33, 50, 67, 75, 90, 100, 110, 125, 150, 175, 200, 250, 300, 400, 500,
];

impl ZoomLevel {
    pub const DEFAULT: ZoomLevel = ZoomLevel(0);

    pub fn from_half_steps(steps: i8) -> Self {
        Self(steps.clamp(MIN_HALF_STEPS, MAX_HALF_STEPS))
    }

    pub fn half_steps(self) -> i8 {
        self.0
    }

    /// The level as the host's zoom factor exponent, e.g. `1.5`.
    pub fn as_level(self) -> f32 {
        f32::from(self.0) / 2.0
    }

    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    pub fn percent(self) -> u32 {
        PERCENTAGES[(self.0 - MIN_HALF_STEPS) as usize]
    }

    pub fn zoomed_in(self) -> Self {
        Self::from_half_steps(self.0.saturating_add(1))
    }

    pub fn zoomed_out(self) -> Self {
        Self::from_half_steps(self.0.saturating_sub(1))
    }
}

/// Entries of the zoom button's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomAction {
    Reset,
    In,
    Out,
}

impl ZoomAction {
    pub const ALL: [ZoomAction; 3] = [ZoomAction::Reset, ZoomAction::In, ZoomAction::Out];

    pub fn label(self) -> &'static str {
        match self {
            ZoomAction::Reset => "Reset Zoom",
            ZoomAction::In => "Zoom In",
            ZoomAction::Out => "Zoom Out",
        }
    }

    pub fn apply(self, level: ZoomLevel) -> ZoomLevel {
        match self {
            ZoomAction::Reset => ZoomLevel::DEFAULT,
            ZoomAction::In => level.zoomed_in(),
            ZoomAction::Out => level.zoomed_out(),
        }
    }
}
