use crate::config::DocumentConfig;
use serde::{Deserialize, Serialize};

/// Visual settings shared by every constructor. Sizes are half-points and
/// spacing is in twentieths of a point, matching office document units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub font_family: String,
    pub body_size: u16,
    pub heading_size: u16,
    pub title_size: u16,
    pub small_size: u16,
    pub paragraph_spacing: u16,
    pub indent_step: u16,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::with_body_size("Times New Roman", 24)
    }
}

impl StyleProfile {
    pub fn with_body_size(font_family: impl Into<String>, body_size: u16) -> Self {
        let body_size = body_size.max(12);
        Self {
            font_family: font_family.into(),
            body_size,
            heading_size: body_size + 2,
            title_size: body_size + 4,
            small_size: body_size.saturating_sub(4).max(12),
            paragraph_spacing: 120,
            indent_step: 720,
        }
    }

    pub fn indent(&self, level: u16) -> u16 {
        self.indent_step.saturating_mul(level)
    }
}

impl From<&DocumentConfig> for StyleProfile {
    fn from(config: &DocumentConfig) -> Self {
        Self::with_body_size(config.font_family.clone(), config.font_size_points * 2)
    }
}
