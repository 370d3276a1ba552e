// Layout geometry - rotation, screen gap and stacking arrangement
//
// Pure derived-dimension queries for the presentation layer. Layout
// parameters shape the reported dimensions only; pixel content is never
// affected.

use serde::{Deserialize, Serialize};

use super::buffers::NATIVE_HEIGHT;

/// How the two emulated screens are arranged on the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenLayout {
    /// One screen above the other (the handheld's natural arrangement);
    /// the only mode that carries a seam gap
    Stacked,

    /// Screens side by side, no seam
    SideBySide,
}

/// Presentation-facing placement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Rotation in degrees; recognized values are 0, 90, 180 and 270
    pub rotation: u32,

    /// Seam between the stacked screens, in native-scale pixels
    pub screen_gap: u32,

    /// Screen arrangement
    pub layout: ScreenLayout,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            rotation: 0,
            screen_gap: 0,
            layout: ScreenLayout::Stacked,
        }
    }
}

impl LayoutParams {
    /// Output size after rotation
    ///
    /// Width and height trade places at 90 and 270 degrees. An
    /// unrecognized rotation value answers (0, 0) rather than faulting.
    pub fn rotated_size(&self, size: (u32, u32)) -> (u32, u32) {
        let (width, height) = size;
        match self.rotation {
            0 | 180 => (width, height),
            90 | 270 => (height, width),
            _ => (0, 0),
        }
    }

    /// Rotated size including the scaled screen gap
    ///
    /// The gap rides on whichever axis carries the seam between the two
    /// stacked screens: the height at 0/180, the rotated width at 90/270.
    pub fn rotated_size_with_gap(&self, size: (u32, u32)) -> (u32, u32) {
        let (width, height) = size;
        let gap = self.scaled_gap(height);
        match self.rotation {
            0 | 180 => (width, height + gap),
            90 | 270 => (height + gap, width),
            _ => (0, 0),
        }
    }

    /// Screen gap scaled from native units to the current output height
    ///
    /// Zero whenever the layout mode carries no seam.
    pub fn scaled_gap(&self, output_height: u32) -> u32 {
        match self.layout {
            ScreenLayout::Stacked => self.screen_gap * output_height / NATIVE_HEIGHT as u32,
            ScreenLayout::SideBySide => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(rotation: u32, screen_gap: u32) -> LayoutParams {
        LayoutParams {
            rotation,
            screen_gap,
            layout: ScreenLayout::Stacked,
        }
    }

    #[test]
    fn test_rotated_size_law() {
        let size = (512, 768);
        assert_eq!(stacked(0, 0).rotated_size(size), (512, 768));
        assert_eq!(stacked(180, 0).rotated_size(size), (512, 768));
        assert_eq!(stacked(90, 0).rotated_size(size), (768, 512));
        assert_eq!(stacked(270, 0).rotated_size(size), (768, 512));
    }

    #[test]
    fn test_unrecognized_rotation_answers_zero() {
        assert_eq!(stacked(45, 0).rotated_size((512, 768)), (0, 0));
        assert_eq!(stacked(360, 16).rotated_size_with_gap((512, 768)), (0, 0));
    }

    #[test]
    fn test_gap_scales_with_output_height() {
        // Native height: gap passes through unscaled
        assert_eq!(stacked(0, 90).scaled_gap(384), 90);
        // 2x output: gap doubles
        assert_eq!(stacked(0, 90).scaled_gap(768), 180);
        // 1.5x output with truncating integer math
        assert_eq!(stacked(0, 45).scaled_gap(576), 67);
    }

    #[test]
    fn test_gap_lands_on_the_seam_axis() {
        let size = (512, 768);
        assert_eq!(stacked(0, 48).rotated_size_with_gap(size), (512, 768 + 96));
        assert_eq!(stacked(180, 48).rotated_size_with_gap(size), (512, 768 + 96));
        assert_eq!(stacked(90, 48).rotated_size_with_gap(size), (768 + 96, 512));
        assert_eq!(stacked(270, 48).rotated_size_with_gap(size), (768 + 96, 512));
    }

    #[test]
    fn test_side_by_side_has_no_gap() {
        let params = LayoutParams {
            rotation: 0,
            screen_gap: 90,
            layout: ScreenLayout::SideBySide,
        };
        assert_eq!(params.scaled_gap(768), 0);
        assert_eq!(params.rotated_size_with_gap((512, 768)), (512, 768));
    }
}
