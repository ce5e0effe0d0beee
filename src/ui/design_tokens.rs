// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the snackbar and the demo screen.

## Organization

- **Palette**: Base colors, including the named warning/error colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Snackbar**: Surface insets and text spacing
- **Typography**: Font size scale
- **Radius**: Border radii
- **Motion**: Transition timings

## Examples

```
use iced_snackbar::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let pressed = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors, also the snackbar's default error/warning backgrounds
    pub const ERROR_500: Color = Color::from_rgb(229.0 / 255.0, 57.0 / 255.0, 53.0 / 255.0); // #E53935
    pub const WARNING_500: Color = Color::from_rgb(241.0 / 255.0, 166.0 / 255.0, 32.0 / 255.0); // #F1A620
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Snackbar Surface
// ============================================================================

pub mod snackbar {
    use super::spacing;

    /// Inset above the title line.
    pub const PADDING_TOP: f32 = spacing::MD;

    /// Inset on the leading and trailing edges.
    pub const PADDING_HORIZONTAL: f32 = spacing::LG;

    /// Inset below the last line, before any caller-supplied extra padding.
    pub const PADDING_BOTTOM: f32 = spacing::XL;

    /// Gap between the title and body lines.
    pub const LINE_SPACING: f32 = 3.0;

    /// Upper bound used when revealing the surface during the slide.
    ///
    /// While sliding, the surface is clipped to `reveal * MAX_HEIGHT`; once
    /// settled it takes its natural height.
    pub const MAX_HEIGHT: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Demo screen heading
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Snackbar title and body lines
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Buttons and labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Duration of the slide in and slide out.
    pub const SLIDE: Duration = Duration::from_millis(250);

    /// Tick interval while a slide is running.
    pub const FRAME: Duration = Duration::from_millis(16);

    /// Tick interval while only an auto-dismiss countdown is pending.
    pub const COUNTDOWN: Duration = Duration::from_millis(100);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::OVERLAY_PRESSED > opacity::OVERLAY_MEDIUM && opacity::OVERLAY_PRESSED < 1.0);

    assert!(snackbar::MAX_HEIGHT > snackbar::PADDING_TOP + snackbar::PADDING_BOTTOM);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
};
