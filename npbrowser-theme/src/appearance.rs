// SPDX-License-Identifier: LGPL-3.0-only

//! Platform appearance source.

use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

use crate::theme::InterfaceStyle;

/// Reports what the platform currently looks like.
pub trait AppearanceSource {
    /// The appearance the platform is using.
    fn system_appearance(&self) -> InterfaceStyle;

    /// Current screen brightness in `0.0..=1.0`.
    fn screen_brightness(&self) -> f32;
}

/// An [AppearanceSource] with values set by hand.
///
/// Clones share state, so a test (or a platform bridge) can keep one handle
/// and change the values the manager sees.
#[derive(Debug, Clone)]
pub struct FixedAppearance {
    style: Arc<AtomicU8>,
    brightness: Arc<AtomicU32>,
}

impl FixedAppearance {
    /// Create a source reporting `style` at full brightness.
    pub fn new(style: InterfaceStyle) -> Self {
        let source = Self {
            style: Arc::new(AtomicU8::new(0)),
            brightness: Arc::new(AtomicU32::new(1.0f32.to_bits())),
        };
        source.set_style(style);
        source
    }

    /// Change the reported appearance.
    pub fn set_style(&self, style: InterfaceStyle) {
        let raw = match style {
            InterfaceStyle::Light => 0,
            InterfaceStyle::Dark => 1,
        };
        self.style.store(raw, Ordering::Relaxed);
    }

    /// Change the reported brightness; clamped to `0.0..=1.0`.
    pub fn set_brightness(&self, brightness: f32) {
        let brightness = if brightness.is_nan() { 0.0 } else { brightness.clamp(0.0, 1.0) };
        self.brightness.store(brightness.to_bits(), Ordering::Relaxed);
    }
}

impl Default for FixedAppearance {
    fn default() -> Self {
        Self::new(InterfaceStyle::Light)
    }
}

impl AppearanceSource for FixedAppearance {
    fn system_appearance(&self) -> InterfaceStyle {
        match self.style.load(Ordering::Relaxed) {
            0 => InterfaceStyle::Light,
            _ => InterfaceStyle::Dark,
        }
    }

    fn screen_brightness(&self) -> f32 {
        f32::from_bits(self.brightness.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let source = FixedAppearance::new(InterfaceStyle::Light);
        let handle = source.clone();
        handle.set_style(InterfaceStyle::Dark);
        handle.set_brightness(1.7);

        assert_eq!(source.system_appearance(), InterfaceStyle::Dark);
        assert_eq!(source.screen_brightness(), 1.0);
    }
}
