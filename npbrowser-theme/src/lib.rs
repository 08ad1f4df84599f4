// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # npbrowser Theming
//!
//! Per-window theme resolution for the npbrowser shell.
//!
//! ## Overview
//!
//! - **[ThemeType](theme::ThemeType)**: light, dark or private mode
//! - **[ThemePreferences](preferences::ThemePreferences)**: the persisted flags
//! - **[ThemeResolver](resolver::ThemeResolver)**: pure precedence rules
//! - **[ThemeManager](manager::ThemeManager)**: per-window cache plus change notifications
//! - **[ThemeConfig](config::ThemeConfig)**: first-run defaults from env vars and TOML
//!
//! ## Precedence
//!
//! Private mode (per window) beats night mode, which beats the system or
//! saved manual theme. Private mode is never saved, so leaving it restores
//! whatever the window would otherwise show.

/// Contains the [appearance::AppearanceSource] trait.
pub mod appearance;
/// Contains the [config::ThemeConfig] struct.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains theme change events.
pub mod events;
/// Contains the [manager::ThemeManager].
pub mod manager;
/// Contains the [palette::Palette] struct.
pub mod palette;
/// Contains the [preferences::ThemePreferences] snapshot.
pub mod preferences;
/// Contains the [resolver::ThemeResolver].
pub mod resolver;
/// Contains the [roles::ColorRole] enum.
pub mod roles;
/// Contains the [store::PreferenceStore] trait.
pub mod store;
/// Contains the [theme::Theme] and [theme::ThemeType] types.
pub mod theme;
/// Contains the [util::Color] type and color helpers.
pub mod util;
/// Contains the [window::WindowId] type.
pub mod window;
