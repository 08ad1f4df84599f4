// SPDX-License-Identifier: LGPL-3.0-only

//! # Toolbar Middleware
//!
//! Turns browser and toolbar events into toolbar actions. The middleware does
//! not own a store: it reads what it needs through [ToolbarStateProvider] and
//! returns the actions for the caller to dispatch.

use std::collections::HashMap;

use npbrowser_theme::window::WindowId;

use crate::element::{ToolbarActionType, ToolbarElement, ToolbarGesture};
use crate::manager::{DefaultToolbarManager, ToolbarManager, ToolbarPosition};

/// Events the middleware reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarMiddlewareAction {
    /// The browser finished loading in `window`.
    BrowserDidLoad {
        /// The window.
        window: WindowId,
    },
    /// A toolbar button was used.
    DidTapButton {
        /// The window.
        window: WindowId,
        /// The button, if known.
        button: Option<ToolbarActionType>,
        /// The gesture, if known.
        gesture: Option<ToolbarGesture>,
    },
}

/// Actions emitted by the middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    /// The toolbars of `window` should show `elements`.
    DidLoadToolbars {
        /// The window.
        window: WindowId,
        /// Navigation toolbar elements, in display order.
        elements: Vec<ToolbarElement>,
        /// Whether the navigation toolbar draws its border.
        display_border: bool,
    },
    /// `window` should navigate to the homepage.
    GoToHomepage {
        /// The window.
        window: WindowId,
    },
}

/// Read access to per-window toolbar state.
pub trait ToolbarStateProvider {
    /// The address toolbar position of `window`, if the window has browser state.
    fn toolbar_position(&self, window: WindowId) -> Option<ToolbarPosition>;
}

impl ToolbarStateProvider for HashMap<WindowId, ToolbarPosition> {
    fn toolbar_position(&self, window: WindowId) -> Option<ToolbarPosition> {
        self.get(&window).copied()
    }
}

/// Middleware producing toolbar actions.
pub struct ToolbarMiddleware<M: ToolbarManager = DefaultToolbarManager> {
    manager: M,
}

impl ToolbarMiddleware<DefaultToolbarManager> {
    /// Create a middleware using [DefaultToolbarManager].
    pub fn new() -> Self {
        Self::with_manager(DefaultToolbarManager)
    }
}

impl Default for ToolbarMiddleware<DefaultToolbarManager> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ToolbarManager> ToolbarMiddleware<M> {
    /// Create a middleware with a custom manager.
    pub fn with_manager(manager: M) -> Self {
        Self { manager }
    }

    /// Handle one event, returning the actions to dispatch.
    pub fn handle(&self, action: &ToolbarMiddlewareAction, state: &impl ToolbarStateProvider) -> Vec<ToolbarAction> {
        match action {
            ToolbarMiddlewareAction::BrowserDidLoad { window } => {
                let display_border = self.should_display_navigation_border(state, *window);
                log::debug!(
                    "Loading toolbars for window {} (border: {})",
                    window,
                    display_border
                );
                vec![ToolbarAction::DidLoadToolbars {
                    window: *window,
                    elements: navigation_toolbar_elements(),
                    display_border,
                }]
            },
            ToolbarMiddlewareAction::DidTapButton {
                window,
                button,
                gesture,
            } => {
                let (Some(button), Some(gesture)) = (button, gesture) else {
                    return Vec::new();
                };
                match gesture {
                    ToolbarGesture::Tap => self.handle_tap(*button, *window),
                    ToolbarGesture::LongPress => Vec::new(),
                }
            },
        }
    }

    fn handle_tap(&self, button: ToolbarActionType, window: WindowId) -> Vec<ToolbarAction> {
        match button {
            ToolbarActionType::Home => vec![ToolbarAction::GoToHomepage { window }],
            _ => Vec::new(),
        }
    }

    fn should_display_navigation_border(&self, state: &impl ToolbarStateProvider, window: WindowId) -> bool {
        match state.toolbar_position(window) {
            Some(position) => self.manager.should_display_navigation_border(position),
            None => false,
        }
    }
}

/// The elements of the navigation toolbar, in display order.
///
/// Back and forward start disabled until there is history to move through.
pub fn navigation_toolbar_elements() -> Vec<ToolbarElement> {
    vec![
        ToolbarElement::new(ToolbarActionType::Back, "back", "Back", "TabToolbar.backButton")
            .enabled(false),
        ToolbarElement::new(
            ToolbarActionType::Forward,
            "forward",
            "Forward",
            "TabToolbar.forwardButton",
        )
        .enabled(false),
        ToolbarElement::new(ToolbarActionType::Home, "home", "Home", "TabToolbar.homeButton"),
        ToolbarElement::new(ToolbarActionType::Tabs, "tabTray", "Show Tabs", "TabToolbar.tabsButton"),
        ToolbarElement::new(
            ToolbarActionType::Menu,
            "appMenu",
            "Main Menu",
            "TabToolbar.menuButton",
        ),
    ]
}
