// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! Toolbar state for npbrowser: themed button models and the middleware that
//! turns browser events into toolbar actions.

/// Contains the [button::ToolbarButton] state model.
pub mod button;
/// Contains toolbar element descriptions.
pub mod element;
/// Contains the [manager::ToolbarManager] trait.
pub mod manager;
/// Contains the [middleware::ToolbarMiddleware].
pub mod middleware;
/// Contains the [tab_number::TabNumberButton].
pub mod tab_number;
