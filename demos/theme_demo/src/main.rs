// SPDX-License-Identifier: LGPL-3.0-only
use std::collections::HashMap;

use npbrowser::prelude::*;
use npbrowser::toolbar::manager::ToolbarPosition;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ThemeConfig::from_env_or_default();
    let appearance = FixedAppearance::new(InterfaceStyle::Light);
    let mut manager = ThemeManager::with_config(MemoryStore::new(), appearance.clone(), config);

    manager.subscribe(|event| match event {
        ThemeEvent::Changed {
            window_id,
            theme_type,
        } => log::info!("window {} is now {}", window_id, theme_type),
    });

    let main_window = WindowId::new();
    let private_window = WindowId::new();
    manager.register_window(main_window);
    manager.register_window(private_window);

    log::info!("Enabling private browsing in {}", private_window);
    manager.set_private_mode(true, private_window);

    log::info!("System switched to dark appearance");
    appearance.set_style(InterfaceStyle::Dark);
    manager.on_system_appearance_changed();

    log::info!("Switching to automatic brightness");
    manager.set_automatic_brightness(true, 0.4);
    manager.on_brightness_changed(0.8);

    log::info!("Enabling night mode");
    manager.set_night_mode(true);

    let mut positions = HashMap::new();
    positions.insert(main_window, ToolbarPosition::Top);
    positions.insert(private_window, ToolbarPosition::Bottom);

    let middleware = ToolbarMiddleware::new();
    for window in [main_window, private_window] {
        for action in middleware.handle(&ToolbarMiddlewareAction::BrowserDidLoad { window }, &positions) {
            let ToolbarAction::DidLoadToolbars {
                elements,
                display_border,
                ..
            } = action
            else {
                continue;
            };

            let theme = manager.current_theme(window);
            log::info!(
                "window {} toolbar ({}, border: {})",
                window,
                theme.theme_type(),
                display_border
            );
            for element in &elements {
                let mut button = ToolbarButton::new();
                button.configure(element);
                button.apply_theme(&theme);
                log::info!("  {:<10} {}", element.a11y_label, button.foreground_color());
            }

            let mut tabs = TabNumberButton::new();
            tabs.update_tab_count(120);
            tabs.apply_theme(&theme);
            log::info!("  tab count {} in {}", tabs.count_label(), tabs.label_color());
        }
    }

    Ok(())
}
