use npbrowser_theme::appearance::FixedAppearance;
use npbrowser_theme::manager::ThemeManager;
use npbrowser_theme::roles::ColorRole;
use npbrowser_theme::store::MemoryStore;
use npbrowser_theme::theme::InterfaceStyle;
use npbrowser_theme::window::WindowId;
use npbrowser_toolbar::button::ToolbarButton;
use npbrowser_toolbar::element::{ToolbarActionType, ToolbarGesture};
use npbrowser_toolbar::manager::{DefaultToolbarManager, ToolbarManager, ToolbarPosition};
use npbrowser_toolbar::middleware::{ToolbarAction, ToolbarMiddleware, ToolbarMiddlewareAction};
use std::collections::HashMap;

struct AlwaysBorder;

impl ToolbarManager for AlwaysBorder {
    fn should_display_navigation_border(&self, _position: ToolbarPosition) -> bool {
        true
    }
}

#[test]
fn test_browser_load_emits_navigation_elements() {
    let window = WindowId::new();
    let mut state = HashMap::new();
    state.insert(window, ToolbarPosition::Top);

    let actions = ToolbarMiddleware::new().handle(&ToolbarMiddlewareAction::BrowserDidLoad { window }, &state);

    assert_eq!(actions.len(), 1);
    let ToolbarAction::DidLoadToolbars {
        window: loaded,
        elements,
        display_border,
    } = &actions[0]
    else {
        panic!("unexpected action {:?}", actions[0]);
    };
    assert_eq!(*loaded, window);
    assert!(*display_border);

    let summary: Vec<_> = elements.iter().map(|e| (e.action_type, e.is_enabled)).collect();
    assert_eq!(
        summary,
        vec![
            (ToolbarActionType::Back, false),
            (ToolbarActionType::Forward, false),
            (ToolbarActionType::Home, true),
            (ToolbarActionType::Tabs, true),
            (ToolbarActionType::Menu, true),
        ]
    );
}

#[test]
fn test_border_depends_on_position_and_state() {
    let top = WindowId::new();
    let bottom = WindowId::new();
    let unknown = WindowId::new();
    let mut state = HashMap::new();
    state.insert(top, ToolbarPosition::Top);
    state.insert(bottom, ToolbarPosition::Bottom);

    let border = |middleware: &ToolbarMiddleware<DefaultToolbarManager>, window: WindowId| match &middleware
        .handle(&ToolbarMiddlewareAction::BrowserDidLoad { window }, &state)[0]
    {
        ToolbarAction::DidLoadToolbars { display_border, .. } => *display_border,
        other => panic!("unexpected action {:?}", other),
    };

    let middleware = ToolbarMiddleware::new();
    assert!(border(&middleware, top));
    assert!(!border(&middleware, bottom));
    assert!(!border(&middleware, unknown));

    let custom = ToolbarMiddleware::with_manager(AlwaysBorder);
    let actions = custom.handle(&ToolbarMiddlewareAction::BrowserDidLoad { window: bottom }, &state);
    assert!(matches!(
        actions[0],
        ToolbarAction::DidLoadToolbars { display_border: true, .. }
    ));
    let actions = custom.handle(&ToolbarMiddlewareAction::BrowserDidLoad { window: unknown }, &state);
    assert!(matches!(
        actions[0],
        ToolbarAction::DidLoadToolbars { display_border: false, .. }
    ));
}

#[test]
fn test_button_taps() {
    let window = WindowId::new();
    let state: HashMap<WindowId, ToolbarPosition> = HashMap::new();
    let middleware = ToolbarMiddleware::new();
    let tap = |button, gesture| ToolbarMiddlewareAction::DidTapButton {
        window,
        button,
        gesture,
    };

    assert_eq!(
        middleware.handle(&tap(Some(ToolbarActionType::Home), Some(ToolbarGesture::Tap)), &state),
        vec![ToolbarAction::GoToHomepage { window }]
    );
    assert!(middleware
        .handle(&tap(Some(ToolbarActionType::Home), Some(ToolbarGesture::LongPress)), &state)
        .is_empty());
    assert!(middleware
        .handle(&tap(Some(ToolbarActionType::Back), Some(ToolbarGesture::Tap)), &state)
        .is_empty());
    assert!(middleware
        .handle(&tap(None, Some(ToolbarGesture::Tap)), &state)
        .is_empty());
    assert!(middleware
        .handle(&tap(Some(ToolbarActionType::Home), None), &state)
        .is_empty());
}

#[test]
fn test_buttons_rethemed_on_private_mode() {
    let mut manager = ThemeManager::new(MemoryStore::new(), FixedAppearance::new(InterfaceStyle::Light));
    let window = WindowId::new();
    manager.register_window(window);

    let elements = npbrowser_toolbar::middleware::navigation_toolbar_elements();
    let mut home = ToolbarButton::new();
    home.configure(&elements[2]);
    home.apply_theme(&manager.current_theme(window));
    let light_tint = home.foreground_color();

    manager.set_private_mode(true, window);
    home.apply_theme(&manager.current_theme(window));

    assert_ne!(home.foreground_color(), light_tint);
    assert_eq!(
        home.foreground_color(),
        manager.current_theme(window).color(ColorRole::IconPrimary)
    );
}
