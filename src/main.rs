use fltk::{app, prelude::*};

use area_calculator::app::domain::messages::Message;
use area_calculator::app::domain::settings::AppSettings;
use area_calculator::app::infrastructure::logging;
use area_calculator::app::state::AppState;
use area_calculator::ui::main_window::build_main_window;
use area_calculator::ui::menu::build_menu;

fn main() {
    // Held until exit so buffered log lines get flushed
    let log_guard = logging::init();
    if let Some(guard) = &log_guard {
        tracing::info!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?settings, "starting");

    let mut widgets = build_main_window(&settings, &sender);
    let dark_mode = settings.theme_mode.is_dark();
    build_menu(&mut widgets.menu, &sender, dark_mode);

    let mut state = AppState::new(widgets, settings, dark_mode);
    state.apply_settings();

    state.widgets.wind.show();
    state.apply_titlebar_theme();
    let _ = state.widgets.length_input.take_focus();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle_message(msg) {
                break;
            }
        }
    }

    tracing::info!("exiting");
}
