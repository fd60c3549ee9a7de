use fltk::prelude::*;

use super::controllers::calculator::{CalculatorForm, RESULT_PLACEHOLDER};
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, ThemeMode};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::input_error::show_input_error;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub widgets: MainWidgets,
    pub settings: AppSettings,
    pub dark_mode: bool,
    /// Text currently shown in the result label
    result_text: String,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings, dark_mode: bool) -> Self {
        Self {
            widgets,
            settings,
            dark_mode,
            result_text: RESULT_PLACEHOLDER.to_string(),
        }
    }

    /// Dispatch one channel message. Returns true when the app should exit.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        tracing::debug!(?msg, "dispatch");
        match msg {
            Message::Calculate => self.calculate(),
            Message::Clear => self.clear(),
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ShowAbout => show_about_dialog(self.dark_mode),
            Message::Quit | Message::WindowClose => {
                self.save_settings();
                return true;
            }
        }
        false
    }

    /// Snapshot the form widgets.
    pub fn read_form(&self) -> CalculatorForm {
        CalculatorForm {
            length: self.widgets.length_input.value(),
            width: self.widgets.width_input.value(),
            unit: self.widgets.unit_choice.value().unwrap_or_default(),
            result: self.result_text.clone(),
        }
    }

    /// Push a form snapshot back into the widgets. The unit box is left alone.
    pub fn write_form(&mut self, form: &CalculatorForm) {
        self.widgets.length_input.set_value(&form.length);
        self.widgets.width_input.set_value(&form.width);
        // '@' starts an FLTK symbol in labels
        self.widgets.result_frame.set_label(&form.result.replace('@', "@@"));
        self.widgets.result_frame.redraw();
        self.result_text = form.result.clone();
    }

    pub fn calculate(&mut self) {
        let mut form = self.read_form();
        match form.calculate() {
            Ok(result) => {
                tracing::info!(area = result.area, unit = ?result.unit, "area calculated");
                self.write_form(&form);
            }
            Err(e) => {
                tracing::info!(reason = %e, "input rejected");
                show_input_error(e.message(), self.dark_mode);
            }
        }
    }

    pub fn clear(&mut self) {
        let mut form = self.read_form();
        form.clear();
        self.write_form(&form);
        let _ = self.widgets.length_input.take_focus();
    }

    pub fn apply_settings(&mut self) {
        apply_theme(&mut self.widgets, self.dark_mode);
    }

    /// Call after the window is shown; the title bar needs a native handle.
    pub fn apply_titlebar_theme(&self) {
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.dark_mode);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        tracing::info!(dark_mode = self.dark_mode, "theme toggled");

        apply_theme(&mut self.widgets, self.dark_mode);
        self.apply_titlebar_theme();
    }

    pub fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }
}
