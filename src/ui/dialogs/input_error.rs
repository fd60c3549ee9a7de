use fltk::{
    button::ReturnButton,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::ui::theme::dialog_colors;

pub const INPUT_ERROR_TITLE: &str = "Input Error";

/// Blocking modal showing a validation message verbatim. Enter or OK closes it.
pub fn show_input_error(message: &str, is_dark: bool) {
    let (bg, fg) = dialog_colors(is_dark);

    let mut dialog = Window::default()
        .with_size(320, 120)
        .with_label(INPUT_ERROR_TITLE)
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(bg);

    let mut flex = Flex::new(10, 10, 300, 100, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut text = Frame::default();
    text.set_label(message);
    text.set_label_font(Font::HelveticaBold);
    text.set_label_color(fg);
    text.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut ok_btn = ReturnButton::default().with_label("OK");
    flex.fixed(&ok_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    ok_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
