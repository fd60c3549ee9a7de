use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::ui::theme::dialog_colors;

/// Show About dialog
pub fn show_about_dialog(is_dark: bool) {
    let version = env!("CARGO_PKG_VERSION");
    let (bg, fg) = dialog_colors(is_dark);

    let mut dialog = Window::default()
        .with_size(320, 220)
        .with_label("About Area Calculator")
        .center_screen();
    dialog.make_modal(true);
    dialog.set_color(bg);

    let mut flex = Flex::new(10, 10, 300, 200, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label("Area Calculator");
    title.set_label_size(20);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_color(fg);
    flex.fixed(&title, 36);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(13);
    version_frame.set_label_color(fg);
    flex.fixed(&version_frame, 22);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(&format!(
        "{}\n\nEnter a length and a width greater than zero.\nThe unit is only a label; nothing is converted.",
        env!("CARGO_PKG_DESCRIPTION")
    ));
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(fg);
    desc_frame.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
