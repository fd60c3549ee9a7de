use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Event, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::FloatInput,
    menu::MenuBar,
    misc::InputChoice,
    prelude::*,
    window::Window,
};

use crate::app::controllers::calculator::{RESULT_PLACEHOLDER, UNIT_CHOICES};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

const MENU_HEIGHT: i32 = 30;
const ROW_HEIGHT: i32 = 28;
const CAPTION_WIDTH: i32 = 120;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub captions: Vec<Frame>,
    pub length_input: FloatInput,
    pub width_input: FloatInput,
    pub unit_choice: InputChoice,
    pub calc_btn: Button,
    pub clear_btn: Button,
    pub result_frame: Frame,
}

/// Start a labelled form row. Widgets created before `row.end()` land to the
/// right of the caption.
fn form_row(body: &mut Flex, caption_text: &str) -> (Flex, Frame) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    body.fixed(&row, ROW_HEIGHT);

    let mut caption = Frame::default().with_label(caption_text);
    caption.set_align(Align::Left | Align::Inside);
    row.fixed(&caption, CAPTION_WIDTH);
    (row, caption)
}

fn numeric_input(sender: &Sender<Message>) -> FloatInput {
    let mut input = FloatInput::default();
    // Enter in either numeric field calculates
    input.set_trigger(CallbackTrigger::EnterKeyAlways);
    input.set_callback({
        let s = *sender;
        move |_| s.send(Message::Calculate)
    });
    input
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, "Area Calculator");
    wind.set_xclass("AreaCalculator");

    let mut outer = Flex::new(0, 0, w, h, None);
    outer.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    outer.fixed(&menu, MENU_HEIGHT);

    let mut body = Flex::default();
    body.set_type(FlexType::Column);
    body.set_margin(10);
    body.set_spacing(6);

    let mut captions = Vec::new();

    let (row, caption) = form_row(&mut body, "Length (> 0):");
    let length_input = numeric_input(sender);
    row.end();
    captions.push(caption);

    let (row, caption) = form_row(&mut body, "Width  (> 0):");
    let width_input = numeric_input(sender);
    row.end();
    captions.push(caption);

    let (row, caption) = form_row(&mut body, "Unit (optional):");
    let mut unit_choice = InputChoice::default();
    for unit in UNIT_CHOICES {
        // FLTK skips empty menu labels; a blank entry still trims to "no unit"
        unit_choice.add(if unit.is_empty() { " " } else { unit });
    }
    unit_choice.set_value(&settings.default_unit);
    row.end();
    captions.push(caption);

    let mut calc_btn = Button::default().with_label("Calculate");
    body.fixed(&calc_btn, ROW_HEIGHT);
    calc_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::Calculate)
    });

    let mut clear_btn = Button::default().with_label("Clear");
    body.fixed(&clear_btn, ROW_HEIGHT);
    clear_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::Clear)
    });

    let mut area_caption = Frame::default().with_label("Area:");
    area_caption.set_align(Align::Left | Align::Inside);
    body.fixed(&area_caption, ROW_HEIGHT);
    captions.push(area_caption);

    let mut result_frame = Frame::default().with_label(RESULT_PLACEHOLDER);
    result_frame.set_align(Align::Left | Align::Inside);
    result_frame.set_label_font(Font::HelveticaBold);
    body.fixed(&result_frame, ROW_HEIGHT);

    // Stretch
    Frame::default();

    body.end();
    outer.end();
    wind.resizable(&outer);
    wind.end();

    // Only the close button quits; Escape is swallowed
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut widgets = MainWidgets {
        wind,
        menu,
        captions,
        length_input,
        width_input,
        unit_choice,
        calc_btn,
        clear_btn,
        result_frame,
    };
    apply_font_size(&mut widgets, settings.font_size as i32);
    widgets
}

pub fn apply_font_size(widgets: &mut MainWidgets, size: i32) {
    for caption in widgets.captions.iter_mut() {
        caption.set_label_size(size);
    }
    widgets.length_input.set_text_size(size);
    widgets.width_input.set_text_size(size);
    widgets.unit_choice.set_text_size(size);
    widgets.calc_btn.set_label_size(size);
    widgets.clear_btn.set_label_size(size);
    widgets.result_frame.set_label_size(size + 2);
}
