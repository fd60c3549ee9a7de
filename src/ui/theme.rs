use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;

struct Palette {
    window: Color,
    text: Color,
    field: Color,
    field_text: Color,
    selection: Color,
    button: Color,
    menu: Color,
    menu_hover: Color,
}

fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window: Color::from_rgb(25, 25, 25),
            text: Color::from_rgb(220, 220, 220),
            field: Color::from_rgb(30, 30, 30),
            field_text: Color::from_rgb(220, 220, 220),
            selection: Color::from_rgb(70, 70, 100),
            button: Color::from_rgb(50, 50, 50),
            menu: Color::from_rgb(35, 35, 35),
            menu_hover: Color::from_rgb(60, 60, 60),
        }
    } else {
        Palette {
            window: Color::from_rgb(240, 240, 240),
            text: Color::Black,
            field: Color::White,
            field_text: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            button: Color::from_rgb(225, 225, 225),
            menu: Color::from_rgb(240, 240, 240),
            menu_hover: Color::from_rgb(200, 200, 200),
        }
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let p = palette(is_dark);

    widgets.wind.set_color(p.window);
    widgets.wind.set_label_color(p.text);

    widgets.menu.set_color(p.menu);
    widgets.menu.set_text_color(p.text);
    widgets.menu.set_selection_color(p.menu_hover);

    for caption in widgets.captions.iter_mut() {
        caption.set_label_color(p.text);
    }
    widgets.result_frame.set_label_color(p.text);

    for input in [&mut widgets.length_input, &mut widgets.width_input] {
        input.set_color(p.field);
        input.set_text_color(p.field_text);
        input.set_cursor_color(p.field_text);
        input.set_selection_color(p.selection);
    }
    widgets.unit_choice.set_color(p.field);
    widgets.unit_choice.set_text_color(p.field_text);

    for btn in [&mut widgets.calc_btn, &mut widgets.clear_btn] {
        btn.set_color(p.button);
        btn.set_label_color(p.text);
    }

    widgets.wind.redraw();
}

/// Color for dialog windows so they match the main window.
pub fn dialog_colors(is_dark: bool) -> (Color, Color) {
    let p = palette(is_dark);
    (p.window, p.text)
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };

    // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 10 2004+), 19 on 1809-1903
    for attribute in [20, 19] {
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
