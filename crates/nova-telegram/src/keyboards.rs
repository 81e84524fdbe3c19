// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram keyboards for the menu layouts the bot attaches to messages.

use nova_core::Keyboard;
use nova_knowledge::pages::{INPUT_PLACEHOLDER, MENU_ROWS, PRODUCT_BUTTONS, WEBAPP_BUTTON};
use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    ReplyMarkup, WebAppInfo,
};

/// Persistent reply keyboard: the mini-app launcher (when configured) above
/// the four menu buttons.
pub fn main_menu(webapp: Option<&WebAppInfo>) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = Vec::with_capacity(MENU_ROWS.len() + 1);
    if let Some(info) = webapp {
        rows.push(vec![
            KeyboardButton::new(WEBAPP_BUTTON).request(ButtonRequest::WebApp(info.clone())),
        ]);
    }
    rows.extend(
        MENU_ROWS
            .iter()
            .map(|row| row.iter().map(|&label| KeyboardButton::new(label)).collect()),
    );

    KeyboardMarkup::new(rows)
        .resize_keyboard()
        .input_field_placeholder(INPUT_PLACEHOLDER)
}

/// Inline product picker, one button per row.
pub fn products() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        PRODUCT_BUTTONS
            .iter()
            .map(|&(label, data)| vec![InlineKeyboardButton::callback(label, data)]),
    )
}

pub fn markup(keyboard: Keyboard, webapp: Option<&WebAppInfo>) -> ReplyMarkup {
    match keyboard {
        Keyboard::MainMenu => ReplyMarkup::Keyboard(main_menu(webapp)),
        Keyboard::Products => ReplyMarkup::InlineKeyboard(products()),
    }
}
