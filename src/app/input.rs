//! Terminal event handling for the App.
//!
//! Keys go to the page, the newsletter field or the contact form depending
//! on [`Focus`]. Mouse events drive hit areas, carousel hover and swipes.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::forms::{ContactField, FormField};
use crate::ui::interaction::handle_click_action;

use super::navigation::SCROLL_STEP;
use super::{App, Focus, Page};

/// Text editing keys shared by every input.
///
/// Returns true when the field changed or the cursor moved.
fn edit_field(field: &mut FormField, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.insert_char(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => {
            field.move_left();
            true
        }
        KeyCode::Right => {
            field.move_right();
            true
        }
        KeyCode::Home => {
            field.move_home();
            true
        }
        KeyCode::End => {
            field.move_end();
            true
        }
        _ => false,
    }
}

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Resize(width, height) => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.mark_dirty();
            }
            Event::FocusGained => self.set_terminal_focus(true),
            Event::FocusLost => self.set_terminal_focus(false),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Page => self.handle_page_key(key, now),
            Focus::Newsletter => self.handle_newsletter_key(key),
            Focus::Contact => self.handle_contact_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(page) = Page::from_index(index) {
                    self.navigate_to(page, now);
                }
            }
            KeyCode::Tab => self.next_page(now),
            KeyCode::BackTab => self.prev_page(now),
            KeyCode::Left | KeyCode::Char('h') => self.carousel_previous(now),
            KeyCode::Right | KeyCode::Char('l') => self.carousel_next(now),
            KeyCode::Char(' ') => self.toggle_autoplay(now),
            KeyCode::Char('m') => self.toggle_reduced_motion(),
            KeyCode::Char('i') => self.cycle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(SCROLL_STEP * 4),
            KeyCode::PageUp => self.scroll_up(SCROLL_STEP * 4),
            KeyCode::Enter if self.page == Page::Contact => {
                if self.contact.is_submitted() {
                    self.send_another();
                } else {
                    self.focus = Focus::Contact;
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn handle_newsletter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.release_focus(),
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Enter => self.submit_newsletter(),
            _ => {
                if edit_field(&mut self.newsletter.email, &key) {
                    self.newsletter.touch();
                    self.mark_dirty();
                }
            }
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        if self.contact.is_submitted() {
            match key.code {
                KeyCode::Enter => self.send_another(),
                KeyCode::Esc => self.release_focus(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.release_focus();
                return;
            }
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Enter => match self.contact.focus() {
                ContactField::Submit => {
                    self.submit_contact_form();
                    return;
                }
                ContactField::Country => self.contact.next_country(),
                _ => self.contact.focus_next(),
            },
            _ => {
                if self.contact.focus() == ContactField::Country {
                    match key.code {
                        KeyCode::Left => self.contact.prev_country(),
                        KeyCode::Right | KeyCode::Char(' ') => self.contact.next_country(),
                        _ => return,
                    }
                } else {
                    let Some(field) = self.contact.focused_field_mut() else {
                        return;
                    };
                    if !edit_field(field, &key) {
                        return;
                    }
                    self.contact.touch();
                }
            }
        }
        self.mark_dirty();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        self.pointer = Some((column, row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.carousel_pointer_down(column, row);
                if let Some(action) = self.hit_registry.hit_test(column, row) {
                    handle_click_action(self, action, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel_pointer_up(column, now);
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if self.hit_registry.update_hover(column, row) {
                    self.mark_dirty();
                }
                self.update_carousel_hover(column, row, now);
            }
            MouseEventKind::ScrollDown => self.scroll_down(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_up(SCROLL_STEP),
            _ => {}
        }
    }

    /// Bracketed paste goes into the focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace(['\r', '\n'], " ");
        match self.focus {
            Focus::Newsletter => {
                self.newsletter.email.insert_str(text.trim());
                self.newsletter.touch();
            }
            Focus::Contact => {
                let Some(field) = self.contact.focused_field_mut() else {
                    return;
                };
                field.insert_str(&text);
                self.contact.touch();
            }
            Focus::Page => return,
        }
        self.mark_dirty();
    }
}
