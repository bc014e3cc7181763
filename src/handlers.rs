use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::item::LayoutMode;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q') | KeyCode::Esc, _) => {
            app.should_quit = true;
        }
        (KeyCode::Char('h'), _) => app.set_layout(LayoutMode::Horizontal),
        (KeyCode::Char('v'), _) => app.set_layout(LayoutMode::Vertical),
        (KeyCode::Tab, _) => app.toggle_layout(),
        (KeyCode::Left | KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Right | KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('t'), _) => app.toggle_appearance(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::appearance::Appearance;
    use crate::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn keys_drive_app_state() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut app = App::new_with_date(Config::default(), Appearance::Dark, date);

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.layout_mode, LayoutMode::Vertical);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.month, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.appearance, Appearance::Light);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
