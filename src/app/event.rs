use super::mode::Mode;
use super::state::AppState;
use crate::utils::unicode::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_cursor_up(),
        KeyCode::Char('x') | KeyCode::Char(' ') => state.toggle_selected(),
        KeyCode::Char('d') => state.delete_selected(),
        KeyCode::Char('n') | KeyCode::Char('o') => state.open_new_todo_form(),
        KeyCode::Char('r') => state.request_refresh(),
        _ => {}
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => state.cancel_new_todo_form(),
        KeyCode::Enter => state.submit_new_todo(),
        KeyCode::Backspace => {
            if state.edit_cursor_pos > 0 {
                let new_pos = prev_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
                state.edit_buffer.drain(new_pos..state.edit_cursor_pos);
                state.edit_cursor_pos = new_pos;
            }
        }
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
            state.edit_cursor_pos = prev_word_boundary(&state.edit_buffer, state.edit_cursor_pos);
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
            state.edit_cursor_pos = next_word_boundary(&state.edit_buffer, state.edit_cursor_pos);
        }
        KeyCode::Left => {
            if state.edit_cursor_pos > 0 {
                state.edit_cursor_pos = prev_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
            }
        }
        KeyCode::Right => {
            if state.edit_cursor_pos < state.edit_buffer.len() {
                state.edit_cursor_pos = next_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
            }
        }
        KeyCode::Home => state.edit_cursor_pos = 0,
        KeyCode::End => state.edit_cursor_pos = state.edit_buffer.len(),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.edit_cursor_pos = 0;
        }
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.edit_cursor_pos = state.edit_buffer.len();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.edit_buffer.insert(state.edit_cursor_pos, c);
            state.edit_cursor_pos += c.len_utf8();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ApiEvent;
    use crate::client::ApiClient;
    use crate::todo::Todo;
    use crate::ui::theme::Theme;
    use pretty_assertions::assert_eq;

    fn test_state() -> AppState {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        AppState::new(client, Theme::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(KeyEvent::from(code), state).unwrap();
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(KeyEvent::new(code, modifiers), state).unwrap();
    }

    #[test]
    fn test_q_quits() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_j_and_k_move_the_cursor() {
        let mut state = test_state();
        let todos = vec![Todo::new("a"), Todo::new("b"), Todo::new("c")];
        state.handle_api_event(ApiEvent::Listed(Ok(todos)));

        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.cursor_position, 2);

        press(&mut state, KeyCode::Char('k'));
        assert_eq!(state.cursor_position, 1);
    }

    #[test]
    fn test_n_opens_the_form_and_esc_closes_it() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.mode, Mode::Insert);

        press(&mut state, KeyCode::Char('h'));
        press(&mut state, KeyCode::Char('i'));
        assert_eq!(state.edit_buffer, "hi");

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Navigate);
        assert!(state.edit_buffer.is_empty());
    }

    #[test]
    fn test_typing_inserts_at_the_cursor() {
        let mut state = test_state();
        state.open_new_todo_form();

        for c in "buy mlk".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Char('i'));

        assert_eq!(state.edit_buffer, "buy milk");
    }

    #[test]
    fn test_backspace_removes_a_whole_character() {
        let mut state = test_state();
        state.open_new_todo_form();

        for c in "café".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.edit_buffer, "caf");
        assert_eq!(state.edit_cursor_pos, 3);
    }

    #[test]
    fn test_word_jumps() {
        let mut state = test_state();
        state.open_new_todo_form();
        for c in "grab coffee".chars() {
            press(&mut state, KeyCode::Char(c));
        }

        press_with(&mut state, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(state.edit_cursor_pos, 5);
        press_with(&mut state, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(state.edit_cursor_pos, 0);
        press_with(&mut state, KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(state.edit_cursor_pos, 5);
    }

    #[test]
    fn test_home_and_end() {
        let mut state = test_state();
        state.open_new_todo_form();
        for c in "task".chars() {
            press(&mut state, KeyCode::Char(c));
        }

        press(&mut state, KeyCode::Home);
        assert_eq!(state.edit_cursor_pos, 0);
        press(&mut state, KeyCode::End);
        assert_eq!(state.edit_cursor_pos, 4);
    }

    #[test]
    fn test_enter_submits() {
        let mut state = test_state();
        state.open_new_todo_form();
        for c in "task".chars() {
            press(&mut state, KeyCode::Char(c));
        }

        press(&mut state, KeyCode::Enter);
        assert!(state.creating);
        // The buffer survives until the store confirms
        assert_eq!(state.edit_buffer, "task");
    }

    #[test]
    fn test_navigate_keys_ignored_while_form_open() {
        let mut state = test_state();
        let todos = vec![Todo::new("a"), Todo::new("b")];
        state.handle_api_event(ApiEvent::Listed(Ok(todos)));
        state.open_new_todo_form();

        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.edit_buffer, "j");
    }
}
