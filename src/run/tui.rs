use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::ui::app::{App, FormField, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &mut Database) -> Result<()> {
    let mut app = App::new();
    app.refresh_records(db)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            // Overlays swallow one keypress to dismiss.
            if app.show_help {
                app.show_help = false;
                continue;
            }
            if app.show_balance {
                app.show_balance = false;
                continue;
            }
            if !app.error_message.is_empty() {
                app.error_message.clear();
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Editing => handle_editing_input(key, app, db)?,
                InputMode::Confirm => handle_confirm_input(key, app, db)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, db, Screen::Entries)?,
        KeyCode::Char('2') => switch_screen(app, db, Screen::Summary)?,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, db, screens[next])?;
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, db, screens[prev])?;
        }
        KeyCode::Enter if app.screen == Screen::Entries => app.select_row(),
        KeyCode::Esc => {
            app.status_message.clear();
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.record_index, &mut app.record_scroll),
        KeyCode::Char('G') => scroll_to_bottom(
            &mut app.record_index,
            &mut app.record_scroll,
            app.records.len(),
            app.visible_rows,
        ),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('a') => {
            app.clear_entries();
            app.focus = FormField::Name;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('e') => {
            app.focus = FormField::Name;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('s') => app.save_record(db)?,
        KeyCode::Char('u') => app.apply_update(db)?,
        KeyCode::Char('c') => app.clear_entries(),
        KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('t') => {
            app.set_date_today();
            let date = app.date_input.clone();
            app.set_status(format!("Date set to {date}"));
        }
        KeyCode::Char('b') => {
            app.refresh_records(db)?;
            app.show_balance = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            if app.focus == FormField::Limit {
                app.commit_limit();
                app.input_mode = InputMode::Normal;
            } else if app.selected_id.is_some() {
                app.apply_update(db)?;
                app.input_mode = InputMode::Normal;
            } else {
                app.save_record(db)?;
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Esc => {
            if app.focus == FormField::Limit {
                app.commit_limit();
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => {
            if app.focus == FormField::Limit {
                app.commit_limit();
            }
            app.focus = app.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            if app.focus == FormField::Limit {
                app.commit_limit();
            }
            app.focus = app.focus.prev();
        }
        KeyCode::Backspace => {
            app.focused_input_mut().pop();
        }
        KeyCode::Char(c) => {
            app.focused_input_mut().push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.execute_pending(db)?;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_action = None;
            app.confirm_message.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Cancelled");
        }
        _ => {}
    }
    Ok(())
}

fn switch_screen(app: &mut App, db: &mut Database, screen: Screen) -> Result<()> {
    app.screen = screen;
    app.refresh_records(db)
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Entries {
        scroll_down(
            &mut app.record_index,
            &mut app.record_scroll,
            app.records.len(),
            app.visible_rows,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Entries {
        scroll_up(&mut app.record_index, &mut app.record_scroll);
    }
}
