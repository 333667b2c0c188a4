//! # In-Memory I/O for Tests
//!
//! [`MockEventStream`] replays a scripted list of events.
//! [`MockRenderStream`] records every render call and paints the text it
//! receives onto a [`ScreenGrid`], so tests can assert on what the user
//! would actually see. Clones of a `MockRenderStream` share one screen.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Replays pre-programmed events
#[derive(Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// A recorded render call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    ClearLine,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

/// Character cells of a virtual terminal
///
/// Text is clipped at the right edge rather than wrapped. ANSI escape
/// sequences are consumed without occupying cells.
#[derive(Debug, Clone)]
pub struct ScreenGrid {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    cursor: (u16, u16),
}

/// Filler for the second cell of a double-width character
const WIDE_TAIL: char = '\0';

impl ScreenGrid {
    pub fn new((width, height): TerminalSize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            cursor: (0, 0),
        }
    }

    pub fn size(&self) -> TerminalSize {
        (self.width, self.height)
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
    }

    fn clear_line_from_cursor(&mut self) {
        let (x, y) = self.cursor;
        if let Some(row) = self.cells.get_mut(y as usize) {
            for cell in row.iter_mut().skip(x as usize) {
                *cell = ' ';
            }
        }
    }

    fn move_to(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn put_text(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                // CSI: ESC '[' params... final byte in '@'..='~'
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                continue;
            }
            if ch == '\r' || ch == '\n' {
                continue;
            }
            self.put_char(ch);
        }
    }

    fn put_char(&mut self, ch: char) {
        let width = ch.width().unwrap_or(0);
        if width == 0 {
            return;
        }
        let (x, y) = self.cursor;
        let Some(row) = self.cells.get_mut(y as usize) else {
            return;
        };
        if let Some(cell) = row.get_mut(x as usize) {
            *cell = ch;
        }
        if width == 2 {
            if let Some(cell) = row.get_mut(x as usize + 1) {
                *cell = WIDE_TAIL;
            }
        }
        self.cursor.0 = x.saturating_add(width as u16);
    }

    /// Visible text of one row with trailing blanks removed
    pub fn row_text(&self, y: u16) -> String {
        self.cells
            .get(y as usize)
            .map(|row| {
                row.iter()
                    .filter(|c| **c != WIDE_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// All rows joined by newlines
    pub fn text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    /// First row containing `needle`
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.height).find(|y| self.row_text(*y).contains(needle))
    }
}

#[derive(Debug)]
struct MockScreenState {
    commands: Vec<RenderCommand>,
    screen: ScreenGrid,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

/// Records render calls and keeps a virtual screen
#[derive(Clone)]
pub struct MockRenderStream {
    state: Arc<Mutex<MockScreenState>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((100, 30))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockScreenState {
                commands: Vec::new(),
                screen: ScreenGrid::new(size),
                cursor_visible: true,
                raw_mode: false,
                alternate_screen: false,
            })),
            terminal_size: size,
        }
    }

    fn state(&self) -> MutexGuard<'_, MockScreenState> {
        // A panicking test thread must not hide the screen from the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.state().commands.push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.state().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state().commands.clear();
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.state().commands.contains(command)
    }

    /// Snapshot of the virtual screen
    pub fn screen(&self) -> ScreenGrid {
        self.state().screen.clone()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.state().cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.state().raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.state().alternate_screen
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf).into_owned();
        let mut state = self.state();
        state.screen.put_text(&text);
        state.commands.push(RenderCommand::Write(text));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut state = self.state();
        state.screen.clear();
        state.commands.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        let mut state = self.state();
        state.screen.clear_line_from_cursor();
        state.commands.push(RenderCommand::ClearLine);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut state = self.state();
        state.screen.move_to(x, y);
        state.commands.push(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut state = self.state();
        state.cursor_visible = false;
        state.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut state = self.state();
        state.cursor_visible = true;
        state.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut state = self.state();
        state.alternate_screen = true;
        state.commands.push(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut state = self.state();
        state.alternate_screen = false;
        state.commands.push(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.state();
        state.raw_mode = true;
        state.commands.push(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut state = self.state();
        state.raw_mode = false;
        state.commands.push(RenderCommand::DisableRawMode);
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
