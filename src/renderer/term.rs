//! Cell-buffer terminal renderer
//!
//! A flat grid of (glyph, color) cells is rebuilt from `GameState` every
//! frame and flushed with queued crossterm commands, emitting color codes
//! only when the color actually changes. World coordinates (origin at the
//! playfield center, y up) map linearly onto the terminal grid.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{self, Color},
    terminal,
};

use crate::sim::{Backdrop, GamePhase, GameState};

const DAY_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const NIGHT_SKY: Color = Color::Rgb { r: 18, g: 24, b: 58 };
const PIPE: Color = Color::Rgb { r: 100, g: 170, b: 40 };
const AVATAR: Color = Color::Rgb { r: 245, g: 200, b: 66 };
const TEXT: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Map world x (origin at center) to a terminal column.
fn world_to_col(x: f32, screen_width: f32, cols: u16) -> i32 {
    ((x / screen_width + 0.5) * cols as f32).floor() as i32
}

/// Map world y (y up) to a terminal row.
fn world_to_row(y: f32, screen_height: f32, rows: u16) -> i32 {
    ((0.5 - y / screen_height) * rows as f32).floor() as i32
}

/// Owns the terminal for the lifetime of the game
pub struct TermRenderer {
    out: Stdout,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TermRenderer {
    /// Enter raw mode and the alternate screen. `restore` undoes both.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
        )?;
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            cells: Vec::new(),
        })
    }

    /// Hand the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show,
        )?;
        terminal::disable_raw_mode()
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn set(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32 {
            let idx = row as usize * self.cols as usize + col as usize;
            self.cells[idx].ch = ch;
            self.cells[idx].fg = fg;
        }
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i as i32, row, ch, fg);
        }
    }

    fn put_centered(&mut self, row: i32, text: &str, fg: Color) {
        let col = (self.cols as i32 - text.chars().count() as i32) / 2;
        self.put_str(col, row, text, fg);
    }

    /// Rebuild the cell grid from the current state and flush it.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let sky = match state.backdrop {
            Backdrop::Day => DAY_SKY,
            Backdrop::Night => NIGHT_SKY,
        };
        let blank = Cell { ch: ' ', fg: TEXT, bg: sky };
        self.cells.clear();
        self.cells.resize(self.cols as usize * self.rows as usize, blank);

        // Entities leave the view once the run is over.
        if state.phase != GamePhase::GameOver {
            self.draw_obstacles(state);
            self.draw_avatar(state);
        }

        let hud = format!("score {:>3}   best {:>3}", state.score.current, state.score.best);
        self.put_str(1, 0, &hud, TEXT);

        match state.phase {
            GamePhase::Idle => {
                let mid = self.rows as i32 / 2;
                self.put_centered(mid - 1, "G A P W I N G", AVATAR);
                self.put_centered(mid + 1, "press space to start", TEXT);
                self.put_centered(mid + 2, "q quits", TEXT);
            }
            GamePhase::GameOver => {
                self.put_centered(self.rows as i32 / 2, "game over", TEXT);
            }
            GamePhase::Playing => {}
        }

        self.flush()
    }

    fn draw_obstacles(&mut self, state: &GameState) {
        let t = &state.tuning;
        for obstacle in &state.obstacles {
            let left = world_to_col(obstacle.x - t.obstacle_width / 2.0, t.screen_width, self.cols);
            let right = world_to_col(obstacle.x + t.obstacle_width / 2.0, t.screen_width, self.cols);
            let gap_top = world_to_row(
                obstacle.gap_center_y + t.gap_height / 2.0,
                t.screen_height,
                self.rows,
            );
            let gap_bottom = world_to_row(
                obstacle.gap_center_y - t.gap_height / 2.0,
                t.screen_height,
                self.rows,
            );
            for col in left..=right {
                for row in 0..self.rows as i32 {
                    if row < gap_top || row > gap_bottom {
                        self.set(col, row, '\u{2588}', PIPE);
                    }
                }
            }
        }
    }

    fn draw_avatar(&mut self, state: &GameState) {
        let t = &state.tuning;
        let col = world_to_col(state.avatar.pos.x, t.screen_width, self.cols);
        let row = world_to_row(state.avatar.pos.y, t.screen_height, self.rows);
        self.set(col, row, '@', AVATAR);
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut last_fg = None;
        let mut last_bg = None;
        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if last_fg != Some(cell.fg) {
                    queue!(self.out, style::SetForegroundColor(cell.fg))?;
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    queue!(self.out, style::SetBackgroundColor(cell.bg))?;
                    last_bg = Some(cell.bg);
                }
                queue!(self.out, style::Print(cell.ch))?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}
