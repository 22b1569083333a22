//! Demo state: a fully occupied grid plus the navigator driving it

use std::sync::Arc;

use gridnav_core::{Config, ContextId, CoreError, Navigator, Position, Result, StatusElement};

/// Result of running one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the grid
    Redraw,
    /// Print a message instead of the grid
    Message(String),
    Quit,
}

pub struct DemoState {
    navigator: Navigator,
    cells: Vec<Arc<StatusElement>>,
    cols: u32,
    rows: u32,
}

impl DemoState {
    pub fn new(cols: u32, rows: u32, config: Config) -> Result<Self> {
        let count = cols
            .checked_mul(rows)
            .ok_or_else(|| CoreError::Config(format!("grid {}x{} is too large", cols, rows)))?;

        let navigator = Navigator::new(config);
        let mut cells = Vec::with_capacity(count as usize);

        for y in 0..rows {
            for x in 0..cols {
                let cell = Arc::new(StatusElement::new());
                navigator.register(Position::new(x, y), cell.clone())?;
                cells.push(cell);
            }
        }

        // Light up the starting cell
        navigator.restore_position();

        Ok(Self {
            navigator,
            cells,
            cols,
            rows,
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Run one command line
    pub fn execute(&self, line: &str) -> Outcome {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Outcome::Redraw;
        };

        match command {
            "quit" | "q" => Outcome::Quit,
            "clear" => {
                self.navigator.clear_cache();
                Outcome::Redraw
            }
            "state" => match self.navigator.snapshot().to_json() {
                Ok(json) => Outcome::Message(json),
                Err(e) => Outcome::Message(format!("error: {}", e)),
            },
            "goto" => {
                let coords: Vec<u32> = words.filter_map(|w| w.parse().ok()).collect();
                match coords.as_slice() {
                    [x, y] => {
                        self.navigator.update_position(Position::new(*x, *y));
                        Outcome::Redraw
                    }
                    _ => Outcome::Message("usage: goto X Y".to_string()),
                }
            }
            "context" => match words.next().and_then(|w| w.parse::<ContextId>().ok()) {
                Some(id) => {
                    self.navigator.set_active_context(id);
                    self.navigator.restore_position();
                    Outcome::Redraw
                }
                None => Outcome::Message("usage: context N".to_string()),
            },
            token => {
                if !self.navigator.dispatch_token(token) {
                    tracing::debug!(token, "Command had no effect");
                }
                Outcome::Redraw
            }
        }
    }

    /// Text rendering: `[*]` cursor, `[#]` selected, `[@]` both
    pub fn render(&self) -> String {
        let current = self.navigator.current_position();
        let mut out = String::new();

        for y in 0..self.rows {
            for x in 0..self.cols {
                let cell = &self.cells[y as usize * self.cols as usize + x as usize];
                let mark = match (Position::new(x, y) == current, cell.is_selected()) {
                    (true, true) => '@',
                    (true, false) => '*',
                    (false, true) => '#',
                    (false, false) => ' ',
                };
                out.push('[');
                out.push(mark);
                out.push(']');
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "context {} at {}\n",
            self.navigator.active_context(),
            current
        ));
        out
    }
}
