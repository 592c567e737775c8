//! Terminal Board: A split-flap board rendered into the terminal.
//!
//! Every terminal character is one flap. Resize the window to reflow the
//! board; the flaps catch up on their own.
//!
//! Keys: `Enter` next message, `h` cycle horizontal alignment,
//! `v` cycle vertical alignment, `+`/`-` change scale, `q` or `Esc` quit.
//!
//! Logs go to stderr, so redirect them when enabling a filter:
//!
//! ```text
//! RUST_LOG=flapboard=debug cargo run --example terminal_board 2>board.log
//! ```

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use flapboard::{
    Alphabet, BoardConfig, DisplayContent, Flipboard, GridEvent, GridGeometry,
    HorizontalAlignment, Size, Symbol, VerticalAlignment,
};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const MESSAGES: &[&str] = &[
    "WELCOME ABOARD",
    "FLIGHT 815 TO SYDNEY\nNOW BOARDING GATE 23",
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
    "DEPARTURES\n\nLISBON 0915 ON TIME\nHELSINKI 0940 DELAYED\nOSAKA 1005 CANCELLED",
];

/// Rows kept free at the bottom for the status line.
const STATUS_ROWS: u16 = 1;

struct Demo {
    message: usize,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    scale: f64,
}

impl Demo {
    fn content(&self) -> DisplayContent {
        DisplayContent::new(MESSAGES[self.message])
            .with_alignment(self.horizontal, self.vertical)
            .with_scale(self.scale)
    }

    fn status(&self, geometry: &GridGeometry) -> String {
        format!(
            " {geometry} | {:?}/{:?} | scale {:.0} | Enter h v + - q ",
            self.horizontal, self.vertical, self.scale
        )
    }
}

fn canvas_for(width: u16, height: u16) -> Size {
    Size::from((width, height.saturating_sub(STATUS_ROWS)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Single-width glyphs only; every flap is one terminal column.
    let config = BoardConfig {
        base_cell_size: Size::new(1.0, 1.0),
        base_spacing: 0.0,
        alphabet: Alphabet::from_graphemes(" ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789")?,
        ..BoardConfig::default()
    };
    let board = Flipboard::with_config(config)?;
    let events = board.subscribe()?;

    let mut demo = Demo {
        message: 0,
        horizontal: HorizontalAlignment::Center,
        vertical: VerticalAlignment::Center,
        scale: 1.0,
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = run(&board, &events, &mut demo, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    board.shutdown();
    result
}

fn run(
    board: &Flipboard,
    events: &crossbeam_channel::Receiver<GridEvent>,
    demo: &mut Demo,
    stdout: &mut io::Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = terminal::size()?;
    board.set_canvas_size(canvas_for(width, height))?;
    board.set_content(demo.content())?;

    let mut geometry = GridGeometry::default();
    let mut shown: Vec<Symbol> = Vec::new();
    let mut status_row = height.saturating_sub(STATUS_ROWS);

    loop {
        if event::poll(Duration::from_millis(10))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => demo.message = (demo.message + 1) % MESSAGES.len(),
                    KeyCode::Char('h') => {
                        demo.horizontal = match demo.horizontal {
                            HorizontalAlignment::Left => HorizontalAlignment::Center,
                            HorizontalAlignment::Center => HorizontalAlignment::Right,
                            HorizontalAlignment::Right => HorizontalAlignment::Left,
                        };
                    }
                    KeyCode::Char('v') => {
                        demo.vertical = match demo.vertical {
                            VerticalAlignment::Top => VerticalAlignment::Center,
                            VerticalAlignment::Center => VerticalAlignment::Bottom,
                            VerticalAlignment::Bottom => VerticalAlignment::Top,
                        };
                    }
                    KeyCode::Char('+') => demo.scale = (demo.scale + 1.0).min(4.0),
                    KeyCode::Char('-') => demo.scale = (demo.scale - 1.0).max(1.0),
                    _ => continue,
                },
                Event::Resize(width, height) => {
                    status_row = height.saturating_sub(STATUS_ROWS);
                    board.set_canvas_size(canvas_for(width, height))?;
                    continue;
                }
                _ => continue,
            }
            board.set_content(demo.content())?;
        }

        let mut dirty = false;
        for event in events.try_iter() {
            dirty = true;
            match event {
                GridEvent::GeometryChanged(next) => {
                    // Cells keep their symbols by index; only their positions move.
                    geometry = next;
                    shown.resize(geometry.capacity(), Symbol::SPACE);
                    queue!(stdout, Clear(ClearType::All))?;
                    for (index, &symbol) in shown.iter().enumerate() {
                        draw(stdout, &geometry, index, symbol)?;
                    }
                }
                GridEvent::CellUpdated { index, symbol } => {
                    if let Some(slot) = shown.get_mut(index) {
                        *slot = symbol;
                    }
                    draw(stdout, &geometry, index, symbol)?;
                }
            }
        }

        if dirty {
            queue!(
                stdout,
                MoveTo(0, status_row),
                Clear(ClearType::CurrentLine),
                Print(demo.status(&geometry).reverse())
            )?;
            stdout.flush()?;
        }
    }
}

/// Draw one flap. Anything that is not exactly one column wide would
/// push its neighbours out of place, so it is shown as `?`.
fn draw(
    stdout: &mut io::Stdout,
    geometry: &GridGeometry,
    index: usize,
    symbol: Symbol,
) -> io::Result<()> {
    let Some((column, row)) = geometry.coords_of(index) else {
        return Ok(());
    };
    let (Ok(x), Ok(y)) = (u16::try_from(column), u16::try_from(row)) else {
        return Ok(());
    };
    let glyph = if symbol.display_width() == 1 {
        symbol.as_str()
    } else {
        "?"
    };
    queue!(stdout, MoveTo(x, y), Print(glyph.bold()))
}
