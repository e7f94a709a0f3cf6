use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::env;
use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::time::{Duration, Instant};

use skyburst::audio::TerminalBell;
use skyburst::config::{self, Command, Config};
use skyburst::terminal::TerminalSurface;
use skyburst::{Result, Simulator};

const FIXED_DT: f32 = 1.0 / 60.0;

fn build(config: &Config, cols: u16, rows: u16, muted: bool) -> (TerminalSurface, Simulator) {
    let surface = TerminalSurface::new(cols as usize, rows as usize, config.scale, config.bg_color);
    let (width, height) = surface.virtual_size();
    let simulator = Simulator::new(
        width,
        height,
        config.sim_config(),
        Box::new(fastrand::Rng::new()),
        Box::new(TerminalBell::stdout(muted)),
    );
    (surface, simulator)
}

fn run(config: &Config, stdout: &mut BufWriter<Stdout>) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let (mut surface, mut simulator) = build(config, cols, rows, !config.sound);

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;

    loop {
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(event::KeyModifiers::CONTROL);
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc || ctrl_c {
                        break;
                    }
                    if key.code == KeyCode::Char('s') {
                        let audio = simulator.audio_mut();
                        let muted = !audio.is_muted();
                        audio.set_muted(muted);
                        tracing::debug!(muted, "sound toggled");
                    }
                }
                Event::Resize(cols, rows) => {
                    let muted = simulator.audio_mut().is_muted();
                    (surface, simulator) = build(config, cols, rows, muted);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        accumulator += now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            simulator.frame(&mut surface);
            accumulator -= FIXED_DT;
        }

        surface.render(stdout)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = match config::parse_args(env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            eprintln!("{}", config::usage());
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("{}", config::usage());
            std::process::exit(1);
        }
    };

    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout());

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = run(&config, &mut stdout);
    let restored = restore_terminal(&mut stdout, terminal::disable_raw_mode);

    result?;
    restored?;
    Ok(())
}

/// Leaves the alternate screen, then raw mode even if the first step failed.
/// Returns the first error.
fn restore_terminal(
    out: &mut impl Write,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let screen = execute!(out, Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn raw_mode_is_left_when_screen_restore_fails() {
        let called = Cell::new(false);
        let result = restore_terminal(&mut Closed, || {
            called.set(true);
            Ok(())
        });
        assert!(called.get());
        assert_eq!(result.unwrap_err().to_string(), "closed");
    }

    #[test]
    fn first_error_wins() {
        let result = restore_terminal(&mut Closed, || Err(io::Error::other("raw")));
        assert_eq!(result.unwrap_err().to_string(), "closed");

        let mut out = Vec::new();
        let result = restore_terminal(&mut out, || Err(io::Error::other("raw")));
        assert_eq!(result.unwrap_err().to_string(), "raw");
        assert!(!out.is_empty());
    }

    #[test]
    fn clean_restore() {
        let mut out = Vec::new();
        assert!(restore_terminal(&mut out, || Ok(())).is_ok());
    }
}
