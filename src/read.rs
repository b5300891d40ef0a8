extern crate crossterm;
extern crate termcolor;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, stdin, Write};
use termcolor::{Color, StandardStream, WriteColor};
use uva::error::{persistence_error, Result};

/// Prompts for one line, retrying on read errors. End of input is an error.
#[allow(unused_must_use)]
pub fn read_line(stdout: &mut StandardStream, prompt: &str) -> Result<String> {
    let mut ret = String::new();
    loop {
        write!(stdout, "{}", prompt);
        stdout.flush();
        ret.clear();
        match stdin().read_line(&mut ret) {
            Ok(0) => {
                return Err(persistence_error("<stdin>")(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                )))
            }
            Ok(_) => {
                ret.truncate(ret.trim_end().len());
                return Ok(ret);
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e),
        }
        stdout.reset();
    }
}
pub fn read_nonempty(stdout: &mut StandardStream, prompt: &str) -> Result<String> {
    loop {
        let ret = read_line(stdout, prompt)?;
        if !ret.is_empty() {
            return Ok(ret);
        }
    }
}

/// Applies one key press to `buf`; `Some` once the entry is finished.
fn edit(buf: &mut String, key: KeyEvent) -> Option<io::Result<()>> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(Ok(())),
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Err(io::Error::new(io::ErrorKind::Interrupted, "input cancelled")))
        }
        KeyCode::Backspace => {
            buf.pop();
            None
        }
        KeyCode::Char(c) => {
            buf.push(c);
            None
        }
        _ => None,
    }
}
fn read_hidden() -> io::Result<String> {
    let mut ret = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(done) = edit(&mut ret, key) {
                return done.map(|_| ret);
            }
        }
    }
}
/// Prompts without echoing. Falls back to a plain line when stdin is not a terminal.
#[allow(unused_must_use)]
pub fn read_password(stdout: &mut StandardStream, prompt: &str) -> Result<String> {
    if enable_raw_mode().is_err() {
        return read_line(stdout, prompt);
    }
    write!(stdout, "{}", prompt);
    stdout.flush();
    let ret = read_hidden();
    disable_raw_mode();
    writeln!(stdout);
    ret.map_err(persistence_error("<stdin>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(buf: &mut String, code: KeyCode) -> Option<io::Result<()>> {
        edit(buf, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn hidden_entry_handles_editing_keys() {
        let mut buf = String::new();
        for c in "hunter3".chars() {
            assert!(press(&mut buf, KeyCode::Char(c)).is_none());
        }
        assert!(press(&mut buf, KeyCode::Backspace).is_none());
        assert!(press(&mut buf, KeyCode::Char('2')).is_none());
        assert!(matches!(press(&mut buf, KeyCode::Enter), Some(Ok(()))));
        assert_eq!(buf, "hunter2");
    }

    #[test]
    fn ctrl_c_cancels_hidden_entry() {
        let mut buf = String::from("abc");
        let ret = edit(&mut buf, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ret.unwrap().unwrap_err().kind(), io::ErrorKind::Interrupted);
    }
}
