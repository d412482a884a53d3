use std::{io::{self, Stdout, Write, stdout}, thread, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

use crate::screen::Frame;

/// Everything the game needs from the console.
pub trait Terminal {
    fn setup(&mut self) -> io::Result<()>;
    fn restore(&mut self) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
    /// Draws a whole frame at the top-left corner and flushes once.
    fn blit(&mut self, frame: &Frame) -> io::Result<()>;
    /// Returns the next pending key press without waiting for one.
    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>>;
    fn read_key_blocking(&mut self) -> io::Result<KeyEvent>;
    /// Shows a centered box of text on top of whatever is drawn until `hide_message`.
    fn show_message(&mut self, lines: &[&str]) -> io::Result<()>;
    fn hide_message(&mut self) -> io::Result<()>;
    fn sleep(&mut self, interval: Duration);
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn setup(&mut self) -> io::Result<()> {
        (**self).setup()
    }

    fn restore(&mut self) -> io::Result<()> {
        (**self).restore()
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn blit(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).blit(frame)
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        (**self).poll_key()
    }

    fn read_key_blocking(&mut self) -> io::Result<KeyEvent> {
        (**self).read_key_blocking()
    }

    fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        (**self).show_message(lines)
    }

    fn hide_message(&mut self) -> io::Result<()> {
        (**self).hide_message()
    }

    fn sleep(&mut self, interval: Duration) {
        (**self).sleep(interval)
    }
}

pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    last_frame: Option<Frame>,
    current_msg: Option<Message>,
}

struct Message {
    lines: Vec<String>,
    top_left: (u16, u16),
    width: u16,
    height: u16,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), last_frame: None, current_msg: None })
    }

    fn queue_frame(&mut self, frame: &Frame) -> io::Result<()> {
        for y in 0..frame.height() {
            queue!(self.stdout, cursor::MoveTo(0, y))?;

            let mut color = None;
            for cell in frame.row(y) {
                if color != Some(cell.color) {
                    queue!(self.stdout, style::SetForegroundColor(cell.color))?;
                    color = Some(cell.color);
                }
                queue!(self.stdout, style::Print(cell.glyph))?;
            }
        }

        queue!(self.stdout, style::ResetColor)
    }

    fn queue_message(&mut self, msg: &Message) -> io::Result<()> {
        let (left, top) = msg.top_left;
        let blank = " ".repeat(msg.width as usize);

        queue!(self.stdout, style::SetForegroundColor(Color::White))?;

        // Print the top and bottom empty lines
        for y in [top, top + msg.height - 1] {
            queue!(self.stdout, cursor::MoveTo(left, y), style::Print(&blank))?;
        }

        for (i, line) in msg.lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg.width as usize);
            queue!(self.stdout, cursor::MoveTo(left, top + i as u16 + 1), style::Print(padded_line))?;
        }

        queue!(self.stdout, style::ResetColor)
    }

    // Messages are centered on the game frame when one is on screen
    fn message_area(&self) -> (u16, u16) {
        match &self.last_frame {
            Some(frame) => (frame.width(), frame.height()),
            None => (self.width, self.height),
        }
    }

    fn set_cursor_visibility(&mut self, option: bool) -> io::Result<()> {
        if option {
            execute!(self.stdout, cursor::Show, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
        }
    }
}

impl Terminal for TermManager {
    fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.set_cursor_visibility(false)
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        self.set_cursor_visibility(true)?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.last_frame = None;
        self.current_msg = None;
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn blit(&mut self, frame: &Frame) -> io::Result<()> {
        self.queue_frame(frame)?;

        if let Some(msg) = self.current_msg.take() {
            let res = self.queue_message(&msg);
            self.current_msg = Some(msg);
            res?;
        }

        self.last_frame = Some(frame.clone());
        self.stdout.flush()
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyEvent>> {
        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Some(ev));
                }
            }
        }

        Ok(None)
    }

    fn read_key_blocking(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(ev);
                }
            }
        }
    }

    fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        if self.current_msg.is_some() {
            self.hide_message()?;
        }

        let (area_width, area_height) = self.message_area();
        let height = lines.len() as u16 + 2;
        let width = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) as u16 + 2;
        let top_left = (
            (area_width / 2).saturating_sub(width / 2),
            (area_height / 2).saturating_sub(height / 2),
        );

        let msg = Message { lines: lines.iter().map(|l| l.to_string()).collect(), top_left, width, height };
        self.queue_message(&msg)?;
        self.current_msg = Some(msg);
        self.stdout.flush()
    }

    fn hide_message(&mut self) -> io::Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Redraw what was under the box
        match self.last_frame.take() {
            Some(frame) => {
                let res = self.queue_frame(&frame);
                self.last_frame = Some(frame);
                res?;
            }
            None => {
                let blank = " ".repeat(msg.width as usize);
                for y in msg.top_left.1..msg.top_left.1 + msg.height {
                    queue!(self.stdout, cursor::MoveTo(msg.top_left.0, y), style::Print(&blank))?;
                }
            }
        }

        self.stdout.flush()
    }

    fn sleep(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}
