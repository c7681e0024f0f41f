//! Status line for the scaffolding pipeline
//!
//! On an interactive stderr the current step is redrawn in place; otherwise
//! every step is printed once.

use std::cell::RefCell;
use std::io::{self, Write};

use sprout::domain::ports::{ScaffoldEvent, ScaffoldEventSink};
use unicode_width::UnicodeWidthStr;

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_middle, ColoredText};

pub struct StatusLine<W: Write> {
    out: RefCell<W>,
    region: RefCell<LiveRegion>,
    live: bool,
    color: bool,
    unicode: bool,
    width: usize,
}

impl StatusLine<io::Stderr> {
    pub fn stderr(ui: &UiContext) -> Self {
        Self::with_writer(io::stderr(), ui)
    }
}

impl<W: Write> StatusLine<W> {
    pub fn with_writer(out: W, ui: &UiContext) -> Self {
        Self {
            out: RefCell::new(out),
            region: RefCell::new(LiveRegion::new()),
            live: ui.live,
            color: ui.color,
            unicode: ui.unicode,
            width: usize::from(ui.width),
        }
    }

    /// Erase the status line so other output starts on a clean row.
    pub fn clear(&self) {
        let mut region = self.region.borrow_mut();
        if region.is_empty() {
            return;
        }
        let _ = region.clear(&mut *self.out.borrow_mut());
    }

    fn show(&self, icon: Icon, message: &str) {
        let icon_text = icon.render(self.unicode);
        // One column for the separating space, one spare so the terminal never wraps.
        let budget = self.width.saturating_sub(icon_text.width() + 2).max(1);
        let line = format!(
            "{} {}",
            icon.colored(self.color, self.unicode),
            truncate_middle(message, budget, self.unicode)
        );

        let mut out = self.out.borrow_mut();
        if self.live {
            let _ = self.region.borrow_mut().update(&mut *out, &line);
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }

    /// Print a line that stays on screen above the status line.
    fn persist(&self, icon: Icon, message: &str) {
        self.clear();
        let line = format!(
            "{} {}",
            icon.colored(self.color, self.unicode),
            ColoredText::warning(message).render(self.color)
        );
        let _ = writeln!(self.out.borrow_mut(), "{}", line);
    }
}

impl<W: Write> ScaffoldEventSink for StatusLine<W> {
    fn on_event(&self, event: ScaffoldEvent) {
        match event {
            ScaffoldEvent::Step { message, .. } => self.show(Icon::Progress, &message),
            ScaffoldEvent::Copied { files } => {
                let noun = if files == 1 { "file" } else { "files" };
                self.show(Icon::Progress, &format!("Copied {} {}", files, noun));
            }
            ScaffoldEvent::Warning { message } => self.persist(Icon::Warning, &message),
            ScaffoldEvent::HandOff | ScaffoldEvent::Completed { .. } => self.clear(),
        }
    }
}
