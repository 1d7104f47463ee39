//! Terminal output for `pit log`
//!
//! `log` walks the whole history, so its output is buffered into a minus pager
//! when stdout is a terminal and paging is not disabled with `NO_PAGER`. Every
//! other command writes straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding long command output into the minus pager
///
/// The pager only renders once the command has finished and `minus::page_all`
/// is called with the same pager handle.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only when enabled and a human is looking at stdout
pub fn should_page(enabled: bool) -> bool {
    enabled && io::stdout().is_terminal()
}
