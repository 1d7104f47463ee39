use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::save_point::SavePoint;
use colored::Colorize;

impl Repository {
    /// Print the chain from HEAD back to the root save point
    ///
    /// Save points are read one at a time; a missing or malformed one ends the
    /// log with an error after everything before it was printed.
    pub fn log(&self) -> anyhow::Result<usize> {
        self.ensure_initialized()?;

        let Some(head) = self.refs().read_head()? else {
            writeln!(self.writer(), "No save points yet.")?;
            return Ok(0);
        };

        let mut shown = 0;
        for step in self.chain().walk_history(Some(head)) {
            let (fingerprint, save_point) = step?;
            self.show_save_point(&fingerprint, &save_point)?;
            shown += 1;
        }

        Ok(shown)
    }

    fn show_save_point(&self, fingerprint: &Fingerprint, save_point: &SavePoint) -> anyhow::Result<()> {
        let files = save_point
            .files()
            .keys()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(self.writer(), "{}", format!("Save point: {fingerprint}").yellow())?;
        writeln!(self.writer(), "Date: {}", save_point.timestamp())?;
        writeln!(self.writer(), "Message: {}", save_point.message())?;
        writeln!(self.writer(), "Files: {files}")?;
        writeln!(self.writer())?;

        Ok(())
    }
}
