use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::ChangeKind;
use crate::artifacts::status::status_info::{FileSet, StatusInfo};

impl Repository {
    pub async fn status(&self) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let status = self.status_engine().initialize().await?;

        self.print_section(ChangeKind::Staged, status.staged())?;
        writeln!(self.writer())?;
        self.print_section(ChangeKind::Modified, status.modified())?;
        writeln!(self.writer())?;
        self.print_section(ChangeKind::Untracked, status.untracked())?;
        writeln!(self.writer())?;

        writeln!(self.writer(), "{}", ChangeKind::Deleted.header())?;
        for (path, origin) in status.deleted() {
            writeln!(
                self.writer(),
                "{}{}",
                ChangeKind::Deleted.paint(&path.to_string_lossy()),
                origin
            )?;
        }

        Ok(status)
    }

    fn print_section(&self, kind: ChangeKind, paths: &FileSet) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", kind.header())?;
        for path in paths {
            writeln!(self.writer(), "{}", kind.paint(&path.to_string_lossy()))?;
        }

        Ok(())
    }
}
