use colored::{ColoredString, Colorize};

/// Status report section a path can be listed under
///
/// A path may show up in more than one section: a file can be both staged
/// and modified since it was staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Staged,
    Modified,
    Untracked,
    Deleted,
}

impl ChangeKind {
    pub fn header(&self) -> &'static str {
        match self {
            ChangeKind::Staged => "=== Staged ===",
            ChangeKind::Modified => "=== Modified but not Staged ===",
            ChangeKind::Untracked => "=== Untracked Files ===",
            ChangeKind::Deleted => "=== Deleted ===",
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            ChangeKind::Staged => text.green(),
            ChangeKind::Modified | ChangeKind::Deleted => text.red(),
            ChangeKind::Untracked => text.normal(),
        }
    }
}

/// Where a deleted path was last known from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeletedFrom {
    /// Present in the last save point (wins when also staged)
    WasSaved,
    /// Only present in the staging index
    WasStaged,
}

impl From<&DeletedFrom> for &str {
    fn from(origin: &DeletedFrom) -> Self {
        match origin {
            DeletedFrom::WasSaved => " (was saved)",
            DeletedFrom::WasStaged => " (was staged)",
        }
    }
}

impl std::fmt::Display for DeletedFrom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label.dimmed())
    }
}
