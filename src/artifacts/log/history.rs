use crate::areas::database::Database;
use crate::artifacts::log::chain::read_save_point;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::save_point::SavePoint;
use crate::errors::Result;

/// Lazy walk from a save point to the root of its chain
///
/// Each step reads exactly one save point. The walk yields the starting save
/// point first and ends after the one whose parent is empty. A failed read is
/// yielded once as an error and ends the walk.
#[derive(Debug, Clone)]
pub struct HistoryWalk<'r> {
    database: &'r Database,
    next_fingerprint: Option<Fingerprint>,
}

impl<'r> HistoryWalk<'r> {
    pub fn new(database: &'r Database, start: Option<Fingerprint>) -> Self {
        HistoryWalk {
            database,
            next_fingerprint: start,
        }
    }
}

impl Iterator for HistoryWalk<'_> {
    type Item = Result<(Fingerprint, SavePoint)>;

    fn next(&mut self) -> Option<Self::Item> {
        let fingerprint = self.next_fingerprint.take()?;

        match read_save_point(self.database, &fingerprint) {
            Ok(save_point) => {
                // move to the parent for the next step
                self.next_fingerprint = save_point.parent().cloned();
                Some(Ok((fingerprint, save_point)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
