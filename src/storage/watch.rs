//! Live query subscriptions.
//!
//! A [`Subscription`] re-runs a query only when the database has changed
//! since the subscriber last looked, so callers can poll cheaply.
//! [`Snapshots`] wraps one as a blocking iterator for watch-style output.

use std::time::Duration;

use crate::error::GymError;

use super::database::{ChangeToken, Database};

type Query<'db, T> = Box<dyn Fn(&Database) -> Result<Vec<T>, GymError> + 'db>;

/// A lazily evaluated stream of query snapshots.
///
/// The first poll always yields. Later polls yield only after a write.
/// Each subscriber tracks its own position, so two subscriptions on the same
/// database see the same changes independently.
pub struct Subscription<'db, T> {
    db: &'db Database,
    query: Query<'db, T>,
    seen: Option<ChangeToken>,
}

impl<'db, T> Subscription<'db, T> {
    /// Subscribe to the results of `query`.
    pub fn new<F>(db: &'db Database, query: F) -> Self
    where
        F: Fn(&Database) -> Result<Vec<T>, GymError> + 'db,
    {
        Self {
            db,
            query: Box::new(query),
            seen: None,
        }
    }

    /// Return a fresh snapshot if the data changed since the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if the change token or the query fails.
    pub fn next_snapshot(&mut self) -> Result<Option<Vec<T>>, GymError> {
        let token = self.db.change_token()?;
        if self.seen == Some(token) {
            return Ok(None);
        }

        let snapshot = (self.query)(self.db)?;
        self.seen = Some(token);
        Ok(Some(snapshot))
    }

    /// Forget the last snapshot so the next poll yields again.
    pub fn restart(&mut self) {
        self.seen = None;
    }

    /// Turn the subscription into a blocking iterator that sleeps for
    /// `poll_interval` between checks.
    #[must_use]
    pub fn snapshots(self, poll_interval: Duration) -> Snapshots<'db, T> {
        Snapshots {
            subscription: self,
            poll_interval,
        }
    }
}

/// Blocking iterator over changed snapshots.
///
/// `next()` returns as soon as a new snapshot is available. It never returns
/// `None`; stop by dropping the iterator.
pub struct Snapshots<'db, T> {
    subscription: Subscription<'db, T>,
    poll_interval: Duration,
}

impl<T> Iterator for Snapshots<'_, T> {
    type Item = Result<Vec<T>, GymError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.subscription.next_snapshot() {
                Ok(Some(snapshot)) => return Some(Ok(snapshot)),
                Ok(None) => std::thread::sleep(self.poll_interval),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usernames(db: &Database) -> Result<Vec<String>, GymError> {
        let mut stmt = db
            .connection()
            .prepare("SELECT username FROM users ORDER BY id")
            .map_err(|e| GymError::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| GymError::Database(e.to_string()))?;
        rows.collect::<Result<_, _>>()
            .map_err(|e| GymError::Database(e.to_string()))
    }

    fn add_user(db: &Database, name: &str) {
        db.insert(
            "INSERT INTO users (username, password) VALUES (?1, 'pw')",
            [name],
        )
        .unwrap();
    }

    #[test]
    fn test_first_poll_yields() {
        let db = Database::open_in_memory().unwrap();
        let mut sub = Subscription::new(&db, usernames);

        assert_eq!(sub.next_snapshot().unwrap(), Some(vec![]));
        assert_eq!(sub.next_snapshot().unwrap(), None);
    }

    #[test]
    fn test_write_triggers_new_snapshot() {
        let db = Database::open_in_memory().unwrap();
        let mut sub = Subscription::new(&db, usernames);
        sub.next_snapshot().unwrap();

        add_user(&db, "ana");
        assert_eq!(sub.next_snapshot().unwrap(), Some(vec!["ana".to_string()]));
        assert_eq!(sub.next_snapshot().unwrap(), None);
    }

    #[test]
    fn test_restart_yields_again() {
        let db = Database::open_in_memory().unwrap();
        let mut sub = Subscription::new(&db, usernames);
        sub.next_snapshot().unwrap();

        sub.restart();
        assert_eq!(sub.next_snapshot().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_subscribers_are_independent() {
        let db = Database::open_in_memory().unwrap();
        let mut first = Subscription::new(&db, usernames);
        let mut second = Subscription::new(&db, usernames);

        first.next_snapshot().unwrap();
        add_user(&db, "ana");

        assert!(first.next_snapshot().unwrap().is_some());
        // second has never polled, so it sees the current state once
        assert_eq!(second.next_snapshot().unwrap(), Some(vec!["ana".to_string()]));
        assert_eq!(second.next_snapshot().unwrap(), None);
    }

    #[test]
    fn test_snapshots_iterator_yields_initial_state() {
        let db = Database::open_in_memory().unwrap();
        add_user(&db, "ana");

        let mut snapshots = Subscription::new(&db, usernames).snapshots(Duration::from_millis(5));
        let first = snapshots.next().unwrap().unwrap();
        assert_eq!(first, vec!["ana".to_string()]);
    }
}
