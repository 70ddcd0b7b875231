//! Registry of running games.
//!
//! Games are independent: the registry lock is only held long enough to
//! look up, insert or remove a `Table`, never while waiting on a game.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::info;

use super::table::{GameId, Table};
use crate::core::{GameConfig, UserId};
use crate::error::GameError;
use crate::game::Game;

#[derive(Debug, Default)]
pub struct Tables {
    next_id: AtomicU64,
    tables: RwLock<FxHashMap<GameId, Table>>,
}

impl Tables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game from the setup collaborator's host and seating list.
    pub fn open(&self, host: UserId, participants: Vec<UserId>, config: GameConfig) -> Result<Table, GameError> {
        let game = Game::new(host, participants, config)?;
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let table = Table::new(id, game);

        self.tables.write().insert(id, table.clone());
        info!(game_id = id.0, "opened table");
        Ok(table)
    }

    /// Adopt a game restored from a checkpoint under a fresh id.
    pub fn restore(&self, bytes: &[u8]) -> Result<Table, GameError> {
        let game = Game::restore(bytes)?;
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let table = Table::new(id, game);

        self.tables.write().insert(id, table.clone());
        info!(game_id = id.0, "restored table");
        Ok(table)
    }

    pub fn get(&self, id: GameId) -> Result<Table, GameError> {
        self.tables
            .read()
            .get(&id)
            .cloned()
            .ok_or(GameError::UnknownGame(id.0))
    }

    /// Run a transition on one game.
    pub fn with_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let table = self.get(id)?;
        table.write(f)
    }

    /// Drop finished and cancelled games.
    ///
    /// Returns how many were removed.
    pub fn sweep(&self) -> usize {
        // Game locks are taken with the registry unlocked; terminal is final,
        // so a status read here cannot go stale.
        let snapshot: Vec<Table> = self.tables.read().values().cloned().collect();
        let terminal: Vec<GameId> = snapshot
            .iter()
            .filter(|table| table.status().is_terminal())
            .map(Table::id)
            .collect();

        let mut tables = self.tables.write();
        let removed = terminal.into_iter().filter(|id| tables.remove(id).is_some()).count();
        if removed > 0 {
            info!(removed, "swept finished tables");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<UserId> {
        vec![UserId::from("ann"), UserId::from("bob"), UserId::from("cat")]
    }

    #[test]
    fn test_open_assigns_distinct_ids() {
        let tables = Tables::new();
        let a = tables.open(ids()[0].clone(), ids(), GameConfig::new(1)).unwrap();
        let b = tables.open(ids()[1].clone(), ids(), GameConfig::new(2)).unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(tables.len(), 2);
        assert_eq!(tables.get(a.id()).unwrap().id(), a.id());
    }

    #[test]
    fn test_open_rejects_bad_setup() {
        let tables = Tables::new();
        let err = tables.open(UserId::from("ann"), vec![UserId::from("ann")], GameConfig::default());

        assert!(matches!(err, Err(GameError::InvalidPlayerCount { .. })));
        assert!(tables.is_empty());
    }

    #[test]
    fn test_with_game_and_unknown_id() {
        let tables = Tables::new();
        let table = tables.open(ids()[0].clone(), ids(), GameConfig::new(1)).unwrap();

        tables.with_game(table.id(), |g| g.start(&ids()[0])).unwrap();
        assert!(table.read(Game::is_started));

        assert!(matches!(
            tables.with_game(GameId(999), |g| g.cancel()),
            Err(GameError::UnknownGame(999))
        ));
    }

    #[test]
    fn test_sweep_removes_terminal_games() {
        let tables = Tables::new();
        let keep = tables.open(ids()[0].clone(), ids(), GameConfig::new(1)).unwrap();
        let drop = tables.open(ids()[0].clone(), ids(), GameConfig::new(2)).unwrap();
        drop.cancel().unwrap();

        assert_eq!(tables.sweep(), 1);
        assert!(tables.get(keep.id()).is_ok());
        assert!(tables.get(drop.id()).is_err());
    }

    #[test]
    fn test_restore_from_checkpoint() {
        let tables = Tables::new();
        let table = tables.open(ids()[0].clone(), ids(), GameConfig::new(1)).unwrap();
        table.start(&ids()[0]).unwrap();

        let restored = tables.restore(&table.checkpoint().unwrap()).unwrap();

        assert_ne!(restored.id(), table.id());
        let original = table.poll_state(&ids()[1]).unwrap();
        let copy = restored.poll_state(&ids()[1]).unwrap();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_sweep_does_not_block_registry_behind_a_busy_game() {
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;

        let tables = Tables::new();
        let busy = tables.open(ids()[0].clone(), ids(), GameConfig::new(1)).unwrap();
        let done = tables.open(ids()[0].clone(), ids(), GameConfig::new(2)).unwrap();
        done.cancel().unwrap();

        let (locked_tx, locked_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let holder = busy.clone();
        thread::scope(|s| {
            s.spawn(move || {
                holder.write(|_| {
                    locked_tx.send(()).unwrap();
                    release_rx.recv().unwrap();
                });
            });
            locked_rx.recv().unwrap();

            let sweeper = s.spawn(|| tables.sweep());
            thread::sleep(Duration::from_millis(20));

            // The sweeper is waiting on the busy game, not holding the registry.
            assert_eq!(tables.get(done.id()).unwrap().id(), done.id());
            assert_eq!(tables.len(), 2);

            release_tx.send(()).unwrap();
            assert_eq!(sweeper.join().unwrap(), 1);
        });

        assert!(tables.get(busy.id()).is_ok());
        assert!(tables.get(done.id()).is_err());
    }
}
