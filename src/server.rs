//! The mock server.

use tracing::debug;
use uuid::Uuid;

use crate::player::PlayerMock;

/// An in-process stand-in for a running server.
///
/// Owns the set of connected [`PlayerMock`]s. Tests typically create one
/// server per test, add the players the scenario needs, and drive the player
/// API directly.
///
/// Not thread-safe; external synchronization is required if a server is
/// shared across threads.
#[derive(Clone, Default, Debug)]
pub struct MockServer {
    players: Vec<PlayerMock>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a new player with a generated username (`player0`,
    /// `player1`, ...).
    pub fn add_player(&mut self) -> &mut PlayerMock {
        let username = format!("player{}", self.players.len());
        self.add_player_named(username)
    }

    /// Connects a new player with the given username.
    pub fn add_player_named(&mut self, username: impl Into<String>) -> &mut PlayerMock {
        let player = PlayerMock::new(username);

        debug!(
            username = %player.username(),
            uuid = %player.uuid(),
            "player joined"
        );

        let idx = self.players.len();
        self.players.push(player);
        &mut self.players[idx]
    }

    /// Looks up a connected player by UUID.
    pub fn player(&self, uuid: Uuid) -> Option<&PlayerMock> {
        self.players.iter().find(|p| p.uuid() == uuid)
    }

    pub fn player_mut(&mut self, uuid: Uuid) -> Option<&mut PlayerMock> {
        self.players.iter_mut().find(|p| p.uuid() == uuid)
    }

    pub fn players(&self) -> impl ExactSizeIterator<Item = &PlayerMock> + Clone + '_ {
        self.players.iter()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_players_are_named_sequentially() {
        let mut server = MockServer::new();

        let first = server.add_player().username().to_owned();
        let second = server.add_player().username().to_owned();

        assert_eq!(first, "player0");
        assert_eq!(second, "player1");
        assert_eq!(server.player_count(), 2);
    }

    #[test]
    fn players_are_found_by_uuid() {
        let mut server = MockServer::new();

        let uuid = server.add_player_named("steve").uuid();
        server.add_player_named("alex");

        assert_eq!(server.player(uuid).map(|p| p.username()), Some("steve"));
        assert!(server.player(Uuid::nil()).is_none());
    }
}
