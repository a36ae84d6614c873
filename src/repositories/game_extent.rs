// src/repositories/game_extent.rs
//
// The extent: every game created in this process, in insertion order.

use crate::domain::{is_blank, Game, GameId};

/// In-memory collection of every constructed Game
///
/// Only validated games can be added, and callers get read-only slices,
/// so nothing outside the domain mutators can break a game's invariants.
#[derive(Debug, Clone, Default)]
pub struct GameExtent {
    games: Vec<Game>,
}

impl GameExtent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a game at the end of the extent
    pub fn add(&mut self, game: Game) -> GameId {
        let id = game.id();
        self.games.push(game);
        id
    }

    pub fn list_all(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id() == id)
    }

    pub fn get_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.iter_mut().find(|game| game.id() == id)
    }

    /// Games carrying exactly `tag`, in extent order
    /// Absent or blank input yields an empty result rather than an error.
    pub fn find_with_similar_tag(&self, tag: Option<&str>) -> Vec<&Game> {
        match tag {
            Some(tag) if !is_blank(tag) => self
                .games
                .iter()
                .filter(|game| game.has_theme_tag(tag))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Swap in a whole new collection
    pub fn replace_all(&mut self, games: Vec<Game>) {
        self.games = games;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedClock, NewGame, Publisher};
    use chrono::NaiveDate;

    fn game(title: &str, tags: &[&str]) -> Game {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 5, 13).unwrap());
        Game::new(
            NewGame {
                title: title.to_string(),
                publisher: Some(Publisher::new("Publisher", "About").unwrap()),
                description: "Description".to_string(),
                price: Some(10.0),
                release_date: NaiveDate::from_ymd_opt(2020, 1, 1),
                theme_tags: tags.iter().map(|t| t.to_string()).collect(),
                publisher_note: None,
            },
            &clock,
        )
        .unwrap()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut extent = GameExtent::new();
        let a = extent.add(game("A", &["Action"]));
        let b = extent.add(game("B", &["RPG"]));

        let ids: Vec<_> = extent.list_all().iter().map(Game::id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(extent.get(b).map(Game::title), Some("B"));
    }

    #[test]
    fn test_find_with_similar_tag() {
        let mut extent = GameExtent::new();
        extent.add(game("A", &["Action", "Adventure"]));
        extent.add(game("B", &["Racing"]));
        extent.add(game("C", &["Simulator", "Action"]));

        let titles: Vec<_> = extent
            .find_with_similar_tag(Some("Action"))
            .into_iter()
            .map(Game::title)
            .collect();
        assert_eq!(titles, vec!["A", "C"]);

        assert!(extent.find_with_similar_tag(Some("action")).is_empty());
        assert!(extent.find_with_similar_tag(Some("")).is_empty());
        assert!(extent.find_with_similar_tag(Some("  ")).is_empty());
        assert!(extent.find_with_similar_tag(None).is_empty());
    }

    #[test]
    fn test_replace_all_overwrites() {
        let mut extent = GameExtent::new();
        extent.add(game("A", &["Action"]));
        extent.replace_all(vec![game("B", &["RPG"]), game("C", &["RPG"])]);

        assert_eq!(extent.len(), 2);
        assert_eq!(extent.list_all()[0].title(), "B");
    }
}
