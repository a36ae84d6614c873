// src/application/commands/game_commands.rs

use chrono::NaiveDate;

use crate::domain::{parse_theme_tags, GameId, NewGame, Publisher};
use crate::error::{AppError, AppResult};
use crate::services::CatalogService;

/// Tags added to the first game by the "Add tags" choice, in order
pub const SAMPLE_TAGS_TO_ADD: [&str; 3] = ["Third Person", "RPG", "Adventure"];

/// Tags removed from the first game by the "Remove tags" choice, in order
pub const SAMPLE_TAGS_TO_REMOVE: [&str; 3] = ["Action", "Magic", "Adventure"];

fn sample_game(
    title: &str,
    publisher: Publisher,
    description: &str,
    price: f64,
    release_date: Option<NaiveDate>,
    tags: &str,
    note: Option<&str>,
) -> AppResult<NewGame> {
    Ok(NewGame {
        title: title.to_string(),
        publisher: Some(publisher),
        description: description.to_string(),
        price: Some(price),
        release_date,
        theme_tags: parse_theme_tags(tags)?,
        publisher_note: note.map(str::to_string),
    })
}

/// Create the three demo games
/// Stops at the first rejected game; games created before it stay.
pub fn create_sample_games(catalog: &mut CatalogService) -> AppResult<String> {
    let cd_project = Publisher::new("CD Project Red", "Big Polish studio")?;
    let tvgs = Publisher::new("TVGS", "One person, that's creating indie games")?;
    let ea = Publisher::new("Electronic Arts", "Massive American game creator")?;

    catalog.create_game(sample_game(
        "The Witcher 3",
        cd_project,
        "Game about some witcher dudes",
        40.0,
        NaiveDate::from_ymd_opt(2015, 5, 13),
        "Action, Adventure, Magic",
        None,
    )?)?;
    catalog.create_game(sample_game(
        "Schedule I",
        tvgs,
        "Sell drugs and become the biggest kingpin ever",
        29.99,
        NaiveDate::from_ymd_opt(2025, 3, 31),
        "Action, Adventure, Simulator",
        Some("Early Access"),
    )?)?;
    catalog.create_game(sample_game(
        "Need for Speed Heat",
        ea,
        "Break rules, while driving awesome cars",
        50.99,
        NaiveDate::from_ymd_opt(2019, 10, 8),
        "Simulator, Racing, Action",
        None,
    )?)?;

    Ok("== Games successfully created ==".to_string())
}

pub fn search_by_tag(catalog: &CatalogService, tag: &str) -> String {
    catalog.show_with_similar_tag(Some(tag))
}

pub fn show_all(catalog: &CatalogService) -> String {
    catalog.show_all()
}

fn first_game(catalog: &CatalogService) -> AppResult<GameId> {
    catalog
        .list_all()
        .first()
        .map(|game| game.id())
        .ok_or(AppError::EmptyCatalog)
}

/// Add the sample tags to the first game, stopping at the first rejection
pub fn add_sample_tags(catalog: &mut CatalogService) -> AppResult<String> {
    let id = first_game(catalog)?;
    for tag in SAMPLE_TAGS_TO_ADD {
        catalog.add_theme_tag(id, tag)?;
    }
    Ok("== Tags successfully added ==".to_string())
}

/// Remove the sample tags from the first game, stopping at the first rejection
pub fn remove_sample_tags(catalog: &mut CatalogService) -> AppResult<String> {
    let id = first_game(catalog)?;
    for tag in SAMPLE_TAGS_TO_REMOVE {
        catalog.remove_theme_tag(id, tag)?;
    }
    Ok("== Tags successfully removed ==".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, FixedClock};
    use crate::infrastructure::IsoCurrencyTable;

    fn catalog() -> CatalogService {
        CatalogService::new(
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 5, 13).unwrap())),
            Box::new(IsoCurrencyTable),
        )
    }

    #[test]
    fn test_create_sample_games() {
        let mut catalog = catalog();
        create_sample_games(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.list_all()[1].publisher_note(), Some("Early Access"));
        assert_eq!(catalog.find_with_similar_tag(Some("Action")).len(), 3);
        assert_eq!(catalog.find_with_similar_tag(Some("Racing")).len(), 1);
    }

    #[test]
    fn test_add_sample_tags_stops_at_duplicate() {
        let mut catalog = catalog();
        create_sample_games(&mut catalog).unwrap();

        let err = add_sample_tags(&mut catalog).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::DuplicateThemeTag)));
        assert_eq!(
            catalog.list_all()[0].theme_tags(),
            ["Action", "Adventure", "Magic", "Third Person", "RPG"]
        );
    }

    #[test]
    fn test_remove_sample_tags_keeps_last_tag() {
        let mut catalog = catalog();
        create_sample_games(&mut catalog).unwrap();

        let err = remove_sample_tags(&mut catalog).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::LastThemeTag)));
        assert_eq!(catalog.list_all()[0].theme_tags(), ["Adventure"]);
    }

    #[test]
    fn test_tag_commands_need_a_game() {
        let mut catalog = catalog();
        assert!(matches!(
            add_sample_tags(&mut catalog),
            Err(AppError::EmptyCatalog)
        ));
        assert!(matches!(
            remove_sample_tags(&mut catalog),
            Err(AppError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_search_blank_prints_nothing() {
        let mut catalog = catalog();
        create_sample_games(&mut catalog).unwrap();
        assert!(search_by_tag(&catalog, "   ").is_empty());
        assert!(search_by_tag(&catalog, "Racing").contains("Need for Speed Heat"));
    }
}
