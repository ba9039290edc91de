// host/commands.rs
//
// Line-oriented stand-in for the browser's controls. Each line names one
// control and its new value, e.g. `beds 3`, `sort price_desc`, `page 2`.

use crate::app::{ClickTarget, Intent};
use crate::domain::{Category, CriteriaChange, SortMode};
use crate::errors::CommandError;
use crate::host::HostEvent;
use std::str::FromStr;

pub fn parse_command(line: &str) -> Result<HostEvent, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let intent = match name {
        "" => return Err(CommandError::Empty),
        "quit" | "exit" => return Ok(HostEvent::Quit),

        "type" => Intent::Criteria(CriteriaChange::Category(Category::from(required("type", rest)?))),
        "price" => Intent::Criteria(CriteriaChange::MaxPrice(parsed("price", rest)?)),
        "drag" => Intent::PriceDragged(parsed("drag", rest)?),
        "beds" => Intent::Criteria(CriteriaChange::MinBeds(parsed("beds", rest)?)),
        "area" => Intent::Criteria(CriteriaChange::MinArea(parsed("area", rest)?)),
        "search" => Intent::Criteria(CriteriaChange::Query(rest.to_string())),
        // clears the search box and applies
        "all" => Intent::Criteria(CriteriaChange::Query(String::new())),
        "sort" => Intent::Criteria(CriteriaChange::Sort(parsed::<SortMode>("sort", rest)?)),
        "apply" => Intent::ApplyFilters,
        "reset" => Intent::ResetFilters,
        "hero" => {
            // `hero <type> | <text>`; the type may contain spaces
            let rest = required("hero", rest)?;
            let (category, query) = match rest.split_once('|') {
                Some((category, query)) => (category.trim(), query.trim()),
                None => (rest, ""),
            };
            Intent::HeroSearch {
                query: query.to_string(),
                category: Category::from(category),
            }
        }
        "page" => Intent::PageSelected(parsed("page", rest)?),
        "cluster" => Intent::ClusterToggled,
        "marker" => Intent::MarkerClicked(required("marker", rest)?.to_string()),
        "open" => Intent::OpenDetail(required("open", rest)?.to_string()),
        "close" => Intent::CloseModal,
        "backdrop" => Intent::ModalClicked(ClickTarget::Backdrop),
        "inside" => Intent::ModalClicked(ClickTarget::Content),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(HostEvent::Intent(intent))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn parsed<T: FromStr>(command: &'static str, rest: &str) -> Result<T, CommandError> {
    required(command, rest)?
        .parse()
        .map_err(|_| CommandError::InvalidValue {
            command,
            value: rest.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(line: &str) -> Intent {
        match parse_command(line) {
            Ok(HostEvent::Intent(intent)) => intent,
            other => panic!("{line:?} parsed to {other:?}"),
        }
    }

    #[test]
    fn criteria_commands() {
        assert!(matches!(
            intent("beds 3"),
            Intent::Criteria(CriteriaChange::MinBeds(3))
        ));
        assert!(matches!(
            intent("sort price_desc"),
            Intent::Criteria(CriteriaChange::Sort(SortMode::PriceDesc))
        ));
        assert!(matches!(
            intent("type all"),
            Intent::Criteria(CriteriaChange::Category(Category::All))
        ));
        match intent("search  sea view ") {
            Intent::Criteria(CriteriaChange::Query(q)) => assert_eq!(q, "sea view"),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn hero_takes_category_then_text() {
        match intent("hero Town House | with pool") {
            Intent::HeroSearch { query, category } => {
                assert_eq!(query, "with pool");
                assert_eq!(category, Category::Type("Town House".into()));
            }
            other => panic!("{other:?}"),
        }
        match intent("hero Town House") {
            Intent::HeroSearch { query, category } => {
                assert_eq!(query, "");
                assert_eq!(category, Category::Type("Town House".into()));
            }
            other => panic!("{other:?}"),
        }
        match intent("hero all | garden") {
            Intent::HeroSearch { query, category } => {
                assert_eq!(query, "garden");
                assert_eq!(category, Category::All);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn show_all_clears_the_search() {
        assert!(matches!(
            intent("all"),
            Intent::Criteria(CriteriaChange::Query(q)) if q.is_empty()
        ));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse_command("   ").unwrap_err(), CommandError::Empty);
        assert_eq!(
            parse_command("fly away").unwrap_err(),
            CommandError::Unknown("fly".into())
        );
        assert_eq!(
            parse_command("page").unwrap_err(),
            CommandError::MissingArgument("page")
        );
        assert!(matches!(
            parse_command("beds many").unwrap_err(),
            CommandError::InvalidValue { command: "beds", .. }
        ));
    }

    #[test]
    fn quit_ends_the_session() {
        assert!(matches!(parse_command("quit"), Ok(HostEvent::Quit)));
    }
}
