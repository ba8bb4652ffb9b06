//! Add-recipe form.

use compass_core::{AddOutcome, Difficulty, RecipeDraft, RecipeError, RecipeStore};
use serde::Deserialize;
use std::str::FromStr;

use crate::nav::NavMode;
use crate::view::{Block, Notice, View};

pub const ADDED: &str = "Recipe added successfully! 🎉";

/// Raw fields posted by the add form.
///
/// Every field is kept as text so a cleared or mistyped number input becomes
/// a validation message instead of a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddParams {
    pub name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub prep_time: String,
    /// Absent means the default difficulty.
    pub difficulty: Option<String>,
    pub rating: String,
}

impl AddParams {
    /// Parse the text fields into a draft.
    ///
    /// Name and cuisine are checked before any number so a blank form reports
    /// the missing fields first. Ranges are left to [`RecipeDraft::validate`].
    pub fn to_draft(&self) -> Result<RecipeDraft, RecipeError> {
        if self.name.trim().is_empty() || self.cuisine.trim().is_empty() {
            return Err(RecipeError::MissingNameOrCuisine);
        }
        Ok(RecipeDraft {
            name: self.name.clone(),
            cuisine: self.cuisine.clone(),
            ingredients: self.ingredients.clone(),
            prep_time: parse_number("Prep time", &self.prep_time)?,
            difficulty: match self.difficulty.as_deref() {
                Some(text) => Difficulty::parse(text)?,
                None => Difficulty::default(),
            },
            rating: parse_number("Rating", &self.rating)?,
        })
    }

    /// Values to put back into the form after a rejection. Fields that do
    /// not parse fall back to the blank form's values.
    pub fn echo(&self) -> RecipeDraft {
        let blank = RecipeDraft::default();
        RecipeDraft {
            name: self.name.clone(),
            cuisine: self.cuisine.clone(),
            ingredients: self.ingredients.clone(),
            prep_time: parse_number("Prep time", &self.prep_time).unwrap_or(blank.prep_time),
            difficulty: self
                .difficulty
                .as_deref()
                .and_then(|text| Difficulty::parse(text).ok())
                .unwrap_or(blank.difficulty),
            rating: parse_number("Rating", &self.rating).unwrap_or(blank.rating),
        }
    }
}

impl From<RecipeDraft> for AddParams {
    fn from(draft: RecipeDraft) -> Self {
        Self {
            name: draft.name,
            cuisine: draft.cuisine,
            ingredients: draft.ingredients,
            prep_time: draft.prep_time.to_string(),
            difficulty: Some(draft.difficulty.to_string()),
            rating: draft.rating.to_string(),
        }
    }
}

fn parse_number<T: FromStr>(field: &'static str, text: &str) -> Result<T, RecipeError> {
    text.trim().parse().map_err(|_| RecipeError::NotANumber {
        field,
        value: text.to_string(),
    })
}

/// Build the add page, storing `submission` first when present.
///
/// A rejected submission leaves the store untouched and echoes the user's
/// values back into the form so they can fix and resubmit. An accepted one
/// resets the form.
pub fn view(store: &mut RecipeStore, submission: Option<&AddParams>) -> View {
    let mut blocks = vec![Block::heading("🍳 Share Your Creation")];

    let form = match submission {
        None => RecipeDraft::default(),
        Some(params) => match params
            .to_draft()
            .and_then(|draft| store.add(&draft).map(|outcome| (draft, outcome)))
        {
            Ok((draft, outcome)) => {
                tracing::info!(name = %draft.name.trim(), ?outcome, "recipe added");
                blocks.push(Block::Notice(Notice::success(ADDED)));
                if outcome == AddOutcome::Replaced {
                    blocks.push(Block::Notice(Notice::info(format!(
                        "Replaced the existing recipe named \"{}\".",
                        draft.name.trim()
                    ))));
                }
                RecipeDraft::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "recipe submission rejected");
                blocks.push(Block::Notice(Notice::error(e.to_string())));
                params.echo()
            }
        },
    };

    blocks.push(Block::RecipeForm(form));
    View::new(NavMode::Add, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NoticeKind;
    use compass_core::Difficulty;

    fn draft(name: &str, cuisine: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.into(),
            cuisine: cuisine.into(),
            ingredients: "a, b ,c".into(),
            prep_time: 10,
            difficulty: Difficulty::Easy,
            rating: 4.0,
        }
    }

    #[test]
    fn test_blank_form_without_submission() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, None);
        assert!(page.notices().is_empty());
        assert!(page.blocks.contains(&Block::RecipeForm(RecipeDraft::default())));
    }

    #[test]
    fn test_successful_submission() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, Some(&draft("X", "Y").into()));
        assert_eq!(store.len(), 4);
        assert_eq!(page.notices()[0].kind, NoticeKind::Success);
        assert_eq!(page.notices()[0].text, ADDED);
        assert!(page.blocks.contains(&Block::RecipeForm(RecipeDraft::default())));
    }

    #[test]
    fn test_rejected_submission_keeps_values() {
        let mut store = RecipeStore::seeded();
        let bad = draft("X", "");
        let page = view(&mut store, Some(&bad.clone().into()));
        assert_eq!(store.len(), 3);
        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(
            notices[0].text,
            "Please provide at least a recipe name and cuisine type"
        );
        assert!(page.blocks.contains(&Block::RecipeForm(bad)));
    }

    #[test]
    fn test_replacing_reports_overwrite() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, Some(&draft("Avocado Toast", "Mexican").into()));
        assert_eq!(store.len(), 3);
        let kinds: Vec<NoticeKind> = page.notices().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Info]);
    }

    fn form(name: &str, prep_time: &str, rating: &str) -> AddParams {
        AddParams {
            name: name.into(),
            cuisine: "Thai".into(),
            ingredients: "Rice".into(),
            prep_time: prep_time.into(),
            difficulty: Some("Easy".into()),
            rating: rating.into(),
        }
    }

    fn error_text(page: &View) -> &str {
        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        let notice = notices[0];
        assert_eq!(notice.kind, NoticeKind::Error);
        &notice.text
    }

    #[test]
    fn test_blank_name_reported_before_blank_numbers() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, Some(&form("", "", "")));
        assert_eq!(store.len(), 3);
        assert_eq!(
            error_text(&page),
            "Please provide at least a recipe name and cuisine type"
        );
    }

    #[test]
    fn test_cleared_prep_time_is_a_validation_error() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, Some(&form("Pad Thai", "", "4.0")));
        assert_eq!(store.len(), 3);
        assert_eq!(error_text(&page), "Prep time must be a number, got ''");

        // The rest of the submission is echoed back with the blank form's prep time.
        let echoed = RecipeDraft {
            name: "Pad Thai".into(),
            cuisine: "Thai".into(),
            ingredients: "Rice".into(),
            prep_time: RecipeDraft::default().prep_time,
            difficulty: Difficulty::Easy,
            rating: 4.0,
        };
        assert!(page.blocks.contains(&Block::RecipeForm(echoed)));
    }

    #[test]
    fn test_non_numeric_rating_is_a_validation_error() {
        let mut store = RecipeStore::seeded();
        let page = view(&mut store, Some(&form("Pad Thai", "20", "great")));
        assert_eq!(store.len(), 3);
        assert_eq!(error_text(&page), "Rating must be a number, got 'great'");
    }

    #[test]
    fn test_unknown_difficulty_is_a_validation_error() {
        let mut store = RecipeStore::seeded();
        let mut params = form("Pad Thai", "20", "4");
        params.difficulty = Some("Extreme".into());
        let page = view(&mut store, Some(&params));
        assert_eq!(store.len(), 3);
        assert!(error_text(&page).starts_with("Unknown difficulty 'Extreme'"));
    }

    #[test]
    fn test_text_fields_are_trimmed_and_case_insensitive() {
        let mut params = form("Pad Thai", " 25 ", "4.5");
        params.difficulty = Some("medium".into());
        let draft = params.to_draft().unwrap();
        assert_eq!(draft.prep_time, 25);
        assert_eq!(draft.difficulty, Difficulty::Medium);

        params.difficulty = None;
        assert_eq!(params.to_draft().unwrap().difficulty, Difficulty::Easy);
    }
}
