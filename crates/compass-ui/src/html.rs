//! HTML rendering of [`View`] descriptions.
//!
//! Pages are plain server-rendered HTML with small inline styles; forms
//! submit back to the same mode's path so every interaction is a full
//! request/response round trip. All user-supplied text is escaped here.

use compass_core::{
    Difficulty, MAX_PREP_TIME_CEILING, MIN_PREP_TIME_CEILING, PREP_TIME_MAX, PREP_TIME_MIN,
    RATING_MAX, RATING_MIN, Recipe, RecipeDraft, SearchCriteria,
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use strum::IntoEnumIterator;

use crate::charts::Chart;
use crate::nav::NavMode;
use crate::pages::AnalyticsTab;
use crate::view::{Block, Notice, NoticeKind, View};

pub const APP_TITLE: &str = "✨ Culinary Compass";

const STYLE: &str = r"
body { margin: 0; font-family: Helvetica, Arial, sans-serif; display: flex; min-height: 100vh; }
nav.sidebar { width: 240px; background: #f0f2f6; padding: 24px 16px; }
nav.sidebar h1 { font-size: 1.4em; }
nav.sidebar a { display: block; padding: 8px 10px; margin: 4px 0; border-radius: 8px; color: #262730; text-decoration: none; }
nav.sidebar a.active { background: #ff6b6b; color: white; }
main { flex: 1; padding: 24px 40px; }
.columns { display: flex; gap: 32px; }
.columns > div:first-child { flex: 1; }
.columns > div:last-child { flex: 2; }
.notice { padding: 12px 16px; border-radius: 8px; margin: 12px 0; }
.notice-info { background: #e8f0fe; }
.notice-success { background: #e6f4ea; }
.notice-warning { background: #fff4e5; }
.notice-error { background: #fdecea; }
.tabs a { margin-right: 16px; }
.tabs a.active { font-weight: bold; border-bottom: 2px solid #ff6b6b; }
form label { display: block; margin: 10px 0 4px; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
.recipe-card { animation: fadeIn 0.5s ease-in; }
";

/// Render a complete HTML document for `view`.
pub fn render_page(view: &View) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str(&format!(
        "<title>{}</title><style>{STYLE}</style></head><body>",
        text(APP_TITLE)
    ));
    push_sidebar(&mut out, view.mode);
    out.push_str("<main>");
    push_blocks(&mut out, &view.blocks);
    out.push_str("</main></body></html>");
    out
}

fn push_sidebar(out: &mut String, active: NavMode) {
    out.push_str("<nav class=\"sidebar\"><h1>🍳 Culinary Compass</h1>");
    for mode in NavMode::iter() {
        let class = if mode == active { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"{}\"{class}>{}</a>",
            mode.path(),
            text(mode.label())
        ));
    }
    out.push_str("</nav>");
}

fn push_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { text: t } => out.push_str(&format!("<h2>{}</h2>", text(t))),
            Block::Subheading { text: t } => out.push_str(&format!("<h3>{}</h3>", text(t))),
            Block::Cards(recipes) => recipes.iter().for_each(|r| out.push_str(&recipe_card(r))),
            Block::Notice(notice) => push_notice(out, notice),
            Block::Chart(chart) => push_chart(out, chart),
            Block::CuisinePicker { options, selected } => {
                push_cuisine_picker(out, options, selected.as_deref());
            }
            Block::SearchControls(criteria) => push_search_controls(out, criteria),
            Block::RecipeForm(draft) => push_recipe_form(out, draft),
            Block::Tabs { active } => push_tabs(out, *active),
            Block::Columns(columns) => {
                out.push_str("<div class=\"columns\">");
                for column in columns {
                    out.push_str("<div>");
                    push_blocks(out, column);
                    out.push_str("</div>");
                }
                out.push_str("</div>");
            }
        }
    }
}

/// The recipe card shown by the explorer and search pages.
pub fn recipe_card(recipe: &Recipe) -> String {
    format!(
        concat!(
            "<div class=\"recipe-card\" style=\"padding:15px;margin:10px;background:#fff3e6;",
            "border-radius:15px;box-shadow:0 4px 8px rgba(0,0,0,0.1);\">",
            "<h3 style=\"color:#ff6b6b;\">🍳 {name}</h3>",
            "<p>🌍 <b>Cuisine:</b> {cuisine}</p>",
            "<p>⏱️ <b>Prep Time:</b> {prep} mins</p>",
            "<p>🎚️ <b>Difficulty:</b> {difficulty}</p>",
            "<p>⭐ <b>Rating:</b> {rating:.1}/5</p>",
            "<details><summary>🛒 Ingredients</summary>{ingredients}</details>",
            "</div>"
        ),
        name = text(&recipe.name),
        cuisine = text(&recipe.cuisine),
        prep = recipe.prep_time,
        difficulty = recipe.difficulty,
        rating = recipe.rating,
        ingredients = text(&recipe.ingredient_list()),
    )
}

fn push_notice(out: &mut String, notice: &Notice) {
    let kind = match notice.kind {
        NoticeKind::Info => "info",
        NoticeKind::Success => "success",
        NoticeKind::Warning => "warning",
        NoticeKind::Error => "error",
    };
    out.push_str(&format!(
        "<div class=\"notice notice-{kind}\" role=\"status\">{}</div>",
        text(&notice.text)
    ));
}

fn push_chart(out: &mut String, chart: &Chart) {
    // The SVG is generated by the chart renderers, which escape their own text.
    out.push_str(&format!(
        "<figure class=\"chart\" data-chart=\"{}\">{}</figure>",
        chart.kind.slug(),
        chart.svg
    ));
}

fn push_cuisine_picker(out: &mut String, options: &[String], selected: Option<&str>) {
    out.push_str(&format!(
        "<form method=\"get\" action=\"{}\"><label for=\"cuisine\">Choose a cuisine:</label>",
        NavMode::Explorer.path()
    ));
    out.push_str("<select id=\"cuisine\" name=\"cuisine\" onchange=\"this.form.submit()\">");
    for option in options {
        let sel = if Some(option.as_str()) == selected { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{sel}>{}</option>",
            attr(option),
            text(option)
        ));
    }
    out.push_str("</select> <button type=\"submit\">Show</button></form>");
}

fn push_search_controls(out: &mut String, criteria: &SearchCriteria) {
    out.push_str(&format!(
        "<form method=\"get\" action=\"{}\"><input type=\"hidden\" name=\"submitted\" value=\"1\">",
        NavMode::Search.path()
    ));
    out.push_str(&format!(
        concat!(
            "<label for=\"max_time\">Maximum Prep Time (mins): {v}</label>",
            "<input type=\"range\" id=\"max_time\" name=\"max_time\" min=\"{min}\" max=\"{max}\" value=\"{v}\">"
        ),
        v = criteria.max_prep_time,
        min = MIN_PREP_TIME_CEILING,
        max = MAX_PREP_TIME_CEILING,
    ));
    out.push_str(&format!(
        concat!(
            "<label for=\"min_rating\">Minimum Rating: {v:.1}</label>",
            "<input type=\"range\" id=\"min_rating\" name=\"min_rating\" min=\"{min:.1}\" max=\"{max:.1}\" step=\"0.1\" value=\"{v:.1}\">"
        ),
        v = criteria.min_rating,
        min = RATING_MIN,
        max = RATING_MAX,
    ));
    out.push_str("<fieldset><legend>Difficulty Level</legend>");
    for difficulty in Difficulty::iter() {
        let checked = if criteria.difficulties.contains(&difficulty) {
            " checked"
        } else {
            ""
        };
        out.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"difficulty\" value=\"{difficulty}\"{checked}> {difficulty}</label>"
        ));
    }
    out.push_str("</fieldset><button type=\"submit\">Search</button></form>");
}

fn push_recipe_form(out: &mut String, draft: &RecipeDraft) {
    out.push_str(&format!(
        "<form method=\"post\" action=\"{}\">",
        NavMode::Add.path()
    ));
    out.push_str(&format!(
        concat!(
            "<label for=\"name\">Recipe Name</label>",
            "<input type=\"text\" id=\"name\" name=\"name\" value=\"{name}\">",
            "<label for=\"cuisine\">Cuisine Type</label>",
            "<input type=\"text\" id=\"cuisine\" name=\"cuisine\" value=\"{cuisine}\">",
            "<label for=\"ingredients\">Ingredients (comma-separated)</label>",
            "<textarea id=\"ingredients\" name=\"ingredients\">{ingredients}</textarea>",
            "<label for=\"prep_time\">Prep Time (minutes)</label>",
            "<input type=\"number\" id=\"prep_time\" name=\"prep_time\" min=\"{pmin}\" max=\"{pmax}\" value=\"{prep}\">",
            "<label for=\"difficulty\">Difficulty</label><select id=\"difficulty\" name=\"difficulty\">"
        ),
        name = attr(&draft.name),
        cuisine = attr(&draft.cuisine),
        ingredients = text(&draft.ingredients),
        pmin = PREP_TIME_MIN,
        pmax = PREP_TIME_MAX,
        prep = draft.prep_time,
    ));
    for difficulty in Difficulty::iter() {
        let sel = if difficulty == draft.difficulty { " selected" } else { "" };
        out.push_str(&format!("<option value=\"{difficulty}\"{sel}>{difficulty}</option>"));
    }
    out.push_str(&format!(
        concat!(
            "</select><label for=\"rating\">Rating</label>",
            "<input type=\"range\" id=\"rating\" name=\"rating\" min=\"{min:.1}\" max=\"{max:.1}\" step=\"0.1\" value=\"{v:.1}\">",
            "<button type=\"submit\">Submit Recipe</button></form>"
        ),
        min = RATING_MIN,
        max = RATING_MAX,
        v = draft.rating,
    ));
}

fn push_tabs(out: &mut String, active: AnalyticsTab) {
    out.push_str("<div class=\"tabs\">");
    for tab in AnalyticsTab::iter() {
        let slug: &'static str = tab.into();
        let class = if tab == active { " class=\"active\"" } else { "" };
        out.push_str(&format!(
            "<a href=\"{}?tab={slug}\"{class}>{}</a>",
            NavMode::Analytics.path(),
            tab.label()
        ));
    }
    out.push_str("</div>");
}
