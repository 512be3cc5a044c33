//! Markup renderers.
//!
//! Every function here is pure: it takes catalog records and returns the HTML
//! fragment for one panel. Text content goes through [`escape_text`], attribute
//! values through [`escape_attr`].

use crate::model::{Category, MealDetail, MealSummary};
use crate::view::{Panel, ViewModel};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const NO_RESULTS: &str = "<p>No results</p>";
pub const DETAILS_NOT_FOUND: &str = "<p>Details not found</p>";
pub const LOADING: &str = "Loading...";
pub const LOADING_DETAILS: &str = "Loading details...";

/// Escapes `&`, `<` and `>` for use as element content.
pub fn escape_text(s: &str) -> String {
    encode_text(s).into_owned()
}

/// Escapes a value for a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

/// One card per meal, or the "no results" placeholder.
pub fn render_results(meals: Option<&[MealSummary]>) -> String {
    match meals {
        Some(meals) if !meals.is_empty() => meals.iter().map(render_card).collect(),
        _ => NO_RESULTS.to_string(),
    }
}

fn render_card(meal: &MealSummary) -> String {
    let id = escape_attr(&meal.id);
    let thumb = escape_attr(meal.thumbnail.as_deref().unwrap_or_default());
    let alt = escape_attr(&meal.name);
    let name = escape_text(&meal.name);
    let id_text = escape_text(&meal.id);
    format!(
        r#"
    <div class="card" data-id="{id}">
      <img src="{thumb}" alt="{alt}" />
      <div class="meta">
        <h4>{name}</h4>
        <p>ID: {id_text}</p>
      </div>
    </div>
  "#
    )
}

/// Full detail view, or the "details not found" placeholder.
pub fn render_details(meal: Option<&MealDetail>) -> String {
    let Some(meal) = meal else {
        return DETAILS_NOT_FOUND.to_string();
    };

    let ingredients: String = meal
        .ingredients
        .iter()
        .map(|i| format!("<li>{}</li>", escape_text(&i.line())))
        .collect();
    let video = meal.video_id().map(render_video).unwrap_or_default();

    format!(
        r#"
      <h2>{name}</h2>
      <p><strong>Category:</strong> {category} &nbsp; <strong>Area:</strong> {area}</p>
      <img src="{thumb}" alt="{alt}" style="max-width:320px; width:100%; border-radius:8px;"/>
      <h3>Ingredients</h3>
      <ul>{ingredients}</ul>
      <h3>Instructions</h3>
      <p style="white-space:pre-line">{instructions}</p>
      {video}
    "#,
        name = escape_text(&meal.name),
        category = escape_text(meal.category.as_deref().unwrap_or_default()),
        area = escape_text(meal.area.as_deref().unwrap_or_default()),
        thumb = escape_attr(meal.thumbnail.as_deref().unwrap_or_default()),
        alt = escape_attr(&meal.name),
        instructions = escape_text(meal.instructions.as_deref().unwrap_or_default()),
    )
}

fn render_video(video_id: &str) -> String {
    format!(
        r#"<div class="video"><iframe width="100%" height="315" src="https://www.youtube.com/embed/{}" frameborder="0" allowfullscreen></iframe></div>"#,
        escape_attr(video_id)
    )
}

/// Category list items carrying the category name as `data-cat`.
pub fn render_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| {
            format!(
                r#"<li data-cat="{}">{}</li>"#,
                escape_attr(&c.name),
                escape_text(&c.name)
            )
        })
        .collect()
}

/// Standalone page holding all panels of the view.
pub fn render_page(view: &ViewModel) -> String {
    let hidden = |panel: Panel| {
        if view.active_panel() == panel {
            ""
        } else {
            " hidden"
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Meal Browser</title>
  <style>.hidden {{ display: none; }}</style>
</head>
<body>
  <header>
    <input id="searchInput" type="text" placeholder="Search meals by name" />
    <button id="searchBtn">Search</button>
    <button id="randomBtn">Random</button>
  </header>
  <aside><ul id="categoriesList">{categories}</ul></aside>
  <main>
    <section id="results" class="results{results_hidden}">{results}</section>
    <section id="details" class="details{details_hidden}">{details}</section>
  </main>
</body>
</html>
"#,
        categories = view.categories(),
        results = view.results(),
        details = view.details(),
        results_hidden = hidden(Panel::Results),
        details_hidden = hidden(Panel::Details),
    )
}
