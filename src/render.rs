//! HTML Fragment Rendering
//!
//! Pure functions turning domain records into markup strings that the page
//! controllers assign to their container elements.

use crate::models::{Category, Ingredient, MealDetail, MealSummary};
use crate::query::{category_url, detail_url};

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Grid markup plus whether the "no results" indicator should be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFragment {
    pub markup: String,
    pub show_no_results: bool,
}

impl GridFragment {
    fn from_tiles(tiles: Vec<String>) -> Self {
        Self {
            show_no_results: tiles.is_empty(),
            markup: tiles.concat(),
        }
    }
}

pub fn category_tile(category: &Category) -> String {
    let name = escape_html(&category.name);
    format!(
        r#"<a class="card category-card" href="{href}"><img src="{thumb}" alt="{name}" loading="lazy" /><h3>{name}</h3></a>"#,
        href = escape_html(&category_url(&category.name)),
        thumb = escape_html(&category.thumbnail_url),
        name = name,
    )
}

/// "Area · Category", whichever parts are known
fn meal_caption(meal: &MealSummary) -> String {
    [meal.area.as_deref(), meal.category.as_deref()]
        .into_iter()
        .flatten()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join(" &middot; ")
}

pub fn meal_tile(meal: &MealSummary) -> String {
    let name = escape_html(&meal.name);
    let caption = meal_caption(meal);
    let caption = if caption.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="meal-caption">{}</p>"#, caption)
    };
    format!(
        r#"<a class="card meal-card" href="{href}"><img src="{thumb}" alt="{name}" loading="lazy" /><h3>{name}</h3>{caption}</a>"#,
        href = escape_html(&detail_url(&meal.id)),
        thumb = escape_html(&meal.thumbnail_url),
        name = name,
        caption = caption,
    )
}

pub fn category_grid(categories: &[Category]) -> GridFragment {
    GridFragment::from_tiles(categories.iter().map(category_tile).collect())
}

pub fn meal_grid(meals: &[MealSummary]) -> GridFragment {
    GridFragment::from_tiles(meals.iter().map(meal_tile).collect())
}

/// Normalize `\r\n` / `\r` to `\n`, escape, then break lines with `<br>`
pub fn format_instructions(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    escape_html(normalized.trim()).replace('\n', "<br>")
}

fn ingredient_line(ingredient: &Ingredient) -> String {
    if ingredient.measure.is_empty() {
        format!("<li>{}</li>", escape_html(&ingredient.name))
    } else {
        format!(
            "<li>{} {}</li>",
            escape_html(&ingredient.measure),
            escape_html(&ingredient.name)
        )
    }
}

fn external_link(url: Option<&str>, label: &str) -> String {
    match url {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            label
        ),
        None => "N/A".to_string(),
    }
}

pub fn meal_detail(meal: &MealDetail) -> String {
    let summary = &meal.summary;
    let name = escape_html(&summary.name);

    let tags: String = [summary.category.as_deref(), summary.area.as_deref()]
        .into_iter()
        .flatten()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect();

    let ingredients: String = meal.ingredients.iter().map(ingredient_line).collect();

    let video = meal
        .video_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<p class="meal-video">{}</p>"#,
                external_link(Some(url), "Watch video")
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<article class="meal-detail">"#,
            r#"<img class="meal-detail-thumb" src="{thumb}" alt="{name}" />"#,
            r#"<div class="meal-detail-body">"#,
            r#"<h2>{name}</h2>"#,
            r#"<div class="meal-tags">{tags}</div>"#,
            r#"<p class="meal-source">Source: {source}</p>"#,
            r#"<h3>Ingredients</h3><ul class="ingredients">{ingredients}</ul>"#,
            r#"<h3>Instructions</h3><p class="instructions">{instructions}</p>"#,
            "{video}",
            "</div></article>"
        ),
        thumb = escape_html(&summary.thumbnail_url),
        name = name,
        tags = tags,
        source = external_link(meal.source_url.as_deref(), "View original"),
        ingredients = ingredients,
        instructions = format_instructions(&meal.instructions),
        video = video,
    )
}

/// Plain status message ("No meal selected.", "Meal not found.")
pub fn message(text: &str) -> String {
    format!(r#"<p class="message">{}</p>"#, escape_html(text))
}
