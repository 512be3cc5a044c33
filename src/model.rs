use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure slots a catalog record carries.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// The `{ "meals": [...] | null }` envelope every endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct Meals<T> {
    pub meals: Option<Vec<T>>,
}

/// Minimal recipe data used for list display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory", default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Reads an explicit `null` as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One used ingredient slot of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub measure: String,
    pub name: String,
}

impl Ingredient {
    /// `"<measure> <ingredient>"`, trimmed.
    pub fn line(&self) -> String {
        format!("{} {}", self.measure, self.name).trim().to_string()
    }
}

/// Full recipe data including ingredients, instructions and media.
///
/// The catalog sends ingredients as flat `strIngredientN` / `strMeasureN`
/// fields; they are folded into [`MealDetail::ingredients`] while
/// deserializing, so nothing downstream sees the wire shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMealDetail")]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    pub youtube: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl MealDetail {
    /// YouTube video id taken from the `v=` parameter of the video link.
    pub fn video_id(&self) -> Option<&str> {
        self.youtube.as_deref().and_then(youtube_video_id)
    }
}

/// Extracts the id following the first `v=` of a YouTube link, cut at the
/// next `&`. Returns `None` when there is no parameter or it is empty.
pub fn youtube_video_id(link: &str) -> Option<&str> {
    let (_, after) = link.split_once("v=")?;
    let id = after.split('&').next().unwrap_or_default();
    (!id.is_empty()).then_some(id)
}

#[derive(Deserialize)]
struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl From<RawMealDetail> for MealDetail {
    fn from(raw: RawMealDetail) -> Self {
        let ingredients = collect_ingredients(&raw.slots);
        MealDetail {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            category: raw.category,
            area: raw.area,
            thumbnail: raw.thumbnail,
            instructions: raw.instructions,
            youtube: raw.youtube,
            ingredients,
        }
    }
}

fn slot_text<'a>(slots: &'a HashMap<String, Value>, key: &str) -> Option<&'a str> {
    slots.get(key).and_then(Value::as_str)
}

fn collect_ingredients(slots: &HashMap<String, Value>) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = slot_text(slots, &format!("strIngredient{i}"))?;
            if name.trim().is_empty() {
                return None;
            }
            let measure = slot_text(slots, &format!("strMeasure{i}")).unwrap_or_default();
            Some(Ingredient {
                measure: measure.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: Value) -> MealDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ingredients_skip_empty_and_missing_slots() {
        let meal = detail(json!({
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strIngredient1": "penne rigate",
            "strMeasure1": "1 pound",
            "strIngredient2": "  ",
            "strMeasure2": "1/4 cup",
            "strIngredient3": null,
            "strIngredient4": "garlic",
            "strMeasure4": null,
            "strIngredient5": ""
        }));

        let lines: Vec<String> = meal.ingredients.iter().map(Ingredient::line).collect();
        assert_eq!(lines, vec!["1 pound penne rigate", "garlic"]);
    }

    #[test]
    fn test_ingredients_keep_index_order_and_stop_at_twenty() {
        let mut value = json!({ "idMeal": "1", "strMeal": "Many" });
        let map = value.as_object_mut().unwrap();
        for i in (1..=21).rev() {
            map.insert(format!("strIngredient{i}"), json!(format!("item{i}")));
            map.insert(format!("strMeasure{i}"), json!(format!("{i}g")));
        }

        let meal = detail(value);
        assert_eq!(meal.ingredients.len(), MAX_INGREDIENT_SLOTS);
        assert_eq!(meal.ingredients[0].line(), "1g item1");
        assert_eq!(meal.ingredients[19].line(), "20g item20");
    }

    #[test]
    fn test_ingredient_line_trims_surrounding_space() {
        let ingredient = Ingredient {
            measure: String::new(),
            name: "salt ".to_string(),
        };
        assert_eq!(ingredient.line(), "salt");
    }

    #[test]
    fn test_non_string_slot_counts_as_absent() {
        let meal = detail(json!({
            "idMeal": "7",
            "strIngredient1": 42,
            "strIngredient2": "eggs",
            "strMeasure2": 3
        }));
        assert_eq!(meal.ingredients.len(), 1);
        assert_eq!(meal.ingredients[0].line(), "eggs");
        assert_eq!(meal.name, "");
    }

    #[test]
    fn test_youtube_video_id() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=1IszT_guI08"),
            Some("1IszT_guI08")
        );
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=abc123&t=42s"),
            Some("abc123")
        );
        assert_eq!(youtube_video_id("https://youtu.be/abc123"), None);
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=&t=1"), None);
        assert_eq!(youtube_video_id(""), None);
    }

    #[test]
    fn test_envelope_null_and_missing_meals() {
        let null: Meals<MealSummary> = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(null.meals.is_none());

        let missing: Meals<MealSummary> = serde_json::from_str("{}").unwrap();
        assert!(missing.meals.is_none());
    }

    #[test]
    fn test_null_name_does_not_reject_the_list() {
        let list: Meals<MealSummary> = serde_json::from_str(
            r#"{"meals":[
                {"idMeal":"1","strMeal":null,"strMealThumb":null},
                {"idMeal":"2","strMeal":"Ok","strMealThumb":"ok.jpg"}
            ]}"#,
        )
        .unwrap();
        let meals = list.meals.unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "");
        assert_eq!(meals[1].name, "Ok");

        let categories: Meals<Category> =
            serde_json::from_str(r#"{"meals":[{"strCategory":null},{"strCategory":"Beef"}]}"#)
                .unwrap();
        let names: Vec<String> = categories.meals.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["", "Beef"]);
    }

    #[test]
    fn test_summary_without_thumbnail() {
        let list: Meals<MealSummary> =
            serde_json::from_str(r#"{"meals":[{"idMeal":"1","strMeal":"Arrabiata"}]}"#).unwrap();
        let meals = list.meals.unwrap();
        assert_eq!(meals[0].name, "Arrabiata");
        assert!(meals[0].thumbnail.is_none());
    }
}
