use super::{IdStrategy, Record};
use crate::seed::Faker;
use crate::validation::{FieldRules, ValidationRule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const CATALOG: &[(&str, i32, &str)] = &[
    ("Inception", 2010, "Sci-fi"),
    ("The Dark Knight", 2008, "Action"),
    ("Interstellar", 2014, "Sci-fi"),
    ("The Hunger Games on Fire", 2014, "Action"),
];

/// Number of fixed movies the collection starts with.
pub const FIXTURE_COUNT: usize = CATALOG.len();

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Movie {
    fn from_entry((title, year, category): (&str, i32, &str)) -> Self {
        Self {
            id: String::new(),
            title: Some(title.to_string()),
            year: Some(year),
            category: Some(category.to_string()),
        }
    }

    /// The fixed starting set, ids "1" through "4".
    pub fn fixtures() -> Vec<Movie> {
        CATALOG
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut movie = Movie::from_entry(*entry);
                movie.id = (i + 1).to_string();
                movie
            })
            .collect()
    }
}

impl Record for Movie {
    const KIND: &'static str = "Movie";
    const PATH: &'static str = "movies";
    const TAG: &'static str = "Movies";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;
    const RULES: FieldRules = &[
        ("title", ValidationRule::required().min_length(1)),
        ("year", ValidationRule::required().minimum(1888.0)),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn generate(faker: &mut Faker) -> Self {
        let i = faker.index(CATALOG.len());
        Movie::from_entry(CATALOG[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_sequential_ids() {
        let movies = Movie::fixtures();
        let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(movies[0].title.as_deref(), Some("Inception"));
        assert_eq!(movies[3].year, Some(2014));
    }

    #[test]
    fn generated_movies_come_from_the_fixture_catalog() {
        let mut faker = Faker::seeded(3);
        let titles: Vec<String> = Movie::fixtures().into_iter().filter_map(|m| m.title).collect();
        for _ in 0..20 {
            let movie = Movie::generate(&mut faker);
            assert!(titles.contains(movie.title.as_ref().unwrap()));
            assert!(movie.id.is_empty());
        }
    }
}
