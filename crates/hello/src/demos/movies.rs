use serde::Deserialize;

use crate::ui::Ui;

const MOVIES_JSON: &str = include_str!("../../assets/movies.json");

pub fn movies(ui: &mut Ui<'_>) -> anyhow::Result<()> {
    /*!
    Discover the gross revenue of a movie of your liking!
    The data is a small sample bundled with the gallery, so no network is
    needed. Search it with `--input "Search movie titles=star"`.
    */
    let movies = load_movies()?;
    let query = ui.text_input("Search movie titles")?;
    let results = search(&movies, &query);

    ui.markdown(format!(
        "#### Result dataframe for {} movie(s)",
        results.len()
    ))?;
    ui.table(
        vec!["Title".to_owned(), "Revenue [$1M]".to_owned()],
        results
            .iter()
            .map(|movie| vec![movie.title.clone(), movie.revenue_millions().to_string()])
            .collect(),
    )?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Movie {
    pub title: String,
    /// Gross revenue in dollars.
    pub revenue: u64,
}

impl Movie {
    /// Revenue in millions of dollars, rounded half up.
    pub const fn revenue_millions(&self) -> u64 {
        (self.revenue + 500_000) / 1_000_000
    }
}

pub(crate) fn load_movies() -> serde_json::Result<Vec<Movie>> {
    serde_json::from_str(MOVIES_JSON)
}

/// Movies whose title contains `query` ignoring case, highest revenue first.
pub(crate) fn search<'m>(movies: &'m [Movie], query: &str) -> Vec<&'m Movie> {
    let needle = query.to_lowercase();
    let mut found: Vec<&Movie> = movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .collect();
    found.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    found
}
