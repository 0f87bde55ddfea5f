//! Page rendering via `minijinja`.
//!
//! Both templates are compiled into the binary. Template names end in
//! `.html`, so `minijinja` auto-escapes every interpolated value.

use groupie_types::{Artist, MergedView};
use minijinja::{Environment, context};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const ARTIST_TEMPLATE: &str = include_str!("../templates/artist.html");

/// Errors raised while loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// The listing and detail page templates.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("artist.html", ARTIST_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the listing page for `artists`.
    pub fn render_index(&self, artists: &[Artist]) -> Result<String, ViewError> {
        let html = self
            .env
            .get_template("index.html")?
            .render(context! { artists => artists })?;
        Ok(html)
    }

    /// Render the detail page for one merged view.
    pub fn render_artist(&self, view: &MergedView) -> Result<String, ViewError> {
        let html = self.env.get_template("artist.html")?.render(view)?;
        Ok(html)
    }
}
