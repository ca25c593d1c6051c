//! Page templates.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Strict mode is on, so a template that reads a field the handler did not
//! supply fails to render instead of printing an empty string.

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::error::AppResult;

/// Shared page fragments, registered as partials.
const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../templates/partials/header.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
];

/// Full pages, one per route.
const PAGES: &[(&str, &str)] = &[
    ("index", include_str!("../templates/index.hbs")),
    ("labs", include_str!("../templates/labs.hbs")),
    ("notes", include_str!("../templates/notes.hbs")),
    ("marks", include_str!("../templates/marks.hbs")),
    ("admin_console", include_str!("../templates/admin_console.hbs")),
    ("labs_console", include_str!("../templates/labs_console.hbs")),
    ("users_console", include_str!("../templates/users_console.hbs")),
    ("notes_console", include_str!("../templates/notes_console.hbs")),
    ("post_console", include_str!("../templates/post_console.hbs")),
    ("marks_console", include_str!("../templates/marks_console.hbs")),
    ("add_group", include_str!("../templates/add_group.hbs")),
    ("add_student_console", include_str!("../templates/add_student_console.hbs")),
    ("add_news", include_str!("../templates/add_news.hbs")),
    ("reviews", include_str!("../templates/reviews.hbs")),
];

/// Compiled template registry.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Compile every page and partial.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    /// Render page `name` with `ctx`.
    pub fn render<T: Serialize>(&self, name: &str, ctx: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, ctx)?))
    }

    /// Whether a page named `name` is registered.
    pub fn has_page(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}
