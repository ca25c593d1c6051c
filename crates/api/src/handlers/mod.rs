//! Request handlers, one module per area of the portal.
//!
//! Every handler receives the store through `State<AppState>`; none keeps
//! state of its own between requests.

pub mod groups;
pub mod labs;
pub mod marks;
pub mod news;
pub mod notes;
pub mod reviews;
pub mod users;

use axum::Form;

/// A url-encoded form body as ordered pairs, so repeated keys such as
/// `labs[]` survive extraction.
pub type FormPairs = Form<Vec<(String, String)>>;
