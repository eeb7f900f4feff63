use std::borrow::Cow;

use serde::Serialize;

mod index;
pub use index::index;

mod logout;
pub use logout::logout;

pub mod cookie_lab;
pub mod errors;

#[derive(Serialize)]
pub struct TemplateBase {
    pub title: Cow<'static, str>,
}
