//! Tera renderer with the house formatting helpers installed as filters

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::core::Result;
use crate::generation::{TargetLanguage, formatting};

const DEFAULT_INDENT: usize = 16;

fn text_arg<'a>(value: &'a JsonValue, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("Filter `{filter}` expects a string")))
}

/// Install `indented`, `lowercase_first`, `titlecase`, `unescape` and `multiline_comment`
pub fn register_filters(tera: &mut Tera, target: TargetLanguage) {
    tera.register_filter(
        "indented",
        |value: &JsonValue, args: &HashMap<String, JsonValue>| {
            let width = match args.get("width") {
                Some(width) => width
                    .as_u64()
                    .ok_or_else(|| tera::Error::msg("Filter `indented`: width must be a number"))?
                    as usize,
                None => DEFAULT_INDENT,
            };
            Ok(JsonValue::String(formatting::indent(
                text_arg(value, "indented")?,
                width,
            )))
        },
    );
    tera.register_filter(
        "lowercase_first",
        |value: &JsonValue, _: &HashMap<String, JsonValue>| {
            Ok(JsonValue::String(formatting::lowercase_first(text_arg(
                value,
                "lowercase_first",
            )?)))
        },
    );
    tera.register_filter(
        "titlecase",
        |value: &JsonValue, _: &HashMap<String, JsonValue>| {
            Ok(JsonValue::String(formatting::titlecase(text_arg(
                value,
                "titlecase",
            )?)))
        },
    );
    tera.register_filter(
        "unescape",
        |value: &JsonValue, _: &HashMap<String, JsonValue>| {
            Ok(JsonValue::String(formatting::unescape(text_arg(
                value, "unescape",
            )?)))
        },
    );
    let continuation = target.comment_continuation();
    tera.register_filter(
        "multiline_comment",
        move |value: &JsonValue, _: &HashMap<String, JsonValue>| {
            Ok(JsonValue::String(formatting::multiline_comment(
                text_arg(value, "multiline_comment")?,
                continuation,
            )))
        },
    );
}

/// Tera-based renderer for one target language
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    pub fn new(target: TargetLanguage) -> Self {
        let mut tera = Tera::default();
        register_filters(&mut tera, target);
        Self { tera }
    }

    pub fn add_raw_template(&mut self, name: &str, content: &str) -> Result<()> {
        self.tera.add_raw_template(name, content)?;
        Ok(())
    }

    /// Render a registered template against any serializable context
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(name, &context)?)
    }
}
