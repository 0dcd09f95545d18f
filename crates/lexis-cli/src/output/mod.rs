//! Rendering adapter: turns view models into text, tables or JSON.

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod text;

pub use text::TextView;

/// Render a view to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_text(ui::prefs().color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a view in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize + TextView>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    };

    if let Some(rows) = value.table() {
        if rows.rows.is_empty() {
            return Ok(String::from("(no rows)"));
        }
        return Ok(table::render_table(rows.headers, &rows.rows, options));
    }

    match serde_json::to_value(value)? {
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
            Ok(table::render_table(&["value"], &rows, options))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use lexis_core::view::{SearchRow, SearchView, SourceLink};

    use super::render;
    use crate::cli::OutputFormat;

    fn view() -> SearchView {
        SearchView {
            query: "short".into(),
            total: 1,
            results: vec![SearchRow {
                term: "ephemeral".into(),
                part_of_speech: Some("adjective".into()),
                pronunciation: None,
                short_definition: Some("lasting a short time".into()),
                sources: vec![SourceLink {
                    name: "Dict".into(),
                    url: "https://dict.example/ephemeral".into(),
                }],
            }],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&view(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total"], 1);
        assert_eq!(parsed["results"][0]["term"], "ephemeral");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&view(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["query"], "short");
    }

    #[test]
    fn table_render_lists_result_rows() {
        let out = render(&view(), OutputFormat::Table).expect("table render should work");
        let mut lines = out.lines();
        let header = lines.next().expect("header");
        assert!(header.starts_with("term"));
        assert!(header.contains("definition"));
        assert!(out.contains("ephemeral"));
        assert!(out.contains("https://dict.example/ephemeral"));
    }

    #[test]
    fn object_views_fall_back_to_key_value_table() {
        let view = lexis_core::view::FactView::Entry {
            fact: "Honey never spoils.".into(),
        };
        let out = render(&view, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("Honey never spoils."));
    }

    #[test]
    fn empty_table_says_so() {
        let mut empty = view();
        empty.results.clear();
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
