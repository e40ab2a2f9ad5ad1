use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::geometry::Area;
use crate::runner::{OperationResult, ScriptRun};

#[derive(Serialize)]
struct JsonOutput<'a> {
    meta: Meta,
    grid: Size,
    results: &'a [OperationResult],
    areas: Vec<Area>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Size {
    n: i32,
    m: i32,
}

/// Render a finished run as JSON
pub fn render_json(run: &ScriptRun, pretty: bool) -> Result<String> {
    let output = JsonOutput {
        meta: Meta {
            app: "areafield",
            version: env!("CARGO_PKG_VERSION"),
        },
        grid: Size {
            n: run.field.n(),
            m: run.field.m(),
        },
        results: &run.results,
        areas: run.field.all_areas(),
    };

    let content = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(content)
}

/// Write the JSON report to `path`, or to stdout when no path is given
pub fn write_json(run: &ScriptRun, path: Option<&Path>, pretty: bool) -> Result<()> {
    let mut content = render_json(run, pretty)?;
    content.push('\n');

    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .context("failed to write report to stdout")?,
    }

    Ok(())
}
