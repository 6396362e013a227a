//! Parse command implementation

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};
use yakulint_ast::AstArena;
use yakulint_core::{JsonProcessor, PluginOptions, Processor, ProcessorError, VueI18nProcessor};

/// Path argument that reads from stdin.
const STDIN_PATH: &str = "-";

pub fn run_parse(
    mut options: PluginOptions,
    files: &[PathBuf],
    locales: Vec<String>,
    resources: Vec<String>,
    compact: bool,
) -> Result<()> {
    if !locales.is_empty() {
        options.locales = Some(locales);
    }
    options.resources.extend(resources);

    let vue = VueI18nProcessor::new(&options).into_diagnostic()?;
    let json = JsonProcessor::new();

    let mut outputs = Vec::with_capacity(files.len());
    for file in files {
        let path = (file.as_os_str() != STDIN_PATH).then_some(file.as_path());
        let text = read_source(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", file.display()))?;

        let output = match path {
            Some(path) if has_extension(path, "json") && !vue.is_resource(path) => {
                parse_with(&json, &text, Some(path))
            }
            Some(path) if has_extension(path, "json") || has_extension(path, "vue") => {
                parse_with(&vue, &text, Some(path))
            }
            Some(path) => Err(miette::miette!(
                "Unsupported file type: {} (expected .vue or .json)",
                path.display()
            )),
            None => parse_with(&vue, &text, None),
        }?;
        outputs.push(output);
    }

    info!("Parsed {} file(s)", outputs.len());

    let value = if outputs.len() == 1 {
        outputs.remove(0)
    } else {
        serde_json::Value::Array(outputs)
    };
    let rendered = if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
    .into_diagnostic()?;

    println!("{}", rendered);
    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String, ProcessorError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn parse_with<P: Processor>(
    processor: &P,
    text: &str,
    path: Option<&Path>,
) -> Result<serde_json::Value> {
    let arena = AstArena::new();
    let ast = processor
        .pre_process(&arena, text, path)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Failed to parse {}",
                path.map_or("<stdin>".into(), |p| p.display().to_string())
            )
        })?;
    debug!("Extracted {} string(s)", ast.children.len());

    let result = processor.post_process(Vec::<serde_json::Value>::new(), path);
    Ok(serde_json::json!({
        "filePath": result.file_path,
        "ast": serde_json::to_value(ast).into_diagnostic()?,
    }))
}
