//! Extensions command implementation

use miette::{IntoDiagnostic, Result};
use yakulint_core::{JsonProcessor, PluginOptions, Processor, VueI18nProcessor};

pub fn run_extensions(options: &PluginOptions) -> Result<()> {
    let vue = VueI18nProcessor::new(options).into_diagnostic()?;
    let json = JsonProcessor::new();

    let mut extensions: Vec<&str> = Vec::new();
    for ext in vue
        .available_extensions()
        .iter()
        .chain(json.available_extensions())
    {
        if !extensions.contains(ext) {
            extensions.push(*ext);
        }
    }

    for ext in extensions {
        println!("{}", ext);
    }
    Ok(())
}
