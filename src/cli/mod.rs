//! `quick_add_widget_cli`: renders a preference snapshot off-device.

use std::io::IsTerminal;
use std::path::PathBuf;

use colored::Colorize;

use crate::config::WidgetConfig;
use crate::errors::WidgetError;
use crate::preferences::MemoryPreferences;
use crate::render::{table::slot_table, ViewUpdate, WidgetRenderer};
use crate::utils::build_info;

pub const USAGE: &str =
    "usage: quick_add_widget_cli <snapshot.json> [--json] [--widget-id <id>] [--config <path>] [--version]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub snapshot: Option<PathBuf>,
    pub json: bool,
    pub widget_id: i32,
    pub config: Option<PathBuf>,
    pub show_version: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            snapshot: None,
            json: false,
            widget_id: 1,
            config: None,
            show_version: false,
        }
    }
}

impl CliOptions {
    pub fn parse<I>(args: I) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--version" | "-V" => options.show_version = true,
                "--widget-id" => {
                    let raw = args.next().ok_or_else(|| missing_value(&arg))?;
                    options.widget_id = raw.parse().map_err(|_| {
                        WidgetError::InvalidInput(format!("`{raw}` is not a widget id"))
                    })?;
                }
                "--config" => {
                    let raw = args.next().ok_or_else(|| missing_value(&arg))?;
                    options.config = Some(PathBuf::from(raw));
                }
                flag if flag.starts_with('-') => {
                    return Err(WidgetError::InvalidInput(format!(
                        "unknown option `{flag}`\n{USAGE}"
                    )));
                }
                _ if options.snapshot.is_some() => {
                    return Err(WidgetError::InvalidInput(format!(
                        "unexpected argument `{arg}`\n{USAGE}"
                    )));
                }
                _ => options.snapshot = Some(PathBuf::from(&arg)),
            }
        }

        if options.snapshot.is_none() && !options.show_version {
            return Err(WidgetError::InvalidInput(format!(
                "missing snapshot path\n{USAGE}"
            )));
        }
        Ok(options)
    }
}

fn missing_value(flag: &str) -> WidgetError {
    WidgetError::InvalidInput(format!("`{flag}` expects a value"))
}

/// Entry point used by the binary.
pub fn run_cli() -> Result<(), WidgetError> {
    let options = CliOptions::parse(std::env::args().skip(1))?;
    let output = render_output(&options)?;
    println!("{output}");
    Ok(())
}

/// Produces everything the CLI prints for `options`.
pub fn render_output(options: &CliOptions) -> Result<String, WidgetError> {
    if options.show_version {
        return Ok(build_info::current().summary());
    }

    let config = match &options.config {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    };
    let Some(snapshot) = &options.snapshot else {
        return Err(WidgetError::InvalidInput(USAGE.into()));
    };
    let prefs = MemoryPreferences::load(snapshot)?;
    tracing::debug!(path = %snapshot.display(), keys = prefs.len(), "loaded preference snapshot");

    let renderer = WidgetRenderer::new(config);
    let widget = renderer.render_store(&prefs);
    let update = ViewUpdate::from_rendered(options.widget_id, &widget, &renderer.config().scheme);

    if options.json {
        return update.to_json();
    }

    let styled = std::io::stdout().is_terminal();
    let heading = format!("Quick Add widget #{}", update.widget_id);
    let heading = if styled {
        heading.bold().to_string()
    } else {
        heading
    };
    Ok(format!("{heading}\n{}", slot_table(&update, styled).render()))
}
