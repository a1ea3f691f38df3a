//! Command implementations
//!
//! Each command writes its output to the given writer so it can be exercised
//! without a terminal.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use castpage_core::{PageAttributes, ThemeRecord, UiState};
use castpage_mapper::{apply_update, ThemeMapper};
use castpage_preview::{CssVariables, PreviewRenderer};
use castpage_registry::{ThemeCatalog, ThemePreset};
use serde_json::Value;

use crate::config::OutputFormat;

/// Read a JSON file
fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Read a JSON object file (UI state or page attributes)
fn read_object(path: &Path) -> Result<serde_json::Map<String, Value>> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        _ => bail!("{} must contain a JSON object", path.display()),
    }
}

fn read_optional_object(path: Option<&Path>) -> Result<Option<serde_json::Map<String, Value>>> {
    path.map(read_object).transpose()
}

pub fn read_theme(path: &Path) -> Result<ThemeRecord> {
    ThemeRecord::from_value(read_json(path)?)
        .with_context(|| format!("Invalid theme record in {}", path.display()))
}

/// Theme from a file, or from a preset id when no file is given
pub fn resolve_theme(theme: Option<&Path>, preset: &str) -> Result<ThemeRecord> {
    if let Some(path) = theme {
        return read_theme(path);
    }
    match ThemePreset::from_id(preset) {
        Some(preset) => Ok(preset.record()),
        None => {
            let known: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
            bail!("Unknown preset `{preset}` (expected one of: {})", known.join(", "))
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

fn write_variables(out: &mut impl Write, vars: &CssVariables, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, vars),
        OutputFormat::Css => {
            writeln!(out, ":root {{")?;
            for (name, value) in vars.iter() {
                writeln!(out, "  {name}: {value};")?;
            }
            writeln!(out, "}}")?;
            Ok(())
        }
    }
}

pub fn render(
    out: &mut impl Write,
    theme: &ThemeRecord,
    ui: Option<&Path>,
    page: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let ui: Option<UiState> = read_optional_object(ui)?;
    let page: Option<PageAttributes> = read_optional_object(page)?;
    let vars = PreviewRenderer::builtin().generate_css_variables(theme, ui.as_ref(), page.as_ref());
    tracing::debug!("rendered {} variables", vars.len());
    write_variables(out, &vars, format)
}

pub fn load(
    out: &mut impl Write,
    theme: &Path,
    page: Option<&Path>,
    ui: Option<&Path>,
) -> Result<()> {
    let theme = read_theme(theme)?;
    let page = read_optional_object(page)?;
    let existing = read_optional_object(ui)?;
    let state = ThemeMapper::builtin().database_to_ui(&theme, page.as_ref(), existing.as_ref());
    write_json(out, &state)
}

/// Persisted shape for a UI state; merged into `theme` when one is given
pub fn save(out: &mut impl Write, ui: &Path, theme: Option<&Path>) -> Result<()> {
    let state = read_object(ui)?;
    let update = ThemeMapper::builtin().ui_to_database(&state);
    match theme {
        None => write_json(out, &update),
        Some(path) => {
            let merged = apply_update(&read_theme(path)?, update)
                .context("Failed to merge update into theme")?;
            write_json(out, &merged)
        }
    }
}

pub fn defaults(out: &mut impl Write) -> Result<()> {
    write_json(out, &ThemeMapper::builtin().default_ui_state())
}

pub fn fields(out: &mut impl Write, section: Option<&str>, implemented_only: bool) -> Result<()> {
    let catalog = ThemeCatalog::builtin();
    let fields = match section {
        Some(id) => {
            if catalog.sections().get(id).is_none() {
                bail!("Unknown section `{id}`");
            }
            catalog.section_fields(id)
        }
        None => catalog.fields().iter().collect(),
    };

    for field in fields.into_iter().filter(|f| f.implemented || !implemented_only) {
        let marker = if field.implemented { ' ' } else { '*' };
        writeln!(
            out,
            "{marker} {:<32} {:<12} {}",
            field.id,
            field.field_type.as_str(),
            field.token_path
        )?;
    }
    Ok(())
}

pub fn sections(out: &mut impl Write) -> Result<()> {
    let catalog = ThemeCatalog::builtin();
    for section in catalog.sections().all_sections() {
        writeln!(
            out,
            "{:>2} {:<18} {:<20} {} fields",
            section.order,
            section.id,
            section.title,
            catalog.section_fields(&section.id).len()
        )?;
    }
    Ok(())
}

pub fn presets(out: &mut impl Write) -> Result<()> {
    for preset in ThemePreset::all() {
        let record = preset.record();
        let swatches: Vec<String> = record.swatches(5).iter().map(|c| c.to_hex()).collect();
        writeln!(
            out,
            "{:<12} {:<12} {}",
            preset.id(),
            preset.display_name(),
            swatches.join(" ")
        )?;
    }
    Ok(())
}

/// Parse a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Returns whether the value is valid for the field
pub fn validate(out: &mut impl Write, field: &str, raw: &str) -> Result<bool> {
    let mapper = ThemeMapper::builtin();
    if mapper.catalog().field(field).is_none() {
        bail!("Unknown field `{field}`");
    }
    let value = parse_value(raw);
    let valid = mapper.validate_field_value(field, &value);
    writeln!(out, "{field} = {value}: {}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}
