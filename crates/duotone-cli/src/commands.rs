//! Command implementations.
//!
//! Each command returns its output as a string so `main` owns printing.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use console::style;
use duotone::{
    compute_scoped_duotone_selectors, gradient_from_colors, resolve_colors_from_preset,
    resolve_preset_from_colors, Block, BlockType, BlockTypeRegistry, DuotoneEditor,
    DuotoneOptions, DuotonePalette, Settings, Stylesheet,
};
use serde::de::DeserializeOwned;

fn load_settings(path: &Path) -> Result<Settings> {
    Settings::from_path(path).with_context(|| format!("loading settings from {}", path.display()))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("parsing {}", path.display()))
}

pub fn palette(settings: &Path) -> Result<String> {
    let palette = DuotonePalette::from_source(&load_settings(settings)?);
    if palette.is_empty() {
        return Ok("no duotone presets".to_string());
    }

    let width = palette.iter().map(|p| p.slug.len()).max().unwrap_or(0);
    let lines: Vec<String> = palette
        .iter()
        .map(|preset| {
            let mut line = format!(
                "{}  {}",
                style(format!("{:<width$}", preset.slug, width = width)).bold(),
                preset.colors.join(" ")
            );
            if let Some(name) = &preset.name {
                line.push_str(&format!("  {}", style(format!("({})", name)).dim()));
            }
            line
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn resolve(settings: &Path, reference: &str) -> Result<String> {
    let palette = DuotonePalette::from_source(&load_settings(settings)?);
    resolve_colors_from_preset(Some(reference), palette.presets())
        .map(|colors| colors.join("\n"))
        .ok_or_else(|| anyhow!("no duotone preset matches '{}'", reference))
}

pub fn match_colors(settings: &Path, colors: &[String]) -> Result<String> {
    let palette = DuotonePalette::from_source(&load_settings(settings)?);
    resolve_preset_from_colors(colors, palette.presets())
        .ok_or_else(|| anyhow!("no duotone preset has colors {}", colors.join(", ")))
}

pub fn scope(scope: &str, selectors: &str) -> String {
    compute_scoped_duotone_selectors(scope, selectors)
}

pub fn gradient(colors: &[String], angle: Option<&str>) -> String {
    gradient_from_colors(colors, angle)
}

pub fn render(settings: &Path, block_types: &Path, blocks: &Path) -> Result<String> {
    let options = DuotoneOptions::from_settings(&load_settings(settings)?);
    let registry = BlockTypeRegistry::from_block_types(load_json::<Vec<BlockType>>(block_types)?)
        .context("registering block types")?;
    let blocks: Vec<Block> = load_json(blocks)?;

    let editor = DuotoneEditor::new(&registry, options)?;
    let mut stylesheet = Stylesheet::new();
    for block in &blocks {
        let rendered = editor
            .render_block(block, Some(&mut stylesheet))
            .with_context(|| format!("rendering block {}", block.client_id))?;
        tracing::debug!(
            block = %block.client_id,
            class_name = rendered.class_name.as_deref(),
            "rendered block"
        );
    }

    tracing::info!(blocks = blocks.len(), filters = stylesheet.len(), "rendered stylesheet");
    Ok(stylesheet.to_html())
}
