//! Subcommand implementations

use anyhow::{bail, Context, Result};
use catalog_app::grid::grid_metrics;
use catalog_app::headless_runner::run_loaded_scenario;
use catalog_app::headless_scenario::HeadlessScenario;
use catalog_app::previewer::DEFAULT_BOUNDS;
use catalog_app::prelude::*;
use catalog_app::CatalogConfig;
use catalog_theme::SchemePreset;
use std::path::Path;

fn navigator(config: &CatalogConfig) -> Result<CatalogNavigator> {
    let tree = build_navigation_tree(&config.catalog.title, catalog_registrations());
    let container = ContainerScheme {
        color_scheme: config.color_scheme()?,
        ..ContainerScheme::default()
    };
    Ok(CatalogNavigator::new(tree, container))
}

pub fn tree(config: &CatalogConfig) -> Result<()> {
    let nav = navigator(config)?;
    println!("{}", nav.tree().title());
    for (depth, node) in nav.tree().descendants() {
        let mut flags = Vec::new();
        if node.is_primary_demo() {
            flags.push("primary");
        }
        if node.is_debug() {
            flags.push("debug");
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        println!("{}{}{}", "  ".repeat(depth + 1), node.title(), suffix);
    }
    Ok(())
}

pub fn demos(config: &CatalogConfig, component: &str) -> Result<()> {
    let mut nav = navigator(config)?;
    nav.open(component)?;
    if let Screen::NodeList { description, .. } = nav.top() {
        if !description.is_empty() {
            println!("{description}\n");
        }
    }
    for (row, demo) in nav.demo_rows()?.iter().enumerate() {
        let marker = if demo.is_primary_demo() { "*" } else { " " };
        println!("{row:>2} {marker} {}", demo.title());
    }
    Ok(())
}

pub fn open(config: &CatalogConfig, component: &str, demo: usize) -> Result<()> {
    let mut nav = navigator(config)?;
    nav.open(component)?;
    if nav.demo_rows().is_ok() {
        nav.select_demo(demo)?;
    }
    let screen = nav.top();
    let controller = screen
        .controller()
        .with_context(|| format!("`{component}` has no example to open"))?;
    tracing::info!(example = controller.title(), "opened example");
    println!("{}", controller.title());
    println!("{}", controller.summary());
    let menu = screen.menu_button();
    println!("menu: {} ({})", menu.accessibility_label, menu.accessibility_hint);
    Ok(())
}

pub fn grid(config: &CatalogConfig, width: Option<f32>, height: Option<f32>) -> Result<()> {
    let device = &config.device;
    let viewport = Size::new(
        width.unwrap_or(device.width),
        height.unwrap_or(device.height),
    );
    let metrics = grid_metrics(
        viewport,
        device.size_class,
        device.divider_width,
        device.safe_area,
    );
    println!(
        "{}x{} {:?}: {} columns, cell {:.1}",
        viewport.width, viewport.height, device.size_class, metrics.columns, metrics.cell_size
    );

    let nav = navigator(config)?;
    let typography = &nav.container_scheme().typography_scheme;
    for (index, cell) in nav.grid_cells().iter().enumerate() {
        let frame = metrics.cell_frame(index, device.safe_area);
        let layout = cell.layout(frame.size(), &typography.body1);
        println!(
            "{:<20} at ({:.1}, {:.1}) tile ({:.1}, {:.1})",
            cell.title(),
            frame.x(),
            frame.y(),
            frame.x() + layout.tile.x(),
            frame.y() + layout.tile.y()
        );
    }
    if metrics.cell_size == 0.0 {
        tracing::warn!("viewport too narrow for any cell");
    }
    Ok(())
}

pub fn scheme(config: &CatalogConfig, preset: Option<&str>) -> Result<()> {
    let scheme = match preset {
        Some(name) => name.parse::<SchemePreset>()?.scheme(),
        None => config.color_scheme()?,
    };
    for (property, color) in scheme.iter() {
        println!("{:<15} {}", property.id(), color);
    }
    Ok(())
}

pub fn preview(config: &CatalogConfig, scenario: &Path, report: Option<&Path>) -> Result<()> {
    let scenario = HeadlessScenario::from_path(scenario)?;
    let mut previewer = ThemePreviewer::new(config.color_scheme()?, DEFAULT_BOUNDS);
    let outcome = run_loaded_scenario(&scenario, &mut previewer);

    match report {
        Some(path) => {
            outcome.report().write_to_path(path)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => outcome.report().write_to_writer(&mut std::io::stdout().lock())?,
    }

    if outcome.is_failed() {
        let report = outcome.report();
        bail!(
            "scenario failed at step {}: {}",
            report.failed_step_index.unwrap_or_default(),
            report.message.as_deref().unwrap_or("unknown failure")
        );
    }
    Ok(())
}
