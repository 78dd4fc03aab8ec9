//! `tessera check` and `tessera list`.

use std::sync::Arc;

use anyhow::{Context, bail};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use tessera_config::{Config, ConfigValidator};
use tessera_core::{
    ComponentData, ComponentRegistry, ExtensionCatalog, ExtensionManager, RenderInput,
    render_component,
};
use tessera_protocols::{ComponentClass, OnComponentClassCreatedContext, OnComponentClassDeletedContext};

use crate::cli::OutputFormat;

const PROBE: &str = "probe";

/// One active extension, as seen by the probe component.
#[derive(Debug, Serialize)]
pub(crate) struct ExtensionReport {
    pub name: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Resolution order of the probe's augmented class.
    pub mro: Vec<String>,
}

/// Outcome of a probe render.
#[derive(Debug, Serialize)]
pub(crate) struct ProbeReport {
    pub component_id: String,
    pub kwargs: Map<String, Value>,
    pub context_data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    pub extensions: Vec<ExtensionReport>,
    pub warnings: Vec<String>,
    pub probe: ProbeReport,
}

/// Build the configured extensions, start them up, and render a probe
/// component through every hook.
pub(crate) fn run_check(config: &Config, catalog: &ExtensionCatalog) -> anyhow::Result<CheckReport> {
    let available: Vec<&str> = catalog.available().into_iter().map(|(name, _)| name).collect();
    let validation = ConfigValidator::validate_against(config, &available);
    let warnings: Vec<String> = validation
        .warnings
        .iter()
        .map(|w| format!("{}: {}", w.path, w.message))
        .collect();
    for warning in &warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        let errors: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let manager = Arc::new(
        catalog
            .build_manager(&config.extensions.enabled, &config.extensions.settings)
            .context("Failed to build extensions")?,
    );

    // Declared before initialization, like any component defined at startup.
    let probe = ComponentClass::new("Probe");
    manager.on_component_class_created(OnComponentClassCreatedContext::new(probe.clone()))?;
    let registry = ComponentRegistry::new("check", manager.clone())?;
    registry.register(PROBE, probe.clone())?;

    manager.initialize().context("Extension startup failed")?;
    info!(extensions = manager.extensions().len(), "Extensions initialized");

    let outcome = render_component(
        &manager,
        &probe,
        RenderInput::new().registered_name(PROBE),
        |_component, input| Ok(ComponentData::new(input.kwargs.clone())),
    )
    .context("Probe render failed")?;

    let extensions = manager
        .extensions()
        .iter()
        .map(|ext| ExtensionReport {
            name: ext.name().to_string(),
            class_name: ext.class_name().to_string(),
            description: ext.meta().description.clone(),
            mro: probe
                .augmented_class(ext.class_name())
                .map(|cls| cls.mro_names().into_iter().map(String::from).collect())
                .unwrap_or_default(),
        })
        .collect();

    registry.close()?;
    manager.on_component_class_deleted(OnComponentClassDeletedContext::new(probe))?;

    Ok(CheckReport {
        extensions,
        warnings,
        probe: ProbeReport {
            component_id: outcome.component.id().to_string(),
            kwargs: outcome.input.kwargs,
            context_data: outcome.data.context_data,
        },
    })
}

pub(crate) fn print_check(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            if report.extensions.is_empty() {
                println!("No extensions enabled.");
            }
            for ext in &report.extensions {
                println!("{:<12} {:<16} {}", ext.name, ext.class_name, ext.mro.join(" -> "));
            }
            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
            println!(
                "probe {}: kwargs {}, context data {}",
                report.probe.component_id,
                Value::Object(report.probe.kwargs.clone()),
                Value::Object(report.probe.context_data.clone()),
            );
        }
    }
    Ok(())
}

pub(crate) fn print_list(catalog: &ExtensionCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let list: Vec<Value> = catalog
                .available()
                .into_iter()
                .map(|(name, description)| {
                    serde_json::json!({ "name": name, "description": description })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Table => {
            for (name, description) in catalog.available() {
                println!("{:<12} {}", name, description);
            }
        }
    }
    Ok(())
}
