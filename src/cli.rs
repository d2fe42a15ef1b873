//! Command-line driver.
//!
//! Replays a sequence of edit steps against a fresh store and prints the
//! resulting snapshot, which makes the state core scriptable without a UI.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use parking_lot::Mutex;

use crate::catalog::{TemplateCatalog, TemplateId};
use crate::config::Config;
use crate::creator::{CreatorIntent, CreatorState};
use crate::points::PointRules;
use crate::stats::STATS;
use crate::store::CreatorStore;

#[derive(Debug, Parser)]
#[command(
    name = "character-creator",
    version,
    about = "Build a character under a fixed point budget"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available templates
    Templates {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply edit steps in order and print the final snapshot
    Run {
        /// Print every published snapshot as a JSON line
        #[arg(long)]
        trace: bool,

        /// Steps: name=TEXT, class=TEXT, desc=TEXT, select=CLASS|Custom,
        /// stat=KEY:DELTA
        #[arg(value_name = "STEP", value_parser = parse_step)]
        steps: Vec<CreatorIntent>,
    },
}

/// Parse one `kind=value` step into an intent.
pub fn parse_step(raw: &str) -> Result<CreatorIntent, String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{}'", raw))?;

    match kind {
        "name" => Ok(CreatorIntent::NameChanged(value.to_string())),
        "class" => Ok(CreatorIntent::ClassChanged(value.to_string())),
        "desc" => Ok(CreatorIntent::DescriptionChanged(value.to_string())),
        "select" => Ok(CreatorIntent::TemplateSelected(TemplateId::new(value))),
        "stat" => {
            let (key, delta) = value
                .rsplit_once(':')
                .ok_or_else(|| format!("expected stat=KEY:DELTA, got '{}'", raw))?;
            let delta = delta
                .parse::<i32>()
                .map_err(|e| format!("invalid delta '{}': {}", delta, e))?;
            Ok(CreatorIntent::StatChanged {
                key: key.to_string(),
                delta,
            })
        }
        other => Err(format!(
            "unknown step '{}' (expected name, class, desc, select or stat)",
            other
        )),
    }
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }

    /// Run the selected command, writing results to `out`.
    pub fn execute(self, out: &mut impl Write) -> anyhow::Result<()> {
        let config = self.load_config()?;
        match self.command {
            Command::Templates { json } => {
                write_templates(&config.catalog(), &config.rules(), json, out)
            }
            Command::Run { trace, steps } => run_steps(&config, steps, trace, out),
        }
    }
}

fn write_templates(
    catalog: &TemplateCatalog,
    rules: &PointRules,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog.list_all())
            .context("Failed to serialise templates")?;
        writeln!(out)?;
        return Ok(());
    }

    for template in catalog.list_all() {
        let character = template.character();
        let stats: Vec<String> = STATS
            .iter()
            .filter_map(|info| character.stat(info.name).map(|v| format!("{}={}", info.name, v)))
            .collect();
        writeln!(
            out,
            "{:<10} {:<12} {}  cost={}",
            template.char_class(),
            character.name(),
            stats.join(" "),
            rules.cost(character)
        )?;
    }
    Ok(())
}

fn run_steps(
    config: &Config,
    steps: Vec<CreatorIntent>,
    trace: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store = CreatorStore::from_config(config)?;

    let published: Arc<Mutex<Vec<Arc<CreatorState>>>> = Arc::default();
    let subscription = trace.then(|| {
        let sink = Arc::clone(&published);
        store.subscribe(move |state| sink.lock().push(Arc::clone(state)))
    });

    for step in steps {
        store.dispatch(step);
    }
    drop(subscription);

    for state in published.lock().iter() {
        let line = serde_json::to_string(state.as_ref()).context("Failed to serialise snapshot")?;
        writeln!(out, "{}", line)?;
    }

    let state = store.get_state();
    serde_json::to_writer_pretty(&mut *out, state.as_ref())
        .context("Failed to serialise snapshot")?;
    writeln!(out)?;
    Ok(())
}
