//! glprobe
//!
//! Opens a native GL library, binds the glbind catalog from it and reports
//! which entry points resolved. No context is created and nothing is called:
//! this only exercises symbol resolution.
//!
//! ```text
//! glprobe                          # platform default library
//! glprobe --library libGLESv2.so   # explicit library
//! glprobe --strict --json          # optional entries required, JSON output
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use glbind::{BindReport, BindSettings, Gl, LibraryResolver, OptionalPolicy};

#[derive(Debug, Parser)]
#[command(name = "glprobe", version, about = "Probe a native GL library for glbind entry points")]
struct Args {
    /// Library path or soname; platform defaults are tried when omitted.
    #[arg(long)]
    library: Option<String>,

    /// Context label used in reports and errors.
    #[arg(long, default_value = "probe")]
    context: String,

    /// Treat optional entry points as required.
    #[arg(long)]
    strict: bool,

    /// Treat the WGL error sentinels (1, 2, 3, -1) as missing. Always on for Windows.
    #[arg(long)]
    reject_sentinels: bool,

    /// Print the bind report as JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> BindSettings {
        let policy = if self.strict {
            OptionalPolicy::Require
        } else {
            OptionalPolicy::Tolerate
        };

        BindSettings::default()
            .with_context_label(self.context.clone())
            .with_optional_policy(policy)
            .with_platform_sentinels_rejected(self.reject_sentinels || cfg!(windows))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut resolver = match &args.library {
        Some(path) => LibraryResolver::open(path.as_str())?,
        None => LibraryResolver::open_first(glbind::default_library_names().iter().copied())
            .context("no platform GL library could be opened; pass --library")?,
    };
    log::info!("Resolving GL entry points from '{}'", resolver.path());

    let gl = Gl::load_with_settings(&mut resolver, &args.settings())
        .with_context(|| format!("binding GL from '{}'", resolver.path()))?;

    let report = gl.table().report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &BindReport) {
    println!(
        "context '{}' via '{}': {}/{} entry points bound",
        report.context, report.resolver, report.loaded, report.total
    );

    for entry in &report.entries {
        match entry.resolved_as {
            Some(alias) => println!("  {:<32} {} (as {alias})", entry.name, entry.address),
            None => println!("  {:<32} {}", entry.name, entry.address),
        }
    }

    for name in &report.missing_optional {
        println!("  {name:<32} missing (optional)");
    }
}
