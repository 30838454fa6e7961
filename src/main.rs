use clap::Parser;
use fs_err as fs;
use std::path::Path;
use std::time::Duration;

mod cli;
mod config;
mod docs;
mod emit;
mod errors;
mod prompt;
mod provider;
mod scaffold;
mod ux;
mod wire;

use errors::ForgeError;
use scaffold::{Configuration, FileMapping};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::load(args.config.as_deref())?;
    if let Some(secs) = args.timeout_secs {
        cfg.timeout_secs = secs;
    }
    if let Some(ms) = args.delay_ms {
        cfg.delay_ms = ms;
    }

    // ===== DOCS LOOKUP =====
    if !args.docs.is_empty() {
        let mut cache = docs::DocsCache::new(docs::CACHE_TTL);
        for topic in &args.docs {
            match cache.lookup(topic) {
                Some(t) => ux::print_doc_topic(&t),
                None => println!("no documentation entry for '{topic}'"),
            }
        }
        return Ok(());
    }

    // ===== REQUEST =====
    let request = build_request(&args)?;
    request.validate()?;

    let kind = args.provider.or_else(provider_from_env);
    if args.debug {
        match kind {
            Some(k) => eprintln!("debug: remote generation via {k:?}"),
            None => eprintln!("debug: local assembly, delay {}ms", cfg.delay_ms),
        }
    }

    // ===== GENERATE =====
    let spin = ux::spinner("generating scaffold...");
    let result: Result<FileMapping, ForgeError> = match kind {
        None => {
            // Latency contract of the local path; assembly itself is pure.
            if cfg.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(cfg.delay_ms)).await;
            }
            Ok(scaffold::assemble(&request))
        }
        Some(kind) => {
            generate_remote(kind, &request, &cfg, args.model.as_deref(), args.debug).await
        }
    };
    spin.finish_and_clear();

    // ===== OUTPUT =====
    if args.json {
        let response = match &result {
            Ok(files) => wire::GenerateResponse::ok(files.clone()),
            Err(e) => wire::GenerateResponse::err(e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        if result.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let files = result?;
    ux::print_file_tree(&files);

    if let Some(out) = &args.out {
        let summary = emit::write_mapping(Path::new(out), &files)?;
        ux::print_emit_dashboard(&summary);
    }

    Ok(())
}

fn build_request(args: &cli::Args) -> anyhow::Result<Configuration> {
    if let Some(path) = &args.request {
        let text = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&text)?);
    }
    Ok(Configuration {
        app_type: args.app_type,
        framework: args.framework,
        features: args.features.iter().copied().collect(),
        description: args.description.clone().unwrap_or_default(),
    })
}

fn provider_from_env() -> Option<cli::ProviderKind> {
    let raw = std::env::var("SHOPFORGE_PROVIDER").ok()?;
    <cli::ProviderKind as clap::ValueEnum>::from_str(&raw, true).ok()
}

async fn generate_remote(
    kind: cli::ProviderKind,
    request: &Configuration,
    cfg: &config::Config,
    model_override: Option<&str>,
    debug: bool,
) -> Result<FileMapping, ForgeError> {
    let prov = provider::make_provider(kind, cfg, model_override)?;
    let prompt_text = prompt::build_prompt(request);
    if debug {
        eprintln!("debug[{}]: prompt:\n{}", prov.name(), prompt_text);
    }
    let raw = prov.generate(&prompt_text, debug).await?;
    wire::parse_files_response(&raw)
}
