use anyhow::Result;
use medicine_scanner::{
    config::Config, i18n::Language, lookup::MedicineTable, orchestrator::Resolver, preference,
    speech, ScanHistory,
};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medicine_scanner=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let preference_path = Path::new(&config.preference_path);

    // --lang overrides and persists; otherwise use the stored preference
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, input) = parse_args(&args, preference_path)?;

    info!("resolving in {}", language.name());

    let resolver = Resolver::new(&config, MedicineTable::builtin());
    let mut history = ScanHistory::new();

    let result = match &input {
        Input::Text(text) => resolver.resolve_text(text, language, &mut history).await,
        Input::Image(path) => {
            let image = std::fs::read(path)?;
            resolver.resolve_image(&image, language, &mut history).await
        }
    };

    match result {
        Ok(record) => {
            for (label, value) in speech::render_lines(&record) {
                println!("{} {}", label, value);
            }
            let narration = speech::narration(&record);
            println!("\n[{}] {}", narration.voice, narration.text);
        }
        Err(err) => {
            eprintln!("{}", err.user_message(language));
            std::process::exit(1);
        }
    }

    Ok(())
}

enum Input {
    Text(String),
    Image(String),
}

fn parse_args(args: &[String], preference_path: &Path) -> Result<(Language, Input)> {
    let mut language: Option<Language> = None;
    let mut text: Option<String> = None;
    let mut image: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                let code = iter.next().map(String::as_str).unwrap_or("en");
                language = Some(Language::from_code(code));
            }
            "--text" => text = iter.next().cloned(),
            other => image = Some(other.to_string()),
        }
    }

    let language = match language {
        Some(lang) => {
            // The stored preference is rewritten on every language change
            preference::store(preference_path, lang)?;
            lang
        }
        None => preference::load(preference_path),
    };

    let input = match (text, image) {
        (Some(text), _) => Input::Text(text),
        (None, Some(path)) => Input::Image(path),
        (None, None) => anyhow::bail!(
            "Usage: medicine-scanner [--lang en|hi] (<image-path> | --text \"...\")"
        ),
    };

    Ok((language, input))
}
