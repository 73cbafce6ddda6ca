use clap::Parser;
use lextract::app::render::render_catalog;
use lextract::utils::error::{ErrorSeverity, RecipeError};
use lextract::utils::{logger, validation::Validate};
use lextract::{CliConfig, RecipeEngine};

fn run(config: &CliConfig) -> lextract::Result<String> {
    config.validate()?;

    let file = config.recipe_file()?;
    let inputs = config.resolve_inputs(file.as_ref());
    let format = config.output_format(file.as_ref());
    tracing::debug!("Resolved inputs: {:?} (format {:?})", inputs, format);

    let engine = RecipeEngine::with_policy(config.input_policy());
    let recipe = engine.generate(&inputs)?;

    format.renderer().render(&recipe)
}

fn exit_code(e: &RecipeError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.list {
        print!("{}", render_catalog());
        return;
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "Recipe generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }
}
