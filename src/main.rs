use clap::Parser;
use registrar_etl::adapters::render;
use registrar_etl::adapters::tsv::TsvDirectory;
use registrar_etl::core::report::{InstructorSummary, MajorSummary, StudentSummary};
use registrar_etl::domain::ports::{ConfigProvider, TableReport};
use registrar_etl::utils::{logger, validation::Validate};
use registrar_etl::{CliConfig, Engine, TomlConfig};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting registrar-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(2);
    }

    // A TOML file, when given, drives the run instead of the CLI flags.
    let config_file = cli.config.clone();
    let result = match config_file.as_deref() {
        Some(path) => match TomlConfig::from_path(path).and_then(|c| {
            c.validate()?;
            Ok(c)
        }) {
            Ok(file_config) => execute(file_config),
            Err(e) => {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {e}");
                std::process::exit(2);
            }
        },
        None => execute(cli),
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Run completed successfully");
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn execute<C: ConfigProvider>(config: C) -> registrar_etl::Result<()> {
    let sources = TsvDirectory::new(config.data_dir(), config.has_header());
    let output_path = config.output_path().map(str::to_string);

    let engine = Engine::new(sources, config);
    let store = engine.run()?;

    let students = StudentSummary::new(&store);
    let instructors = InstructorSummary::new(&store);
    let majors = MajorSummary::new(&store);

    for report in [
        &students as &dyn TableReport,
        &instructors as &dyn TableReport,
        &majors as &dyn TableReport,
    ] {
        println!("{}", render::render_table(report));

        if let Some(dir) = &output_path {
            let file = format!("{}.tsv", report.title().to_lowercase().replace(' ', "_"));
            let path = Path::new(dir).join(file);
            render::write_tsv(report, &path)?;
            tracing::info!("wrote {}", path.display());
        }
    }

    Ok(())
}
