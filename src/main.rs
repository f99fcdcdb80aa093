mod chat;
mod latex;
mod models;
mod resume;
mod scraper;
mod utils;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{error, info};

use crate::chat::agent::{AnalysisRequest, AtsAgent};
use crate::latex::layout::{LayoutOptions, layout, plain_text};
use crate::scraper::github::GitHubScraper;
use crate::scraper::job::get_job_description;
use crate::scraper::linkedin::linkedin_summary;
use crate::utils::cli::{Args, BuildArgs, CheckArgs, Command};
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting protrack {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config)?;

    match args.command {
        Command::Build(build_args) => build(&config, build_args).await,
        Command::Check(check_args) => check(&config, check_args).await,
    }
}

async fn build(config: &Config, args: BuildArgs) -> Result<()> {
    let data = resume::load(&args.input).await?;

    if let Err(e) = data.ensure_complete() {
        error!("{}", e);
        return Err(eyre::eyre!(
            "please enter at least your full name and email to generate the resume"
        ));
    }

    let options = LayoutOptions {
        compact_contact_line: args.compact_header || config.render.compact_header,
    };

    if let Some(path) = &args.latex {
        tokio::fs::write(path, latex::to_latex(&data, &options)?).await?;
        info!("wrote LaTeX source to {}", path.display());
    }

    info!("compiling resume to PDF");
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| data.download_file_name().into());
    let (data, pdf) = tokio::task::spawn_blocking(move || {
        let pdf = latex::render(&data, &options);
        (data, pdf)
    })
    .await?;
    let pdf = pdf.map_err(|e| {
        error!("check your inputs for unusual characters: {}", e);
        eyre::eyre!("an error occurred during PDF generation: {}", e)
    })?;

    tokio::fs::write(&output, pdf).await?;
    info!("generated resume at {}", output.display());

    println!("\n{}", "Resume generated successfully!".green().bold());
    if args.text {
        println!("{}", plain_text(&layout(&data, &options)));
    } else {
        println!("{}", "Preview (limited)".cyan().bold());
        println!("{}", data.preview());
    }

    Ok(())
}

async fn check(config: &Config, args: CheckArgs) -> Result<()> {
    let api_key = config
        .llm
        .api_key
        .clone()
        .ok_or_else(|| eyre::eyre!("LLM API key not configured in config.toml"))?;

    let job_description = get_job_description(&args).await?;

    info!("reading resume from: {}", args.resume.display());
    let resume_pdf = tokio::fs::read(&args.resume).await?;

    let linkedin_info = linkedin_summary(&args.linkedin);
    let github_info = GitHubScraper::new(config.clone())
        .profile_summary(&args.github)
        .await;

    let request = AnalysisRequest::new(
        job_description,
        resume_pdf,
        linkedin_info,
        github_info,
        args.mode.into(),
    )?;

    let agent = AtsAgent::new(api_key, config.llm.model.clone(), config.llm.endpoint.clone());
    let result = agent.analyze(&request).await?;

    println!("\n{}", "=== Analysis Result ===".cyan().bold());
    println!("{}", result);

    Ok(())
}
