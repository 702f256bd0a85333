use campus_connect::catalog::CatalogSnapshot;
use campus_connect::config::{AppConfig, CatalogConfig};
use campus_connect::error::AppError;
use campus_connect::recommendations::{
    resolve_college, score_category, Category, RawProfile, Recommendations, StudentProfile,
};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Profile document (JSON) to score against
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Catalog to score: orgs, events, or tutoring
    #[arg(long, default_value = "orgs", value_parser = crate::infra::parse_category)]
    pub(crate) category: Category,
    /// Directory holding the catalog CSV exports (defaults to CATALOG_DIR)
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogSummaryArgs {
    /// Directory holding the catalog CSV exports (defaults to CATALOG_DIR)
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        category,
        catalog_dir,
    } = args;

    let raw = load_profile(&profile)?;
    let student = StudentProfile::normalize(&raw);
    let snapshot = CatalogSnapshot::load(&catalog_config(catalog_dir)?)?;
    let recommendations = score_category(category, &student, &snapshot)?;

    render_recommendations(&student, &recommendations);
    Ok(())
}

pub(crate) fn run_catalog_summary(args: CatalogSummaryArgs) -> Result<(), AppError> {
    let config = catalog_config(args.catalog_dir)?;
    let snapshot = CatalogSnapshot::load(&config)?;
    let counts = snapshot.counts();

    println!("Catalog summary ({})", config.directory.display());
    for (category, count) in [
        (Category::Organizations, counts.orgs),
        (Category::Events, counts.events),
        (Category::Tutoring, counts.tutoring),
    ] {
        match count {
            Some(count) => println!("  {:<9} {count} records", category.label()),
            None => println!("  {:<9} unavailable", category.label()),
        }
    }

    let options = snapshot.interest_options();
    if options.is_empty() {
        println!("\nInterest options: none");
    } else {
        println!("\nInterest options");
        for option in options {
            println!("- {option}");
        }
    }

    Ok(())
}

fn catalog_config(directory: Option<PathBuf>) -> Result<CatalogConfig, AppError> {
    let mut config = AppConfig::load()?.catalog;
    if let Some(directory) = directory {
        config.directory = directory;
    }
    Ok(config)
}

pub(crate) fn load_profile(path: &Path) -> Result<RawProfile, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn render_recommendations(student: &StudentProfile, recommendations: &Recommendations) {
    let college = resolve_college(&student.major);
    println!(
        "{} recommendations for {} {} ({}, year {}, GPA {})",
        recommendations.category().label(),
        student.name,
        student.surname,
        student.major,
        student.year.label(),
        student.gpa_range.label()
    );
    println!("College: {}", college.label());
    println!("Advising: {}", college.advising_link());

    if recommendations.is_empty() {
        println!("\nNo matching recommendations");
        return;
    }

    println!();
    for (rank, summary) in recommendations.summaries().into_iter().enumerate() {
        println!("{:>2}. {} (score {:.2})", rank + 1, summary.title, summary.score);
        if !summary.explanation.is_empty() {
            println!("    {}", summary.explanation);
        }
    }
}
