use anyhow::{bail, Result};
use mindwell::content::{Catalog, Category};
use mindwell::i18n::Locale;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("validate_catalog=info".parse()?),
        )
        .init();

    let catalog = Catalog::get();
    info!("Validating {} articles", catalog.len());

    for category in Category::ALL {
        println!("{:<14} {}", category, catalog.by_category(category).count());
    }
    println!();

    for article in catalog.all() {
        let sections: Vec<String> = Locale::ALL
            .iter()
            .map(|&locale| format!("{}={}", locale, article.content.get(locale).len()))
            .collect();
        println!("{:<32} {}", article.id, sections.join(" "));
    }
    println!();

    let report = catalog.validate();
    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }
    for problem in &report.errors {
        println!("ERROR:   {}", problem);
    }

    if report.has_errors() {
        bail!("{} errors, {} warnings", report.errors.len(), report.warnings.len());
    }

    info!("✓ Catalog is valid ({} warnings)", report.warnings.len());
    Ok(())
}
