//! critview: fetch and render a feature's criteria panel from the command
//! line, printing the resulting page markup.

use std::sync::Arc;

use clap::Parser;

use critview_client::{CookieCsrf, CriteriaClient, CsrfTokenProvider, NoCsrf};
use critview_core::defaults;
use critview_panel::{CriteriaPanel, Document};

#[derive(Parser)]
#[command(name = "critview")]
#[command(author, version, about = "Render criteria details for a feature")]
struct Cli {
    /// Feature identifier (e.g. ENSG00000134242 or rs2476601)
    feature_id: String,

    /// Application namespace of the criteria endpoint (e.g. gene, marker)
    #[arg(short, long, default_value = "gene")]
    app: String,

    /// Section keys present in the page skeleton; defaults to the app
    /// namespace when none are given
    #[arg(long = "section")]
    sections: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let csrf: Arc<dyn CsrfTokenProvider> = match std::env::var(defaults::ENV_CSRF_COOKIE) {
        Ok(cookies) => Arc::new(CookieCsrf::new(cookies)),
        Err(_) => Arc::new(NoCsrf),
    };
    let client = CriteriaClient::from_env(&cli.app, csrf)?;

    let sections: Vec<&str> = if cli.sections.is_empty() {
        vec![cli.app.as_str()]
    } else {
        cli.sections.iter().map(String::as_str).collect()
    };
    let mut document = Document::portal_skeleton(&cli.feature_id, &sections);

    let panel = CriteriaPanel::new(Arc::new(client));
    panel
        .render_criteria_details(&mut document, &cli.feature_id)
        .await?;

    println!("{}", document.page_html());
    Ok(())
}
