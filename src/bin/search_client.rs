use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use searchengine::client::{
    Activation, HtmlRegion, HttpSearchFetcher, RenderPolicy, Rendered, SearchTrigger, TextInput,
    RESPONSE_SIZE, SEARCH_BOX, SEARCH_BUTTON, URL_LIST,
};

/// Terminal front-end for the search server. Every line read from stdin is
/// submitted as one search.
#[derive(Parser, Debug)]
#[command(name = "search-client", version, about)]
struct Args {
    /// Address of the search server
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Only render the answer to the most recent search
    #[arg(long)]
    latest_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let policy = if args.latest_only {
        RenderPolicy::LatestActivation
    } else {
        RenderPolicy::LastResolved
    };

    let input = Arc::new(TextInput::default());
    let status = Arc::new(HtmlRegion::new(RESPONSE_SIZE));
    let results = Arc::new(HtmlRegion::new(URL_LIST));
    let fetcher = Arc::new(HttpSearchFetcher::new(reqwest::Client::new(), &args.base_url));
    let trigger = SearchTrigger::new(input.clone(), fetcher, status, results)
        .with_policy(policy);

    info!("Searching against {} ({:?})", args.base_url, policy);
    eprintln!(
        "Type a query into {} and press enter for {}; Ctrl-D quits.",
        SEARCH_BOX, SEARCH_BUTTON
    );

    let mut pending = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        input.set(line);

        // searches run concurrently; a slow answer may land after a newer one
        let cycle = trigger.activate();
        pending.spawn(async move {
            match cycle.await {
                Ok(Activation::Rendered(rendered)) => print!("{}", transcript(&rendered)),
                Ok(Activation::Superseded) => {}
                Err(e) => eprintln!("search failed: {}", e),
            }
        });

        while pending.try_join_next().is_some() {}
    }

    while pending.join_next().await.is_some() {}
    Ok(())
}

/// Both regions as written by one cycle, printed in a single call so
/// concurrent cycles cannot interleave.
fn transcript(rendered: &Rendered) -> String {
    format!(
        "#{}\n{}\n#{}\n{}\n",
        RESPONSE_SIZE, rendered.status, URL_LIST, rendered.results
    )
}
