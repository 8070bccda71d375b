use clap::Parser;
use shutterfeed_core::config::Config;
use shutterfeed_core::{FeedStore, SortKey};
use shutterfeed_feeds::FlickrFeed;

#[derive(Parser)]
#[command(name = "shutterfeed", about = "Photo feed client — fetch, filter, and sort")]
struct Cli {
    /// Tag query, e.g. "#sunset #beach". Empty means no filter.
    #[arg(long, default_value = "")]
    tags: String,

    /// Sort order: default, title-asc, title-desc, date-asc, date-desc.
    #[arg(long, default_value = "default")]
    sort: SortKey,

    /// Feed URL, overriding the configured one.
    #[arg(long)]
    url: Option<String>,

    /// Log fetch diagnostics to stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let url = cli.url.unwrap_or(config.feed.url);

    let feed = FlickrFeed::new(url);
    let store = FeedStore::new();
    feed.refresh(&store).await;
    tracing::info!(items = store.len(), "feed refreshed");

    let view = store.view(&cli.tags, cli.sort);
    if view.is_empty() {
        eprintln!("no items (empty feed, fetch failure, or no tag matches)");
        return Ok(());
    }

    for item in &view {
        println!(
            "{}  {}  {:2}  {:20}  {}",
            item.date_taken.format("%Y-%m-%d %H:%M"),
            item.color.hex(),
            // Initials are stored raw; the avatar uppercases them on display.
            item.author_initials.to_uppercase(),
            item.author_name,
            item.title.as_deref().unwrap_or("(untitled)"),
        );
        if !item.tags.is_empty() {
            println!("    {}", item.tags.join(" "));
        }
        println!("    {}", item.image_url);
    }

    Ok(())
}
