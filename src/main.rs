use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use wrg::chapters::ChapterSet;
use wrg::progress::{FileStore, ProgressStore};
use wrg::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Chapter content file.
    #[arg(short, long, env, default_value = "data/chapters.json")]
    content: PathBuf,

    /// Directory backing the learner progress store.
    #[arg(short, long, env, default_value = ".wrg")]
    progress_dir: PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracing=info,axum=debug,wrg=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let chapters = ChapterSet::load(&args.content)?;
    tracing::info!("loaded {} chapters from {:?}", chapters.len(), args.content);

    let progress = ProgressStore::new(Arc::new(FileStore::new(args.progress_dir)));
    let app = wrg::router(AppState::new(chapters, progress));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
