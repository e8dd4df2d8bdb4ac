mod app;
mod config;
mod persistence;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
