use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = quotebox_api::Args::parse();

	quotebox_api::run(args).await
}
