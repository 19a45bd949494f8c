use clap::Parser;
use papyr::config::Config;
use papyr::preview::SiteBuilder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(help = "Directory containing the Markdown posts to preview.")]
    posts: PathBuf,
    #[arg(short, long, default_value = ".", help = "The destination directory")]
    dest: PathBuf,
    #[arg(
        short,
        long,
        help = "Path to papyr.yaml; discovered from the posts directory when omitted"
    )]
    config: Option<PathBuf>,
    #[arg(short, long, default_value = "theme", help = "The theme directory")]
    theme: PathBuf,
}

fn main() {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("PAPYR_LOG")
        .write_style("PAPYR_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{:#}", err);
                std::process::exit(1);
            }
        },
        None => match Config::from_directory(&args.posts) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}. Using the default configuration.", err);
                Config::default()
            }
        },
    };

    log::info!("Rendering a preview of `{}`", args.posts.display());
    log::info!("Outputting to `{}`", args.dest.display());

    match SiteBuilder::new(config, &args.theme).build(&args.posts, &args.dest) {
        Ok(count) => log::info!("Done. Rendered {} posts.", count),
        Err(err) => {
            log::error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
