use clap::Parser;
use std::io;

use ascii_art::cli::{handle_config_action, Args, Command};
use ascii_art::config::{Config, Settings};
use ascii_art::output::{AsciiOutput, ConsoleOutput, HtmlOutput, OutputMethod};
use ascii_art::picture;
use ascii_art::session::AsciiArt;
use ascii_art::shell::Shell;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Some(Command::Config { action }) = &args.command {
        match handle_config_action(action.clone(), args.config.as_deref()) {
            Ok(msg) => println!("{}", msg),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(image_path) = args.image.as_deref() else {
        return Err("no image given; see --help".into());
    };

    // CLI args > config file > built-in defaults
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&config, args.overrides())?;
    log::debug!("Effective settings: {:?}", settings);

    let image = picture::load(image_path)?;
    let session = AsciiArt::new(
        image,
        settings.charset.iter().copied(),
        settings.resolution,
        settings.reverse,
    )?;
    let mut html = HtmlOutput::new(&settings.html_path, settings.font.as_str());

    if args.render {
        let grid = session.render()?;
        match settings.output {
            OutputMethod::Console => ConsoleOutput::stdout().out(&grid)?,
            OutputMethod::Html => html.out(&grid)?,
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(session, settings.output, html, stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}
