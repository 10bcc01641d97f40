use std::fs;
use std::process;

use log::{error, info};

mod boot;
mod config;
mod dom;
mod errors;
mod lazy;
mod loaders;
mod page;
mod prefs;
mod render;
mod shell;
mod source;
mod viewport;

use config::SiteConfig;
use lazy::{LazyImageLoader, LazyLoadOptions};
use loaders::{ContentLoader, Section};
use page::PageController;
use prefs::Prefs;
use source::{ContentSource, DirSource, HttpSource};
use viewport::Viewport;

fn main() {
    env_logger::init();

    let config = match SiteConfig::load("folio.toml") {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    boot::run(&config);

    let source: Box<dyn ContentSource> = match &config.base_url {
        Some(base) => {
            let base = match url::Url::parse(base) {
                Ok(url) => url,
                Err(e) => {
                    error!("invalid base_url {}: {}", base, e);
                    process::exit(1);
                }
            };
            info!("fetching content from {}", base);
            match HttpSource::new(base) {
                Ok(source) => Box::new(source),
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            info!("serving content from {}", config.content_dir);
            Box::new(DirSource::new(&config.content_dir))
        }
    };

    let mut doc = shell::build_document();
    let viewport = Viewport::new(config.viewport_height);

    let prefs = Prefs::open(&config.prefs_file);
    let mut controller = PageController::new(prefs, &viewport);
    controller.init(&mut doc);

    // Each loader is independent: it fetches its own documents and writes
    // only its own container. Order between sections does not matter.
    for section in Section::all() {
        ContentLoader::new(section, source.as_ref()).init(&mut doc);
    }

    let mut lazy = LazyImageLoader::new(LazyLoadOptions::default());
    lazy.init(&mut doc);

    // Initial visibility pass: resolve above-the-fold images, reveals, and
    // the active nav link for the top of the page.
    lazy.pump(&mut doc, &viewport, source.as_ref());
    controller.pump_reveal(&mut doc, &viewport);
    controller.pump_nav(&mut doc, &viewport);

    if let Err(e) = fs::write(&config.output, doc.to_html()) {
        error!("cannot write {}: {}", config.output, e);
        process::exit(1);
    }
    info!("rendered page written to {}", config.output);
}
