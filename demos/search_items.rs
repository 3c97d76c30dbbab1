// demos/search_items.rs
//! Lists every page and database visible to an integration.
//!
//! Run with `NOTION_API_KEY=secret_... cargo run --example search_items`.
//! Set `NOTION_ITEMS_VERBOSE=1` for debug logging.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use notion_items::{ClientConfig, Item, Items, NotionClient};

fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn label(item: &Item) -> &str {
    if !item.name().is_empty() {
        item.name()
    } else if !item.title().is_empty() {
        item.title()
    } else {
        "(untitled)"
    }
}

fn print_item(items: &Items, item: &Item) {
    let mut path: Vec<&str> = items.ancestors(item).map(|ancestor| label(ancestor)).collect();
    path.reverse();

    let location = if path.is_empty() {
        String::new()
    } else {
        format!("  [{}]", path.join(" / "))
    };
    println!("{:<8} {}  {}{}", item.kind().as_str(), item.id(), label(item), location);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::var("NOTION_ITEMS_VERBOSE").is_ok();
    setup_logging(verbose)?;

    let config = ClientConfig::from_env()?;
    let mut client = NotionClient::new(config)?;
    let items = client.items()?;

    let mut sorted: Vec<_> = items.iter().collect();
    sorted.sort_by(|a, b| a.last_edited_time().cmp(b.last_edited_time()).reverse());

    for item in sorted {
        print_item(items, item);
    }

    let orphans = items.unresolved().count();
    if orphans > 0 {
        log::warn!("{} items have a parent that is not shared with the integration", orphans);
    }
    Ok(())
}
