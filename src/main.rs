use log::debug;
use meal_browser::{connect, render, BrowserConfig, Notifier};
use std::env;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const USAGE: &str = "Usage: meal-browser <command> [--page]

Commands:
  categories          List meal categories
  search <name>       Search meals by name
  random              Show a random meal
  category <name>     List meals in a category
  lookup <id>         Show the details of a meal

Options:
  --page              Print a full HTML page instead of the active panel";

/// Prints notifications to stderr and remembers that one was raised.
struct StderrNotifier {
    raised: Arc<AtomicBool>,
}

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        self.raised.store(true, Ordering::SeqCst);
        eprintln!("{}", message);
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Categories,
    Search(String),
    Random,
    Category(String),
    Lookup(String),
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let arg = |i: usize, what: &str| {
        args.get(i)
            .cloned()
            .ok_or_else(|| format!("Please provide a {what} as an argument"))
    };

    match args.first().map(String::as_str) {
        Some("categories") => Ok(Command::Categories),
        Some("search") => Ok(Command::Search(arg(1, "meal name")?)),
        Some("random") => Ok(Command::Random),
        Some("category") => Ok(Command::Category(arg(1, "category")?)),
        Some("lookup") => Ok(Command::Lookup(arg(1, "meal id")?)),
        Some(other) => Err(format!("Unknown command: {other}")),
        None => Err("Please provide a command".to_string()),
    }
}

/// Splits the `--page` switch from the command words.
fn parse_args(mut args: Vec<String>) -> Result<(Command, bool), String> {
    let page = args.iter().any(|a| a == "--page");
    args.retain(|a| a != "--page");
    Ok((parse_command(&args)?, page))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();

    let (command, page) = match parse_args(env::args().skip(1).collect()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    let config = BrowserConfig::load()?;
    debug!("Using meal backend at {}", config.api_base);

    let raised = Arc::new(AtomicBool::new(false));
    let browser = connect(
        &config,
        Box::new(StderrNotifier {
            raised: raised.clone(),
        }),
    )?;

    if page || matches!(command, Command::Categories) {
        browser.load_categories().await;
    }

    match &command {
        Command::Categories => {}
        Command::Search(name) => browser.search(name).await,
        Command::Random => browser.random().await,
        Command::Category(category) => browser.select_category(category).await,
        Command::Lookup(id) => browser.select_meal(id).await,
    }

    if raised.load(Ordering::SeqCst) {
        return Ok(ExitCode::FAILURE);
    }

    let view = browser.view();
    if page {
        print!("{}", render::render_page(&view));
    } else if matches!(command, Command::Categories) {
        println!("{}", view.categories());
    } else {
        println!("{}", view.active_markup());
    }

    Ok(ExitCode::SUCCESS)
}
