/*!
# Shelved - Log a Book Through Reflection

Command-line entry point. Coordinates the components to run one interview:

1. Initializes logging
2. Parses command-line arguments into the Subject
3. Loads and validates configuration
4. Builds the chat model client
5. Runs the interview, synthesis, rating, and shelf hand-off

## Usage

```text
shelved --title <TITLE> --author <AUTHOR> [OPTIONS]

Options:
  -t, --title <TITLE>       Title of the book you just finished
  -a, --author <AUTHOR>     Author of the book
      --key <KEY>           Catalog key for the book, if you have one
      --cover-url <URL>     Cover image URL to record alongside the book
      --shelf <PATH>        Shelf file to append the finished review to
  -v, --verbose             Print verbose output
```

## Configuration

- `SHELVED_API_URL`: chat completions API base URL (defaults to Groq)
- `GROQ_API_KEY`: API key; without one the interview runs on local questions
- `SHELVED_MODEL`: chat model identifier
- `SHELVED_SHELF`: shelf file path (defaults to ~/Documents/bookshelf.md)
*/

use shelved::cli::CliArgs;
use shelved::config::Config;
use shelved::errors::{AppError, AppResult};
use shelved::{ops, GroqClient};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    let args = CliArgs::parse_args();

    let default_filter = if args.verbose { "shelved=debug" } else { "shelved=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting shelved");

    let mut config = Config::load()?;
    if let Some(shelf) = &args.shelf {
        let expanded = shellexpand::full(shelf)
            .map_err(|e| AppError::Config(format!("Failed to expand shelf path: {}", e)))?;
        config.shelf_path = PathBuf::from(expanded.into_owned());
    }
    config.validate()?;

    if !config.has_api_key() {
        warn!("No API key configured; the interview will use local questions only");
    }

    let client = GroqClient::new(
        config.api_url.as_str(),
        config.api_key.as_str(),
        config.model.as_str(),
    );

    ops::log_book(&config, args.subject(), &client)
}
