use crate::interview::Subject;
use clap::Parser;

/// Turn a finished book into a written review through a guided reflection
/// interview
#[derive(Parser, Debug)]
#[clap(name = "shelved", about = "Turn a finished book into a written review through a guided reflection interview")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Title of the book you just finished
    #[clap(short = 't', long)]
    pub title: String,

    /// Author of the book
    #[clap(short = 'a', long)]
    pub author: String,

    /// Catalog key for the book, if you have one (e.g. an Open Library key)
    #[clap(long)]
    pub key: Option<String>,

    /// Cover image URL to record alongside the book
    #[clap(long)]
    pub cover_url: Option<String>,

    /// Shelf file to append the finished review to (overrides SHELVED_SHELF)
    #[clap(long)]
    pub shelf: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// The Subject this invocation is about.
    pub fn subject(&self) -> Subject {
        Subject {
            title: self.title.clone(),
            author: self.author.clone(),
            external_id: self.key.clone(),
            cover_url: self.cover_url.clone(),
        }
    }
}
