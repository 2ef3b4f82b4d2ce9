pub mod parser;
pub mod utils;

use anyhow::{anyhow, Error};
use booklist::BooklistController;
use clap::{App, Arg};
use club::{AddedBook, Club};
use config::Config;
use parser::Statement;
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use std::collections::HashMap;
use store::error::ErrorKind;
use store::{Field, ProfileRef, Store, ToTable, Type};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

macro_rules! prompt {
    ($ed:ident) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline(PROMPT) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

fn print_books(books: &[store::RankedBook]) {
    if books.is_empty() {
        println!("Nothing to show");
        return;
    }

    for book in books {
        println!("{}", book.to_table());
    }
}

fn add_book_prompt<S: Store>(
    rl: &mut rustyline::Editor<()>,
    club: &Club<'_, S>,
) -> Result<AddedBook, Error> {
    let fields = vec![
        Field::Required("author", Type::String),
        Field::Required("title", Type::String),
        Field::Required("reaction", Type::Int32),
        Field::Required("auth_id", Type::String),
    ];

    let mut proto = utils::build_prototype(rl, fields)?;
    let reaction = proto["reaction"].as_i32()?;
    let reader = ProfileRef::auth_id(proto["auth_id"].as_string()?);

    let name = proto
        .remove("author")
        .ok_or(ErrorKind::MissingAttribute("author"))?;
    let title = proto
        .remove("title")
        .ok_or(ErrorKind::MissingAttribute("title"))?;

    let mut author = HashMap::new();
    author.insert("name", name);

    let mut book = HashMap::new();
    book.insert("title", title);

    club.add_book(author, book, reaction, &reader)
}

fn add_meetup_prompt<S: Store>(
    rl: &mut rustyline::Editor<()>,
    club: &Club<'_, S>,
) -> Result<S::Meetup, Error> {
    let fields = vec![
        Field::Required("location", Type::String),
        Field::Required("description", Type::String),
        Field::Required("date_time", Type::DateTime),
        Field::Required("book_id", Type::Int32),
        Field::Required("auth_id", Type::String),
    ];

    let proto = utils::build_prototype(rl, fields)?;
    let location = proto["location"].as_string()?;
    let description = proto["description"].as_string()?;
    let date_time = proto["date_time"].as_date_time()?;
    let book_id = proto["book_id"].as_i32()?;
    let host = ProfileRef::auth_id(proto["auth_id"].as_string()?);

    club.add_meetup(location, description, date_time, book_id, &host)
}

fn main() -> Result<(), Error> {
    SimpleLogger::init(LevelFilter::Info, LogConfig::default())?;
    dotenv::dotenv().ok();

    let matches = App::new("bookclub")
        .version(VERSION)
        .about("Data shell for the book club")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Configuration file"),
        )
        .arg(
            Arg::with_name("database-url")
                .long("database-url")
                .takes_value(true)
                .help("Overrides the configured database url"),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => Some(Config::load(path)?),
        None => Config::load("config.toml").ok(),
    };

    let url = matches
        .value_of("database-url")
        .map(str::to_owned)
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .or_else(|| config.as_ref().map(|c| c.database.url.clone()))
        .ok_or_else(|| anyhow!("no database url, pass --database-url or set DATABASE_URL"))?;

    let default_limit = config
        .as_ref()
        .map(|c| c.ranking.default_limit)
        .unwrap_or(25);

    let controller = BooklistController::with_url(&url)?;
    let club = Club::with_store(&controller);

    println!("Welcome to bookclub {}", VERSION);
    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let line: String = prompt!(rl)?;

        match line.trim() {
            "?" | "h" | "help" => {
                println!("Statements:");
                println!("top_books | top_books(<limit>)     Crowd ranking");
                println!("my_books(<limit>, <auth_id>)       Your ranking");
                println!("profile(id(<n>) | auth_id(<id>))   A user's shelf");
                println!("save_profile(<auth_id>)            Get or create a profile");
                println!("add_book                           Record a reaction");
                println!("meetups(<book_id>)                 Meetups for a book");
                println!("meetup(<meetup_id>)                Meetup with its book");
                println!("my_meetups(<user_id>)              Meetups a user joined");
                println!("add_meetup                         Create a meetup");
                println!("h | help                           Shows this help");
                println!("q | quit                           Quit");
            }

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(stmt) => match stmt {
                    Statement::TopBooks(limit) => {
                        match club.get_books(limit.unwrap_or(default_limit)) {
                            Ok(books) => print_books(&books),
                            Err(e) => println!("{}", e),
                        }
                    }

                    Statement::MyBooks(limit, auth_id) => {
                        match club.get_books_signed_in(limit, &auth_id) {
                            Ok(books) => print_books(&books),
                            Err(e) => println!("{}", e),
                        }
                    }

                    Statement::Profile(profile) => match club.get_profile(&profile) {
                        Ok(profile) => print_books(&profile.books),
                        Err(e) => println!("{}", e),
                    },

                    Statement::SaveProfile(auth_id) => match club.save_profile(&auth_id) {
                        Ok(user) => println!("{}", user.to_table()),
                        Err(e) => println!("{}", e),
                    },

                    Statement::AddBook => match add_book_prompt(&mut rl, &club) {
                        Ok(added) => println!(
                            "Recorded reaction {} to '{}' by {}",
                            added.reaction, added.book.title, added.author.name
                        ),
                        Err(e) => println!("{}", e),
                    },

                    Statement::Meetups(book_id) => match club.get_meetups(book_id) {
                        Ok(meetups) => {
                            for meetup in meetups {
                                println!("{}", meetup.to_table());
                            }
                        }
                        Err(e) => println!("{}", e),
                    },

                    Statement::MeetupDetails(meetup_id) => {
                        match club.get_meetup_details(meetup_id) {
                            Ok(details) => {
                                println!("{}", details.meetup.to_table());
                                println!("{}", details.book.to_table());
                            }
                            Err(e) => println!("{}", e),
                        }
                    }

                    Statement::MyMeetups(user_id) => match club.get_users_meetups(user_id) {
                        Ok(meetups) => {
                            for meetup in meetups {
                                println!("{}", meetup.to_table());
                            }
                        }
                        Err(e) => println!("{}", e),
                    },

                    Statement::AddMeetup => match add_meetup_prompt(&mut rl, &club) {
                        Ok(meetup) => println!("{}", meetup.to_table()),
                        Err(e) => println!("{}", e),
                    },
                },

                None => println!("Invalid syntax!"),
            },
        }
    }

    Ok(())
}
