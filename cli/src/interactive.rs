//! Line-based session: edit the ingredient list, switch language, generate.

use anyhow::Result;
use pantry_core::{Language, RecipeService, Session, View};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::card::render_card;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    /// Zero-based index.
    Remove(usize),
    List,
    Clear,
    Language(Language),
    Generate,
    Help,
    Quit,
}

/// Ingredients a fresh interactive session starts with.
const STARTER_INGREDIENTS: &[&str] = &["flour", "sugar", "eggs"];

const HELP: &str = "\
commands:
  add <ingredient>   add an ingredient (comma-separated list allowed)
  rm <n>             remove ingredient number n
  list               show the ingredient list
  clear              remove every ingredient
  lang <en|id>       switch output language
  go                 find a recipe
  quit               exit";

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "add" | "+" if !rest.is_empty() => Ok(Command::Add(rest.to_string())),
        "rm" | "remove" | "-" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| Command::Remove(n - 1))
            .ok_or_else(|| format!("expected an ingredient number, got '{}'", rest)),
        "list" | "ls" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "lang" | "language" => rest
            .parse::<Language>()
            .map(Command::Language)
            .map_err(|e| e.to_string()),
        "go" | "generate" => Ok(Command::Generate),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(format!("unknown command '{}', try 'help'", line)),
    }
}

fn print_ingredients(session: &Session) {
    if session.ingredients().is_empty() {
        println!("(no ingredients)");
        return;
    }
    for (i, tag) in session.ingredients().iter().enumerate() {
        println!("  {}. {}", i + 1, tag);
    }
}

fn print_view(session: &Session) -> Result<()> {
    let strings = session.strings();
    match session.view() {
        View::Idle => println!("{}", strings.recipe_awaits),
        View::Loading => println!("{}", strings.generating),
        View::Failed(error) => println!("{}", strings.error_message(error)),
        View::Ready(recipe) => print!("{}", render_card(recipe, strings)?),
    }
    Ok(())
}

fn starter_session(language: Language) -> Session {
    let mut session = Session::new(language);
    for raw in STARTER_INGREDIENTS {
        session.add_ingredient(raw);
    }
    session
}

pub async fn run(service: &dyn RecipeService, language: Language) -> Result<()> {
    let mut session = starter_session(language);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", session.strings().pantry_title);
    println!("{}", session.strings().pantry_description);
    println!("{}", HELP);
    print_ingredients(&session);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Add(raw) => {
                for item in raw.split(',') {
                    session.add_ingredient(item);
                }
                print_ingredients(&session);
            }
            Command::Remove(index) => {
                session.remove_ingredient(index);
                print_ingredients(&session);
            }
            Command::List => print_ingredients(&session),
            Command::Clear => {
                session.clear_ingredients();
                print_ingredients(&session);
            }
            Command::Language(language) => {
                session.set_language(language);
                println!("language: {}", language.display_name());
            }
            Command::Generate => {
                println!("{}", session.strings().generating);
                session.generate(service).await;
                print_view(&session)?;
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
