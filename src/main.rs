use clap::Parser;
use librarian::catalog::Catalog;
use librarian::error::CatalogError;
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog snapshot file
    #[arg(long, default_value = "library_data.json")]
    data_file: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so the menu output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut catalog = Catalog::new();
    if !catalog.load(&cli.data_file).into_diagnostic()? {
        tracing::info!(path = %cli.data_file.display(), "no snapshot yet, starting empty");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Select option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_book(&mut catalog, &mut lines)?,
            "2" => remove_book(&mut catalog, &mut lines)?,
            "3" => add_user(&mut catalog, &mut lines)?,
            "4" => remove_user(&mut catalog, &mut lines)?,
            "5" => issue_book(&mut catalog, &mut lines)?,
            "6" => return_book(&mut catalog, &mut lines)?,
            "7" => view(&catalog),
            "8" => print_report(&catalog),
            "9" => {
                catalog.save(&cli.data_file).into_diagnostic()?;
                println!("Saved.");
            }
            "10" => match catalog.load(&cli.data_file) {
                Ok(true) => println!("Loaded."),
                Ok(false) => println!("No data file."),
                Err(e) => return Err(e).into_diagnostic(),
            },
            "0" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown option."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Library Manager");
    println!("1 - Add book");
    println!("2 - Remove book");
    println!("3 - Add user");
    println!("4 - Remove user");
    println!("5 - Issue book");
    println!("6 - Return book");
    println!("7 - View books and users");
    println!("8 - Report");
    println!("9 - Save data");
    println!("10 - Load data");
    println!("0 - Exit");
}

/// Prints `label` and reads one trimmed line; `None` on end of input.
fn prompt(lines: &mut InputLines<'_>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().into_diagnostic()?;
    match lines.next() {
        Some(line) => Ok(Some(line.into_diagnostic()?.trim().to_string())),
        None => Ok(None),
    }
}

/// Re-prompts until the input parses as a non-negative whole number. The
/// core takes quantities as typed integers; raw-text validation lives here.
fn prompt_quantity(lines: &mut InputLines<'_>) -> Result<Option<u32>> {
    loop {
        let Some(raw) = prompt(lines, "Quantity: ")? else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(quantity) => return Ok(Some(quantity)),
            Err(_) => println!("Enter a non-negative whole number."),
        }
    }
}

fn add_book(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(title) = prompt(lines, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(lines, "Author: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(lines, "Genre: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_quantity(lines)? else {
        return Ok(());
    };
    catalog.add_book(&title, &author, &genre, quantity);
    println!("Book added.");
    Ok(())
}

fn remove_book(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(title) = prompt(lines, "Title to remove: ")? else {
        return Ok(());
    };
    println!(
        "{}",
        if catalog.remove_book(&title) {
            "Removed."
        } else {
            "Not found."
        }
    );
    Ok(())
}

fn add_user(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(name) = prompt(lines, "Name: ")? else {
        return Ok(());
    };
    let Some(contact) = prompt(lines, "Contact info: ")? else {
        return Ok(());
    };
    let id = catalog.add_user(&name, &contact);
    println!("User added. ID: {id}");
    Ok(())
}

fn remove_user(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(user_id) = prompt(lines, "User ID to remove: ")? else {
        return Ok(());
    };
    println!(
        "{}",
        if catalog.remove_user(&user_id) {
            "Removed."
        } else {
            "Not found."
        }
    );
    Ok(())
}

fn issue_book(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(user_id) = prompt(lines, "User ID: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Book title: ")? else {
        return Ok(());
    };
    report_outcome(catalog.issue_book(&user_id, &title))
}

fn return_book(catalog: &mut Catalog, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(user_id) = prompt(lines, "User ID: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(lines, "Book title: ")? else {
        return Ok(());
    };
    report_outcome(catalog.return_book(&user_id, &title))
}

/// Business-rule rejections are part of the conversation, not failures.
fn report_outcome(outcome: Result<String, CatalogError>) -> Result<()> {
    match outcome {
        Ok(message) => println!("{message}"),
        Err(e) if e.is_rejection() => println!("{e}"),
        Err(e) => return Err(e).into_diagnostic(),
    }
    Ok(())
}

fn view(catalog: &Catalog) {
    println!("Books:");
    for book in catalog.books.values() {
        println!(
            " - {} by {} [{} copies] (issued {} times)",
            book.title, book.author, book.quantity, book.issued_count
        );
    }
    println!("Users:");
    for user in catalog.users.values() {
        print!(" - {} {} borrowed:", user.id, user.name);
        if user.borrowed.is_empty() {
            print!(" none");
        }
        for (title, due) in &user.borrowed {
            print!(" \"{title}\" due {due};");
        }
        println!();
    }
}

fn print_report(catalog: &Catalog) {
    let report = catalog.report();
    println!("Total copies: {}", report.total_books);
    println!("Unique titles: {}", report.unique_titles);
    println!("Registered users: {}", report.total_users);
    println!("Most issued:");
    for book in &report.popular {
        println!(" - {} (issued {} times)", book.title, book.issued_count);
    }
    println!("Overdue:");
    for loan in &report.overdue {
        println!(
            " - {} ({}) has \"{}\" due {}",
            loan.name, loan.user_id, loan.book, loan.due
        );
    }
}
