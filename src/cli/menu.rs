//! Interactive menu front end
//!
//! A numbered menu loop reading line-oriented input. Each iteration reads a
//! choice, prompts for the fields the chosen operation needs, and dispatches
//! to the ledger. Data errors (unknown id, write failure) are printed and the
//! loop continues; only input I/O failures end it early.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::Settings;
use crate::display::{
    format_balance_summary, format_category_report, format_search_results,
    format_transaction_table,
};
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{BalanceSummary, CategoryReport};
use crate::storage::Ledger;

use super::transaction::today;

/// Run the interactive menu loop until Exit is chosen or input ends
pub fn run_menu(ledger: &mut Ledger, settings: &Settings) -> LedgerResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu_loop(ledger, settings, &mut input)
}

fn run_menu_loop<R: BufRead>(
    ledger: &mut Ledger,
    settings: &Settings,
    input: &mut R,
) -> LedgerResult<()> {
    loop {
        print_menu();
        let Some(choice) = prompt(input, "Enter choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_flow(ledger, settings, input)?,
            "2" => print!("{}", format_transaction_table(ledger.transactions())),
            "3" => search_flow(ledger, input)?,
            "4" => delete_flow(ledger, input)?,
            "5" => {
                let summary = BalanceSummary::generate(ledger.transactions());
                print!("{}", format_balance_summary(&summary));
            }
            "6" => {
                let report = CategoryReport::generate(ledger.transactions());
                print!("{}", format_category_report(&report));
            }
            "7" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("===== LedgerLite Menu =====");
    println!("1. Add Transaction");
    println!("2. View All Transactions");
    println!("3. Search Transactions");
    println!("4. Delete Transaction");
    println!("5. Analytics Summary");
    println!("6. Advanced Analytics");
    println!("7. Exit");
    println!("===========================");
}

fn add_flow<R: BufRead>(
    ledger: &mut Ledger,
    settings: &Settings,
    input: &mut R,
) -> LedgerResult<()> {
    let Some(date) = prompt(input, "Enter date (YYYY-MM-DD), blank for today: ")? else {
        return Ok(());
    };
    let date = if date.is_empty() {
        today(&settings.date_format)
    } else {
        date
    };

    let Some(category) = prompt(input, "Enter category: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, "Enter description: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt_number::<f64, R>(input, "Enter amount: ")? else {
        return Ok(());
    };

    // The record stays in memory even when the save fails; the next
    // successful save writes it out.
    match ledger.add(date, category, description, amount) {
        Ok(txn) => println!("Transaction {} added.", txn.id),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn search_flow<R: BufRead>(ledger: &Ledger, input: &mut R) -> LedgerResult<()> {
    let Some(keyword) = prompt(input, "Enter date/category/keyword to search: ")? else {
        return Ok(());
    };
    print!("{}", format_search_results(&ledger.search(&keyword)));
    Ok(())
}

fn delete_flow<R: BufRead>(ledger: &mut Ledger, input: &mut R) -> LedgerResult<()> {
    let Some(id) = prompt_number::<u32, R>(input, "Enter transaction ID to delete: ")? else {
        return Ok(());
    };

    match ledger.delete(id) {
        Ok(txn) => println!("Transaction {} deleted.", txn.id),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

/// Print a prompt and read one line; `None` on end of input
fn prompt<R: BufRead>(input: &mut R, message: &str) -> LedgerResult<Option<String>> {
    print!("{}", message);
    io::stdout().flush().map_err(LedgerError::from)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(LedgerError::from)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the operator enters a value that parses; `None` on end of input
fn prompt_number<T: FromStr, R: BufRead>(
    input: &mut R,
    message: &str,
) -> LedgerResult<Option<T>> {
    loop {
        let Some(line) = prompt(input, message)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid number. Try again."),
        }
    }
}
