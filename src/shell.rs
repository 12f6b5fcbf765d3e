//! Interactive menu shell
//!
//! Drives the fleet through single-letter commands read line by line. The
//! reader and writer are injected so the loop can be exercised in tests
//! with plain byte buffers. Every operation error is reported as a one-line
//! message and the loop continues; nothing here is fatal.

use std::io::{self, BufRead, Write};

use crate::codec;
use crate::display::format_inventory;
use crate::fleet::Fleet;
use crate::models::Money;
use crate::services::{apply_monthly_charges, apply_payment};

const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";

/// Run the menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(fleet: &mut Fleet, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Boat Management System")?;
    writeln!(out, "-------------------------------------")?;

    loop {
        let Some(line) = prompt(input, out, MENU)? else {
            break;
        };
        let Some(option) = line.trim().chars().next() else {
            continue;
        };

        match option.to_ascii_lowercase() {
            'i' => {
                write!(out, "{}", format_inventory(fleet))?;
            }
            'a' => add_boat(fleet, input, out)?,
            'r' => remove_boat(fleet, input, out)?,
            'p' => accept_payment(fleet, input, out)?,
            'm' => {
                let billed = apply_monthly_charges(fleet);
                writeln!(out, "Monthly charges added for {} boats.", billed)?;
            }
            'x' => {
                writeln!(out, "Exiting the Boat Management System")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid option, try again")?;
            }
        }
    }

    Ok(())
}

fn add_boat<R: BufRead, W: Write>(fleet: &mut Fleet, input: &mut R, out: &mut W) -> io::Result<()> {
    let Some(entry) = prompt(
        input,
        out,
        "Enter boat information in CSV format (Name,Length,Type,LocationData,AmountOwed): ",
    )?
    else {
        return Ok(());
    };

    // the add flow rejects unclassified records outright
    let boat = match codec::parse_line_strict(entry.trim_end()) {
        Ok(boat) => boat,
        Err(err) => {
            writeln!(out, "{}", err)?;
            return Ok(());
        }
    };

    match fleet.insert(boat) {
        Ok(()) => writeln!(out, "Boat added.")?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}

fn remove_boat<R: BufRead, W: Write>(
    fleet: &mut Fleet,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(input, out, "Enter name of the boat to remove: ")? else {
        return Ok(());
    };

    match fleet.remove(name.trim()) {
        Ok(boat) => writeln!(out, "Removed {}.", boat.name)?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}

fn accept_payment<R: BufRead, W: Write>(
    fleet: &mut Fleet,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(input, out, "Enter boat name: ")? else {
        return Ok(());
    };
    let name = name.trim().to_string();

    let Some(index) = fleet.find_by_name(&name) else {
        writeln!(out, "No boat named '{}'", name)?;
        return Ok(());
    };
    let owed = fleet.get(index).map(|b| b.amount_owed).unwrap_or_default();
    writeln!(out, "Amount owed: {}", owed)?;

    let Some(raw) = prompt(input, out, "Enter payment: ")? else {
        return Ok(());
    };
    let payment = match Money::parse(raw.trim()) {
        Ok(amount) => amount,
        Err(err) => {
            writeln!(out, "{}", err)?;
            return Ok(());
        }
    };

    match apply_payment(fleet, &name, payment) {
        Ok(balance) => writeln!(out, "Payment accepted. New amount owed: {}", balance)?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}

/// Print a prompt and read one line; `None` means end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
