//! # Menu Loop
//!
//! The six-entry operator menu.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. List all cars          ──► fleet listing, rented cars included      │
//! │  2. List available cars    ──► fleet listing, available only           │
//! │  3. Rent a car             ──► preview price, confirm, commit          │
//! │  4. Return a car           ──► final charge summary                    │
//! │  5. View active rentals    ──► ledger snapshot                         │
//! │  6. Exit                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is printed and the loop continues; the only ways out are
//! menu entry 6 and a closed input stream.

use std::io::{self, BufRead};

use tracing::{debug, info};

use kiraya_core::{rental_days, Discount, RentalDesk};

use crate::input;

/// Runs the menu until the operator exits.
pub fn run(desk: &mut RentalDesk, reader: &mut impl BufRead) -> io::Result<()> {
    loop {
        println!();
        println!("===== Kiraya Rental Desk =====");
        println!("1. List all cars");
        println!("2. List available cars");
        println!("3. Rent a car");
        println!("4. Return a car");
        println!("5. View active rentals");
        println!("6. Exit");
        input::prompt("Enter your choice: ")?;

        match input::read_int_in_range(reader, 1, 6)? {
            1 => list_fleet(desk),
            2 => list_available(desk),
            3 => handle_rent(desk, reader)?,
            4 => handle_return(desk, reader)?,
            5 => list_active(desk),
            _ => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
        }
    }
}

/// Menu 1: every car in the fleet, rented or not.
fn list_fleet(desk: &RentalDesk) {
    debug!("list fleet command");
    println!("--- Cars in fleet ---");
    for car in desk.fleet().iter() {
        println!("{}", car);
    }
}

/// Menu 2: available cars only.
fn list_available(desk: &RentalDesk) {
    debug!("list available command");
    let mut any = false;
    for car in desk.list_available_cars() {
        println!("{}", car);
        any = true;
    }
    if !any {
        println!("No cars available.");
    }
}

/// Menu 3: preview the price, ask for confirmation, commit the rental.
fn handle_rent(desk: &mut RentalDesk, reader: &mut impl BufRead) -> io::Result<()> {
    debug!("rent command");

    input::prompt("Enter your name: ")?;
    let name = input::read_non_empty(reader)?;

    println!("Available cars:");
    let mut any = false;
    for car in desk.list_available_cars() {
        println!("{}", car);
        any = true;
    }
    if !any {
        println!("No cars available right now.");
        return Ok(());
    }

    input::prompt("Enter car ID to rent: ")?;
    let car_id = input::read_line(reader)?;

    input::prompt("Enter start date (YYYY-MM-DD): ")?;
    let start = input::read_date(reader)?;
    input::prompt("Enter end date (YYYY-MM-DD): ")?;
    let end = input::read_date(reader)?;

    input::prompt("Enter discount percent (0 if none): ")?;
    let discount = Discount::from_percentage(input::read_percent(reader)?);

    if end <= start {
        println!("End date must be after start date. Using 1 day minimum.");
    }

    let car = match desk.get_car(&car_id) {
        Some(car) => car,
        None => {
            println!("Invalid car ID.");
            return Ok(());
        }
    };

    let days = rental_days(start, end);
    let base = car.base_price(days);
    let car_line = format!("{} {} ({})", car.brand, car.model, car.car_id);

    let total = match desk.preview_price(&car_id, start, end, discount) {
        Ok(total) => total,
        Err(e) => {
            println!("Unable to compute price: {}", e);
            return Ok(());
        }
    };

    println!();
    println!("--- Rental Summary ---");
    println!("Customer: {}", name);
    println!("Car: {}", car_line);
    println!("Period: {} to {} ({} days)", start, end, days);
    println!("Base price: {}", base);
    println!(
        "Total with tax (incl. {:.2}%): {}",
        desk.tax_rate().percentage(),
        total
    );

    input::prompt("Confirm rental? (Y/N): ")?;
    let confirm = input::read_line(reader)?;
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Rental canceled.");
        return Ok(());
    }

    match desk.rent(&car_id, &name, start, end, discount) {
        Ok(confirmation) => {
            info!(
                car_id = %confirmation.car_id,
                customer_id = %confirmation.customer_id,
                days = confirmation.days,
                "car rented"
            );
            println!(
                "Car rented successfully. Rental ID (car): {}",
                confirmation.car_id
            );
            println!("Customer ID: {}", confirmation.customer_id);
        }
        Err(e) => println!("{}", e),
    }

    Ok(())
}

/// Menu 4: return the car and print the final charge summary.
fn handle_return(desk: &mut RentalDesk, reader: &mut impl BufRead) -> io::Result<()> {
    debug!("return command");

    input::prompt("Enter car ID to return: ")?;
    let car_id = input::read_line(reader)?;

    match desk.return_car(&car_id) {
        Ok(summary) => {
            info!(
                car_id = %summary.car_id,
                customer_id = %summary.customer_id,
                total_paise = summary.total_paise,
                "car returned"
            );
            println!("=== Return Summary ===");
            println!("Customer: {} ({})", summary.customer_name, summary.customer_id);
            println!("Car: {} {} ({})", summary.brand, summary.model, summary.car_id);
            println!(
                "Rental period: {} to {} ({} days)",
                summary.start_date, summary.end_date, summary.days
            );
            println!("Base price: {}", summary.base_price());
            println!("Discount: {:.2}%", summary.discount().percentage());
            println!(
                "Total (incl. tax {:.2}%): {}",
                summary.tax_rate().percentage(),
                summary.total()
            );
            println!("Thank you - car returned successfully.");
        }
        Err(e) => println!("{}", e),
    }

    Ok(())
}

/// Menu 5: snapshot of the ledger.
fn list_active(desk: &RentalDesk) {
    debug!("list active command");
    println!("--- Active Rentals ---");
    if desk.active_count() == 0 {
        println!("No active rentals.");
        return;
    }
    for rental in desk.list_active() {
        println!(
            "Car {} -> {} ({} to {}, {} days)",
            rental.car_id, rental.customer_name, rental.start_date, rental.end_date, rental.days
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
