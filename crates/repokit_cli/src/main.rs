//! Customer repository demo.
//!
//! # Responsibility
//! - Walk a `CustomerRepository` through add/list/update/lookup/delete.
//! - Print each step as human-readable lines on stdout.
//!
//! Logging is configured through `REPOKIT_LOG_LEVEL` and `REPOKIT_LOG_DIR`.

use log::info;
use repokit_core::{init_logging, Customer, CustomerRepository, LogConfig, Repository};
use std::io::{self, Write};
use std::process::ExitCode;

const SEARCH_EMAIL: &str = "jane.smith@example.com";

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("repokit: logging disabled: {err}");
    }
    info!(
        "event=demo_start module=cli status=ok version={}",
        repokit_core::core_version()
    );

    let stdout = io::stdout();
    match run_demo(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("repokit: failed to write output: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo(out: &mut impl Write) -> io::Result<()> {
    let mut customers = CustomerRepository::new();

    let mut john = Customer::new(1, "John Doe", "john.doe@example.com");
    let jane = Customer::new(2, "Jane Smith", "jane.smith@example.com");
    customers.add(john.clone());
    customers.add(jane);

    writeln!(out, "All Customers:")?;
    write_all(out, &customers)?;

    john.name = "Johnathan Doe".to_string();
    customers.update(john);

    writeln!(out)?;
    writeln!(out, "Updated Customer:")?;
    write_one(out, customers.get_by_id(1))?;

    writeln!(out)?;
    writeln!(out, "Customer with email {SEARCH_EMAIL}:")?;
    write_one(out, customers.get_by_email(SEARCH_EMAIL))?;

    customers.delete(1);

    writeln!(out)?;
    writeln!(out, "All Customers After Deletion:")?;
    write_all(out, &customers)?;

    out.flush()
}

fn write_all(out: &mut impl Write, customers: &CustomerRepository) -> io::Result<()> {
    for customer in customers.get_all() {
        writeln!(out, "{customer}")?;
    }
    Ok(())
}

fn write_one(out: &mut impl Write, customer: Option<&Customer>) -> io::Result<()> {
    match customer {
        Some(customer) => writeln!(out, "{customer}"),
        None => writeln!(out, "not found"),
    }
}
