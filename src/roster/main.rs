use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::{CmdMessage, EmployeeUpdate, MessageLevel, NewEmployee, RosterApi};
use roster::commands::helpers::eq_ignore_case;
use roster::error::Result;
use roster::model::Employee;
use roster::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

const DATA_FILE: &str = "employees.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(data_file_path(&cli));

    let (mut api, messages) = RosterApi::open(store);
    print_messages(&messages);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let choice = match prompt(&mut input, "Enter your choice: ")? {
            Some(choice) => choice,
            None => break, // stdin closed
        };

        match choice.trim() {
            "1" => handle_add(&mut api, &mut input)?,
            "2" => handle_view(&api)?,
            "3" => handle_update(&mut api, &mut input)?,
            "4" => handle_delete(&mut api, &mut input)?,
            "5" => handle_search(&api, &mut input)?,
            "6" => handle_sort(&mut api, &mut input)?,
            "7" => {
                println!("Exiting Employee Management System. Goodbye!");
                break;
            }
            _ => println!("{}", "Invalid choice. Please try again.".red()),
        }
    }

    Ok(())
}

fn data_file_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.file {
        return path.clone();
    }
    match ProjectDirs::from("com", "roster", "roster") {
        Some(dirs) => dirs.data_dir().join(DATA_FILE),
        None => PathBuf::from(DATA_FILE),
    }
}

fn print_menu() {
    println!();
    println!("===== Employee Management System =====");
    println!("1. Add Employee");
    println!("2. View Employees");
    println!("3. Update Employee");
    println!("4. Delete Employee");
    println!("5. Search Employee");
    println!("6. Sort Employees");
    println!("7. Exit");
}

/// Print a prompt and read one line. `None` means stdin is closed, so piped
/// input ends the session instead of spinning on an empty reader.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn handle_add(api: &mut RosterApi<FileStore>, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = prompt(input, "Enter name: ")? else {
        return Ok(());
    };
    let Some(age_raw) = prompt(input, "Enter age: ")? else {
        return Ok(());
    };
    let Ok(age) = age_raw.trim().parse::<u32>() else {
        println!("{}", "Invalid input! Age must be a whole number.".red());
        return Ok(());
    };
    let Some(position) = prompt(input, "Enter position: ")? else {
        return Ok(());
    };
    let Some(salary_raw) = prompt(input, "Enter salary: ")? else {
        return Ok(());
    };
    let Ok(salary) = salary_raw.trim().parse::<f64>() else {
        println!("{}", "Invalid input! Salary must be a number.".red());
        return Ok(());
    };
    let Some(department) = prompt(input, "Enter department: ")? else {
        return Ok(());
    };
    let Some(location) = prompt(input, "Enter location: ")? else {
        return Ok(());
    };

    let result = api.add_employee(NewEmployee {
        name,
        age,
        position,
        salary,
        department,
        location,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.view_employees()?;
    if result.listed_employees.is_empty() {
        println!("No employees found.");
    } else {
        println!();
        println!("List of Employees:");
        print_employees(&result.listed_employees);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &mut RosterApi<FileStore>, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = prompt(input, "Enter employee name to update: ")? else {
        return Ok(());
    };
    let known = api.employees().iter().any(|e| eq_ignore_case(e.name(), &name));
    if !known {
        println!("{}", format!("Employee '{}' not found.", name).red());
        return Ok(());
    }

    println!("Enter new details (press Enter to keep the current value):");
    let Some(age_raw) = prompt(input, "New age: ")? else {
        return Ok(());
    };
    let age = if age_raw.trim().is_empty() {
        None
    } else {
        match age_raw.trim().parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) => {
                println!(
                    "{}",
                    "Invalid input! Age must be a whole number. Update cancelled.".red()
                );
                return Ok(());
            }
        }
    };
    let Some(position_raw) = prompt(input, "New position: ")? else {
        return Ok(());
    };
    let Some(salary_raw) = prompt(input, "New salary: ")? else {
        return Ok(());
    };
    let salary = if salary_raw.trim().is_empty() {
        None
    } else {
        match salary_raw.trim().parse::<f64>() {
            Ok(salary) => Some(salary),
            Err(_) => {
                println!(
                    "{}",
                    "Invalid input! Salary must be a number. Update cancelled.".red()
                );
                return Ok(());
            }
        }
    };
    let Some(department_raw) = prompt(input, "New department: ")? else {
        return Ok(());
    };
    let Some(location_raw) = prompt(input, "New location: ")? else {
        return Ok(());
    };

    let update = EmployeeUpdate {
        age,
        position: blank_to_none(position_raw),
        salary,
        department: blank_to_none(department_raw),
        location: blank_to_none(location_raw),
    };
    let result = api.update_employee(&name, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut RosterApi<FileStore>, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = prompt(input, "Enter employee name to delete: ")? else {
        return Ok(());
    };
    let result = api.delete_employees(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &RosterApi<FileStore>, input: &mut impl BufRead) -> Result<()> {
    let Some(term) = prompt(input, "Enter employee name to search: ")? else {
        return Ok(());
    };
    let result = api.search_employees(&term)?;
    if !result.listed_employees.is_empty() {
        println!();
        println!("Matching Employees:");
        print_employees(&result.listed_employees);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(api: &mut RosterApi<FileStore>, input: &mut impl BufRead) -> Result<()> {
    let Some(criterion) = prompt(input, "Sort by salary or position? (salary/position): ")?
    else {
        return Ok(());
    };
    let result = api.sort_employees(&criterion)?;
    if !result.listed_employees.is_empty() {
        println!();
        println!("List of Employees:");
        print_employees(&result.listed_employees);
    }
    print_messages(&result.messages);
    Ok(())
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const COLUMN_GAP: usize = 2;

fn print_employees(employees: &[Employee]) {
    let headers = ["Name", "Age", "Position", "Salary", "Department", "Location"];
    let rows: Vec<[String; 6]> = employees
        .iter()
        .map(|e| {
            [
                e.name().to_string(),
                e.age().to_string(),
                e.position().to_string(),
                format_salary(e.salary()),
                e.department().to_string(),
                e.location().to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    print_row(&headers.map(String::from), &widths, true);
    for row in &rows {
        print_row(row, &widths, false);
    }
}

fn print_row(cells: &[String; 6], widths: &[usize; 6], header: bool) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths.iter()) {
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.width() + COLUMN_GAP));
    }
    let line = line.trim_end();
    if header {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}

fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{:.0}", salary)
    } else {
        format!("{:.2}", salary)
    }
}
