use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use prettytable::Table;

use crate::cli::{self, MenuChoice};
use crate::model::{Scheduler, Task};

const MENU: &str = "\
========== TASK SCHEDULER ==========
1. Add Task
2. View Next Task
3. View All Tasks
4. Save Tasks to File
5. Load Tasks from File
6. Exit
====================================";

/// Run the interactive session: print the menu, read a choice,
/// dispatch to the scheduler, repeat until the user exits. Every
/// scheduler error is displayed and the loop continues.
pub fn run(scheduler: &mut Scheduler, tasks_file: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", MENU);
        let choice = match prompt(&mut input, "Enter your choice (1-6): ")? {
            Some(choice) => choice,
            None => break, // stdin closed
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddTask) => add_task(scheduler, &mut input)?,
            Some(MenuChoice::ViewNextTask) => view_next_task(scheduler),
            Some(MenuChoice::ViewAllTasks) => view_all_tasks(scheduler),
            Some(MenuChoice::SaveTasks) => save_tasks(scheduler, tasks_file),
            Some(MenuChoice::LoadTasks) => load_tasks(scheduler, tasks_file),
            Some(MenuChoice::Exit) => break,
            None => println!("Invalid choice! Please try again.\n"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Collect the four task fields. The due date is rejected here, before
/// any task is constructed; a non-integer priority is reported by the
/// constructor and the menu comes back around.
fn add_task(scheduler: &mut Scheduler, input: &mut impl BufRead) -> Result<()> {
    let description = match prompt(input, "Enter task description: ")? {
        Some(text) => text,
        None => return Ok(()),
    };
    let due_date = match prompt(input, "Enter due date (YYYY-MM-DD): ")? {
        Some(text) => text,
        None => return Ok(()),
    };
    if !cli::due_date_is_well_formed(&due_date) {
        println!("Please use the format YYYY-MM-DD.\n");
        return Ok(());
    }
    let priority = match prompt(input, "Enter priority (higher number = higher priority): ")? {
        Some(text) => text,
        None => return Ok(()),
    };
    let estimated_time = match prompt(input, "Enter estimated time to complete (e.g. 2 hours): ")? {
        Some(text) => text,
        None => return Ok(()),
    };

    match Task::new(description, due_date, &priority, estimated_time) {
        Ok(task) => {
            scheduler.add_task(task);
            println!("Task added successfully!\n");
        }
        Err(err) => println!("{}\n", err),
    }
    Ok(())
}

fn view_next_task(scheduler: &mut Scheduler) {
    match scheduler.get_next_task() {
        Ok(task) => {
            println!("Next Task (Highest Priority):");
            println!("{}\n", task);
        }
        Err(err) => println!("{}\n", err),
    }
}

fn view_all_tasks(scheduler: &Scheduler) {
    let tasks = scheduler.list_all();
    if tasks.is_empty() {
        println!("No tasks in the scheduler.\n");
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["priority", "task", "due date", "estimated time"]);
    for task in tasks {
        table.add_row(row![
            task.priority,
            task.description,
            task.due_date,
            task.estimated_time
        ]);
    }
    table.printstd();
    println!();
}

fn save_tasks(scheduler: &Scheduler, tasks_file: &Path) {
    match scheduler.save(tasks_file) {
        Ok(()) => println!("Tasks saved to '{}' successfully!\n", tasks_file.display()),
        Err(err) => println!("{}\n", err),
    }
}

fn load_tasks(scheduler: &mut Scheduler, tasks_file: &Path) {
    match scheduler.load(tasks_file) {
        Ok(count) => println!("Loaded {} task(s) from '{}'.\n", count, tasks_file.display()),
        Err(err) => println!("{}\n", err),
    }
}

/// Print a prompt and read one trimmed line. Returns `None` when the
/// input stream is closed.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
