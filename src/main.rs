#[macro_use] extern crate prettytable;

use structopt::StructOpt;
use anyhow::anyhow;
use std::path::PathBuf;
use directories::ProjectDirs;

mod cli;
mod model;
mod interface;

use cli::CommandLineArgs;
use model::Scheduler;

fn find_default_tasks_file() -> Option<PathBuf> {
    if let Some(base_dirs) = ProjectDirs::from("com", "gozque", "ordo") {
        let root_dir = base_dirs.data_dir();
        if !root_dir.exists() {
            std::fs::create_dir_all(root_dir).ok()?;
        }
        let mut path = PathBuf::from(root_dir);
        path.push(model::DEFAULT_TASKS_FILE);
        Some(path)
    } else {
        None
    }
}

fn main() -> anyhow::Result<()> {
    // Get the command-line arguments.
    let CommandLineArgs { tasks_file } = CommandLineArgs::from_args();

    // Unpack the tasks file.
    let tasks_file = tasks_file
        .or_else(find_default_tasks_file)
        .ok_or(anyhow!("Failed to find tasks file."))?;

    // Run the interactive session with one long-lived scheduler.
    let mut scheduler = Scheduler::new();
    interface::run(&mut scheduler, &tasks_file)?;
    Ok(())
}
