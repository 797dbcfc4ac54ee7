use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Ordo",
    about = "A minimalistic priority-driven task scheduler."
)]
pub struct CommandLineArgs {
    /// Use a different tasks file.
    #[structopt(parse(from_os_str), short, long)]
    pub tasks_file: Option<PathBuf>,
}

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ViewNextTask,
    ViewAllTasks,
    SaveTasks,
    LoadTasks,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::AddTask),
            "2" => Some(MenuChoice::ViewNextTask),
            "3" => Some(MenuChoice::ViewAllTasks),
            "4" => Some(MenuChoice::SaveTasks),
            "5" => Some(MenuChoice::LoadTasks),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Shape check only: a well-formed due date has exactly two dash
/// separators ("YYYY-MM-DD"). Calendar validity is not checked.
pub fn due_date_is_well_formed(due_date: &str) -> bool {
    due_date.split('-').count() == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_parse_by_number() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddTask));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn due_date_shape_check_counts_dashes_only() {
        assert!(due_date_is_well_formed("2024-06-01"));
        // not a real date, but the right shape
        assert!(due_date_is_well_formed("2024-13-99"));
        assert!(!due_date_is_well_formed("2024/06/01"));
        assert!(!due_date_is_well_formed("2024-06"));
        assert!(!due_date_is_well_formed("2024-06-01-extra"));
    }
}
