use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name used when the caller does not supply one.
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

/// The expected conditions of the scheduler, reported to the caller
/// rather than raised destructively. None of them is fatal; the menu
/// loop keeps running after displaying any of them.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The priority field could not be coerced to an integer.
    #[error("invalid priority '{0}': expected an integer")]
    InvalidPriority(String),

    /// Extraction was attempted on an empty scheduler.
    #[error("no tasks available")]
    EmptyCollection,

    /// The load source does not exist.
    #[error("file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    /// A persisted line did not split into exactly four fields.
    /// Aborts the remainder of the load; lines already parsed stay.
    #[error("malformed record at line {line_no}: expected four comma-separated fields, got '{line}'")]
    MalformedRecord { line_no: usize, line: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single task. Immutable after creation; compared only by priority
/// (higher number = higher priority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub due_date: String,
    pub priority: i64,
    pub estimated_time: String,
}

impl Task {
    /// Build a task, coercing the priority text to an integer. The
    /// text fields are taken as-is; the due date shape is checked by
    /// the caller, not here.
    pub fn new(
        description: String,
        due_date: String,
        priority: &str,
        estimated_time: String,
    ) -> Result<Task, SchedulerError> {
        let priority = priority
            .trim()
            .parse::<i64>()
            .map_err(|_| SchedulerError::InvalidPriority(priority.to_string()))?;
        Ok(Task {
            description,
            due_date,
            priority,
            estimated_time,
        })
    }

    /// Render the persistence line: four fields joined by commas, no
    /// escaping. A comma inside any field corrupts the record on
    /// reload; this is a documented limitation of the format.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{}",
            self.description, self.due_date, self.priority, self.estimated_time
        )
    }

    /// Parse a persistence line back into a task. `line_no` is the
    /// 1-based position in the source file, carried into the error.
    pub fn from_record(line: &str, line_no: usize) -> Result<Task, SchedulerError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(SchedulerError::MalformedRecord {
                line_no,
                line: line.to_string(),
            });
        }
        Task::new(
            fields[0].to_string(),
            fields[1].to_string(),
            fields[2],
            fields[3].to_string(),
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task: {}", self.description)?;
        writeln!(f, "  Due date:       {}", self.due_date)?;
        writeln!(f, "  Priority:       {}", self.priority)?;
        write!(f, "  Estimated time: {}", self.estimated_time)
    }
}

/// A heap entry. The sequence number gives equal priorities a
/// deterministic FIFO order instead of whatever the heap happens to
/// produce.
#[derive(Debug)]
struct Entry {
    task: Task,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: cmp returning Greater means self
        // pops first. Higher priority pops first; within the same
        // priority, the earlier insertion pops first.
        self.task
            .priority
            .cmp(&other.task.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// The priority-ordered task collection. Owns its tasks exclusively;
/// no capacity limit, no deduplication.
#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a task. Always succeeds.
    pub fn add_task(&mut self, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { task, seq });
    }

    /// Remove and return the highest-priority task, or signal
    /// `EmptyCollection` if there is none.
    pub fn get_next_task(&mut self) -> Result<Task, SchedulerError> {
        self.heap
            .pop()
            .map(|entry| entry.task)
            .ok_or(SchedulerError::EmptyCollection)
    }

    /// All tasks ordered by descending priority (insertion order
    /// within ties), without removing any. Empty vec when empty.
    pub fn list_all(&self) -> Vec<&Task> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|entry| &entry.task).collect()
    }

    /// Write every task as a record line, ordered by descending
    /// priority, overwriting the destination. Does not mutate the
    /// collection; an empty scheduler writes a zero-line file.
    pub fn save(&self, path: &Path) -> Result<(), SchedulerError> {
        let mut writer = BufWriter::new(File::create(path)?);
        for task in self.list_all() {
            writeln!(writer, "{}", task.to_record())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read record lines from the source, appending each parsed task
    /// to whatever is already present. Returns the number of records
    /// loaded. A missing source signals `SourceNotFound` and leaves
    /// the collection unchanged; a malformed line aborts the rest of
    /// the load.
    pub fn load(&mut self, path: &Path) -> Result<usize, SchedulerError> {
        if !path.exists() {
            return Err(SchedulerError::SourceNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        let mut loaded = 0;
        for (index, line) in reader.lines().enumerate() {
            let task = Task::from_record(&line?, index + 1)?;
            self.add_task(task);
            loaded += 1;
        }
        Ok(loaded)
    }
}
