use chrono::NaiveDate;

use crate::model::task::Task;

/// One display row: a task plus its derived display fields. Pure data; the
/// presentation layer decides what the tags mean visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// "Done" or "Pending"
    pub status_label: &'static str,
    /// Row styling hint: "Done" for completed tasks, else the priority code.
    pub style_tag: &'static str,
}

/// Sort sentinel: a task with no (or an unparseable) due date goes after
/// every dated task.
fn due_key(task: &Task) -> NaiveDate {
    task.due().unwrap_or(NaiveDate::MAX)
}

/// Order a list's tasks for display: open before done, then by priority rank,
/// then by due date ascending.
///
/// The sort is stable by contract, so otherwise-equal tasks keep their store
/// (insertion) order.
pub fn project<'a>(tasks: &[&'a Task]) -> Vec<TaskRow<'a>> {
    let mut sorted: Vec<&'a Task> = tasks.to_vec();
    sorted.sort_by_key(|t| (t.is_done, t.priority.rank(), due_key(t)));

    sorted
        .into_iter()
        .map(|task| TaskRow {
            task,
            status_label: if task.is_done { "Done" } else { "Pending" },
            style_tag: if task.is_done {
                "Done"
            } else {
                task.priority.code()
            },
        })
        .collect()
}
