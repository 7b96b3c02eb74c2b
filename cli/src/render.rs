//! Plain-text rendering of the two todo partitions.

use std::fmt::Write;

use todo_sync::Todo;

pub fn render(in_progress: &[Todo], completed: &[Todo]) -> String {
    let mut out = String::new();
    section(&mut out, "In progress", ' ', in_progress);
    section(&mut out, "Completed", 'x', completed);
    out
}

fn section(out: &mut String, title: &str, mark: char, todos: &[Todo]) {
    let _ = writeln!(out, "{title} ({})", todos.len());
    if todos.is_empty() {
        out.push_str("  (none)\n");
    }
    for todo in todos {
        let _ = writeln!(out, "  [{mark}] {}  {}", todo.id, todo.task);
    }
}
