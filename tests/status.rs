#[cfg(test)]
mod tests {
    use taskdesk::libs::status::TaskStatus;
    use taskdesk::libs::task::Task;
    use taskdesk::libs::view::View;

    const TODAY: &str = "2024-06-15";

    fn task(due_date: &str, completed: bool) -> Task {
        Task {
            id: "1".to_string(),
            title: "Buy groceries".to_string(),
            description: String::new(),
            due_date: due_date.to_string(),
            completed,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_completed_wins_regardless_of_due_date() {
        for due in ["2020-01-01", TODAY, "2030-12-31", ""] {
            assert_eq!(TaskStatus::classify(true, due, TODAY), TaskStatus::Completed);
        }
    }

    #[test]
    fn test_past_due_incomplete_is_overdue() {
        assert_eq!(TaskStatus::classify(false, "2024-06-14", TODAY), TaskStatus::Overdue);
        assert_eq!(TaskStatus::classify(false, "2023-12-31", TODAY), TaskStatus::Overdue);
    }

    #[test]
    fn test_due_today_or_later_is_in_progress() {
        assert_eq!(TaskStatus::classify(false, TODAY, TODAY), TaskStatus::InProgress);
        assert_eq!(TaskStatus::classify(false, "2024-06-16", TODAY), TaskStatus::InProgress);
        assert_eq!(TaskStatus::classify(false, "2025-01-01", TODAY), TaskStatus::InProgress);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert_eq!(TaskStatus::Overdue.to_string(), "Overdue");
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_task_status_uses_own_fields() {
        assert_eq!(task("2024-01-01", false).status(TODAY), TaskStatus::Overdue);
        assert_eq!(task("2024-01-01", true).status(TODAY), TaskStatus::Completed);
        assert_eq!(task("2024-07-01", false).status(TODAY), TaskStatus::InProgress);
    }

    #[test]
    fn test_table_rows_show_display_date_and_status() {
        let overdue = task("2024-03-01", false);
        let done = task("2024-03-01", true);
        let upcoming = task("2024-07-04", false);
        let table = View::tasks_table(&[&overdue, &done, &upcoming], TODAY);

        let cell = |row: usize, column: usize| table.get_row(row).unwrap().get_cell(column).unwrap().get_content();
        assert_eq!(table.len(), 4);
        assert_eq!(cell(0, 3), "DUE");
        assert_eq!(cell(0, 4), "STATUS");
        assert_eq!(cell(1, 1), "Buy groceries");
        assert_eq!(cell(1, 3), "Mar 1, 2024");
        assert_eq!(cell(1, 4), "Overdue");
        assert_eq!(cell(2, 4), "Completed");
        assert_eq!(cell(3, 3), "Jul 4, 2024");
        assert_eq!(cell(3, 4), "In Progress");
    }
}
