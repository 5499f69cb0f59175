#[cfg(test)]
mod tests {
    use taskdesk::libs::collection::{StatusFilter, TaskCollection, TaskCounts};
    use taskdesk::libs::task::Task;

    fn task(id: &str, title: &str, description: &str, due_date: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.to_string(),
            completed,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn sample() -> TaskCollection {
        TaskCollection::new(vec![
            task("1", "Buy Groceries", "milk and eggs", "2024-03-01", false),
            task("2", "Pay rent", "", "2024-01-15", true),
            task("3", "Plan trip", "remember GROCERIES for the road", "2024-02-10", false),
            task("4", "Write report", "quarterly numbers", "2024-01-20", true),
        ])
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let collection = sample();
        assert_eq!(collection.view(StatusFilter::All, "").len(), 4);
    }

    #[test]
    fn test_filter_active_returns_incomplete_subset() {
        let collection = sample();
        let active = collection.view(StatusFilter::Active, "");
        assert!(active.iter().all(|t| !t.completed));
        assert_eq!(ids(&active), vec!["3", "1"]);
    }

    #[test]
    fn test_filter_completed_returns_completed_subset() {
        let collection = sample();
        let completed = collection.view(StatusFilter::Completed, "");
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(ids(&completed), vec!["2", "4"]);
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitively() {
        let collection = sample();
        let found = collection.view(StatusFilter::All, "groceries");
        assert_eq!(ids(&found), vec!["3", "1"]);

        let found = collection.view(StatusFilter::All, "QUARTERLY");
        assert_eq!(ids(&found), vec!["4"]);
    }

    #[test]
    fn test_search_combines_with_filter() {
        let collection = sample();
        assert!(collection.view(StatusFilter::Completed, "groceries").is_empty());
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let collection = sample();
        assert_eq!(collection.view(StatusFilter::All, "   ").len(), 4);
    }

    #[test]
    fn test_no_match_is_empty() {
        let collection = sample();
        assert!(collection.view(StatusFilter::All, "dentist").is_empty());
    }

    #[test]
    fn test_sort_ascending_by_due_date() {
        let collection = TaskCollection::new(vec![
            task("a", "Later", "", "2024-03-01", false),
            task("b", "Sooner", "", "2024-01-15", false),
        ]);
        let dates: Vec<&str> = collection.view(StatusFilter::All, "").iter().map(|t| t.due_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-03-01"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let collection = TaskCollection::new(vec![
            task("x", "First", "", "2024-05-05", false),
            task("y", "Second", "", "2024-05-05", false),
            task("z", "Earlier", "", "2024-05-01", false),
        ]);
        assert_eq!(ids(&collection.view(StatusFilter::All, "")), vec!["z", "x", "y"]);
    }

    #[test]
    fn test_counts_ignore_filter_and_search() {
        let collection = sample();
        assert_eq!(
            collection.counts(),
            TaskCounts {
                all: 4,
                active: 2,
                completed: 2
            }
        );
    }
}
