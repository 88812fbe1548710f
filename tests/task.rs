#[cfg(test)]
mod tests {
    use duke::libs::error::TaskError;
    use duke::libs::task::{AfterTask, Kind, Task};

    #[test]
    fn test_todo_display() {
        let task = Task::todo("read book").unwrap();
        assert_eq!(task.symbol(), 'T');
        assert_eq!(task.schedule(), None);
        assert!(!task.is_done());
        assert_eq!(task.to_string(), "[ ][T] read book");
    }

    #[test]
    fn test_deadline_formats_schedule() {
        let task = Task::deadline("return book", "2/12/2019 1800").unwrap();
        assert_eq!(task.symbol(), 'D');
        assert_eq!(task.schedule(), Some("02 Dec 2019 18:00"));
        assert_eq!(task.to_string(), "[ ][D] return book (by: 02 Dec 2019 18:00)");
    }

    #[test]
    fn test_event_formats_schedule() {
        let task = Task::event("project meeting", "6/8/2019 1400").unwrap();
        assert_eq!(task.kind(), &Kind::Event { at: "06 Aug 2019 14:00".to_string() });
        assert_eq!(task.to_string(), "[ ][E] project meeting (at: 06 Aug 2019 14:00)");
    }

    #[test]
    fn test_event_keeps_free_text_time() {
        let task = Task::event("project meeting", " Mon 2-4pm ").unwrap();
        assert_eq!(task.schedule(), Some("Mon 2-4pm"));
        assert_eq!(task.to_string(), "[ ][E] project meeting (at: Mon 2-4pm)");
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let err = Task::deadline("return book", "next monday").unwrap_err();
        assert!(matches!(err, TaskError::InvalidFormat { .. }));

        let err = Task::event("meeting", "  ").unwrap_err();
        assert!(matches!(err, TaskError::InvalidFormat { .. }));
    }

    #[test]
    fn test_blank_description_rejected() {
        let err = Task::todo("   ").unwrap_err();
        assert!(matches!(err, TaskError::MissingArgument { .. }));
    }

    #[test]
    fn test_mark_done_is_functional() {
        let mut task = Task::deadline("return book", "2/12/2019 1800").unwrap();
        task.add_tags("library urgent");

        let done = task.mark_done();
        assert!(done.is_done());
        assert!(!task.is_done());
        assert_eq!(done.description(), task.description());
        assert_eq!(done.kind(), task.kind());
        assert_eq!(done.tags(), task.tags());
        assert_eq!(done.to_string(), "[X][D] return book (by: 02 Dec 2019 18:00) #library  #urgent ");

        let undone = done.mark_undone();
        assert_eq!(undone, task);
    }

    #[test]
    fn test_add_tags_keeps_order_and_duplicates() {
        let mut task = Task::todo("water plants").unwrap();
        assert!(!task.has_tags());

        task.add_tags("home  garden");
        task.add_tags("home");
        assert_eq!(task.tags(), &["home", "garden", "home"]);
        assert!(task.has_tag("garden"));
        assert!(!task.has_tag("gar"));

        task.clear_tags();
        assert!(!task.has_tags());
    }

    #[test]
    fn test_after_task_hidden_until_done() {
        let mut task = Task::todo("buy flour").unwrap();
        task.set_after_task(AfterTask::new("bake bread").unwrap());

        assert!(task.has_after_task());
        assert!(task.after_task().is_none());
        assert_eq!(task.mark_after_task_done().unwrap_err(), TaskError::AfterTaskUnavailable);

        let done = task.mark_done();
        let after_task = done.after_task().unwrap();
        assert_eq!(after_task.description(), "bake bread");
        assert_eq!(after_task.task().symbol(), 'T');
        assert!(!after_task.task().has_after_task());
        assert!(!after_task.is_done());
    }

    #[test]
    fn test_after_task_marked_independently() {
        let mut task = Task::todo("buy flour").unwrap();
        task.set_after_task(AfterTask::new("bake bread").unwrap());
        let task = task.mark_done();

        let with_after_done = task.mark_after_task_done().unwrap();
        assert!(with_after_done.is_done());
        assert!(with_after_done.after_task().unwrap().is_done());
        assert!(!task.after_task().unwrap().is_done());

        let reverted = with_after_done.mark_after_task_undone().unwrap();
        assert_eq!(reverted, task);
    }

    #[test]
    fn test_task_without_after_task() {
        let task = Task::todo("nap").unwrap().mark_done();
        assert_eq!(task.mark_after_task_done().unwrap_err(), TaskError::AfterTaskUnavailable);
    }

    #[test]
    fn test_restore_keeps_schedule_text_verbatim() {
        let kind = Kind::Deadline {
            by: "sometime soon".to_string(),
        };
        let task = Task::restore("essay".to_string(), kind, true, vec!["uni".to_string()], None);
        assert_eq!(task.to_string(), "[X][D] essay (by: sometime soon) #uni ");
    }
}
