#[cfg(test)]
mod tests {
    use duke::commands::action::Action;
    use duke::commands::session::{Flow, Session};
    use duke::libs::error::TaskError;
    use duke::libs::messages::Message;
    use duke::storage::TaskFile;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl SessionTestContext {
        fn session(&self) -> Session {
            Session::open(TaskFile::new(&self.path)).unwrap()
        }

        fn content(&self) -> String {
            fs::read_to_string(&self.path).unwrap_or_default()
        }
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.txt");
            SessionTestContext { _temp_dir: temp_dir, path }
        }
    }

    fn descriptions(session: &Session) -> Vec<String> {
        session.tasks().all().iter().map(|task| task.description().to_string()).collect()
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_creation_appends_to_file(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        assert_eq!(session.handle_line("todo read book"), Flow::Continue);
        assert_eq!(session.handle_line("deadline return book /by 2/12/2019 1800"), Flow::Continue);
        assert_eq!(session.handle_line("event book club /at 6/8/2019 1400"), Flow::Continue);

        assert_eq!(
            ctx.content(),
            "T | 0 | read book\nD | 0 | return book | 02 Dec 2019 18:00\nE | 0 | book club | 06 Aug 2019 14:00\n"
        );
        assert_eq!(session.tasks().len(), 3);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_done_and_delete_rewrite_file(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        session.handle_line("todo A");
        session.handle_line("todo B");

        session.handle_line("delete 1");
        assert_eq!(descriptions(&session), vec!["B"]);
        assert_eq!(ctx.content(), "T | 0 | B\n");

        session.handle_line("done 1");
        assert!(session.tasks().all()[0].is_done());
        assert_eq!(ctx.content(), "T | 1 | B\n");

        session.handle_line("undone 1");
        assert_eq!(ctx.content(), "T | 0 | B\n");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_errors_leave_state_untouched(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        session.handle_line("todo A");
        let before = ctx.content();

        for line in ["done 5", "delete 0", "done x", "todo", "deadline A", "deadline A /by 31/2/2020 1200", "afterdone 1", "nonsense"] {
            assert_eq!(session.handle_line(line), Flow::Continue, "line {:?}", line);
        }

        assert_eq!(descriptions(&session), vec!["A"]);
        assert!(!session.tasks().all()[0].is_done());
        assert_eq!(ctx.content(), before);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_execute_surfaces_task_errors(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        let err = session.execute(Action::Done { number: 1 }).unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::OutOfBound { number: 1, len: 0 }));

        let err = session
            .execute(Action::Deadline {
                description: "essay".to_string(),
                by: "soon".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<TaskError>(), Some(TaskError::InvalidFormat { .. })));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_event_keeps_free_text_time(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        session.handle_line("event project meeting /at Mon 2-4pm");
        assert_eq!(ctx.content(), "E | 0 | project meeting | Mon 2-4pm\n");

        let reopened = ctx.session();
        assert_eq!(reopened.tasks().all()[0].to_string(), "[ ][E] project meeting (at: Mon 2-4pm)");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_separator_in_description_survives_reload(ctx: &mut SessionTestContext) {
        {
            let mut session = ctx.session();
            session.handle_line("todo a | b");
            session.handle_line("todo buy | #milk");
            session.handle_line("after 2 pay | tip");
            session.handle_line("done 2");
        }

        let reopened = ctx.session();
        assert_eq!(descriptions(&reopened), vec!["a | b", "buy | #milk"]);
        let task = &reopened.tasks().all()[1];
        assert!(!task.has_tags());
        assert_eq!(task.after_task().unwrap().description(), "pay | tip");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_reports_damaged_file(ctx: &mut SessionTestContext) {
        fs::write(&ctx.path, "T | 0 | A\nT | 0 | B | stray\n").unwrap();

        let err = match Session::open(TaskFile::new(&ctx.path)) {
            Ok(_) => panic!("damaged file should not open"),
            Err(err) => err,
        };
        let detail = format!(
            "{} ({})",
            TaskError::CorruptRecord {
                line: 2,
                reason: "unexpected trailing field".to_string(),
            },
            ctx.path.display()
        );
        assert_eq!(err.to_string(), format!("❌ {}", Message::CorruptTaskFile(detail)));
        assert_eq!(fs::read_to_string(&ctx.path).unwrap(), "T | 0 | A\nT | 0 | B | stray\n");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_tags_and_after_task_persist(ctx: &mut SessionTestContext) {
        {
            let mut session = ctx.session();
            session.handle_line("todo buy flour");
            session.handle_line("tag 1 errand kitchen");
            session.handle_line("after 1 bake bread");
            session.handle_line("done 1");
            session.handle_line("afterdone 1");
        }
        assert_eq!(ctx.content(), "T | 1 | buy flour | #errand #kitchen | >1 bake bread\n");

        let mut session = ctx.session();
        let task = &session.tasks().all()[0];
        assert_eq!(task.tags(), &["errand", "kitchen"]);
        assert!(task.after_task().unwrap().is_done());

        session.handle_line("untag 1");
        assert_eq!(ctx.content(), "T | 1 | buy flour | >1 bake bread\n");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_queries_do_not_touch_file(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        session.handle_line("todo read book");
        session.handle_line("tag 1 leisure");
        let before = ctx.content();

        for line in ["list", "find book", "find nothing", "tagged leisure", "tagged work", ""] {
            assert_eq!(session.handle_line(line), Flow::Continue);
        }
        assert_eq!(ctx.content(), before);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_run_stops_at_bye(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        let input = Cursor::new("todo A\nbye\ntodo B\n");
        session.run(input).unwrap();

        assert_eq!(descriptions(&session), vec!["A"]);
        assert_eq!(ctx.content(), "T | 0 | A\n");
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_run_until_end_of_input(ctx: &mut SessionTestContext) {
        let mut session = ctx.session();
        session.run(Cursor::new("todo A\n\ntodo B")).unwrap();
        assert_eq!(descriptions(&session), vec!["A", "B"]);

        let reopened = ctx.session();
        assert_eq!(descriptions(&reopened), vec!["A", "B"]);
    }
}
