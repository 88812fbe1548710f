#[cfg(test)]
mod tests {
    use duke::libs::task::{AfterTask, Task};
    use duke::libs::view::View;

    #[test]
    fn test_table_numbers_from_one() {
        let tasks = vec![Task::todo("read book").unwrap(), Task::todo("buy milk").unwrap().mark_done()];
        let rendered = View::table(&tasks).to_string();

        assert!(rendered.contains("1."));
        assert!(rendered.contains("[ ][T] read book"));
        assert!(rendered.contains("2."));
        assert!(rendered.contains("[X][T] buy milk"));
    }

    #[test]
    fn test_table_shows_unlocked_after_task() {
        let mut task = Task::todo("buy flour").unwrap();
        task.set_after_task(AfterTask::new("bake bread").unwrap());

        let pending = View::table([&task]).to_string();
        assert!(!pending.contains("bake bread"));

        let done = task.mark_done();
        let rendered = View::table([&done]).to_string();
        assert!(rendered.contains("-> [ ][T] bake bread"));
    }
}
