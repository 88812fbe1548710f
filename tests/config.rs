#[cfg(test)]
mod tests {
    use duke::libs::config::{Config, StorageConfig, DEFAULT_TASK_FILE_NAME};
    use duke::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        data_storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data_storage = DataStorage::at(temp_dir.path().join("duke"));
            ConfigTestContext { temp_dir, data_storage }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.is_none());
        assert_eq!(StorageConfig::default().file_name, DEFAULT_TASK_FILE_NAME);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.data_storage).unwrap();
        assert_eq!(config, Config::default());
        assert!(ctx.data_storage.base_path().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                file_name: "work.txt".to_string(),
            }),
        };
        config.save_to(&ctx.data_storage).unwrap();

        let read_config = Config::read_from(&ctx.data_storage).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_task_file_path_resolution(ctx: &mut ConfigTestContext) {
        let default_path = Config::default().task_file_path_in(&ctx.data_storage).unwrap();
        assert_eq!(default_path, ctx.data_storage.base_path().join(DEFAULT_TASK_FILE_NAME));

        let absolute = ctx.temp_dir.path().join("elsewhere.txt");
        let config = Config {
            storage: Some(StorageConfig {
                file_name: absolute.to_string_lossy().to_string(),
            }),
        };
        assert_eq!(config.task_file_path_in(&ctx.data_storage).unwrap(), absolute);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig::default()),
        };
        config.save_to(&ctx.data_storage).unwrap();
        Config::delete_from(&ctx.data_storage).unwrap();

        assert_eq!(Config::read_from(&ctx.data_storage).unwrap(), Config::default());
        Config::delete_from(&ctx.data_storage).unwrap();
    }
}
