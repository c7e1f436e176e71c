#[cfg(test)]
mod tests {
    use sheetclock::libs::config::{Config, CONFIG_FILE_NAME, SHEET_ENV_VAR};
    use sheetclock::libs::data_storage::{DataStorage, APP_NAME};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const SHEET_ID: &str = "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms";
    const OTHER_SHEET_ID: &str = "1ZyXwVuTsRqPoNmLkJiHgFeDcBa0987654321_-abc";

    /// Tests in this file share HOME and GOOGLE_SHEET, so they run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary home for each test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(SHEET_ENV_VAR);
            ConfigTestContext {
                _guard: guard,
                temp_dir,
            }
        }

        fn teardown(self) {
            std::env::remove_var(SHEET_ENV_VAR);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.read_range().as_str(), "A:G");
        assert!(config.write_range().is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            sheet_id: Some(SHEET_ID.to_string()),
            read_range: Some("A1:E40".to_string()),
            write_range: Some("H1:I4".to_string()),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.read_range().as_str(), "A1:E40");
        assert_eq!(read_config.write_range().unwrap().as_str(), "H1:I4");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_fields_are_not_written(_ctx: &mut ConfigTestContext) {
        let config = Config {
            sheet_id: Some(SHEET_ID.to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("sheet_id"));
        assert!(!json.contains("read_range"));
        assert!(!json.contains("write_range"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_saved_ranges_fall_back(_ctx: &mut ConfigTestContext) {
        let config = Config {
            sheet_id: None,
            read_range: Some("everything".to_string()),
            write_range: Some("H1:".to_string()),
        };

        assert_eq!(config.read_range().as_str(), "A:G");
        assert!(config.write_range().is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_sheet_id_resolution_order(_ctx: &mut ConfigTestContext) {
        let url = format!("https://docs.google.com/spreadsheets/d/{}/edit", OTHER_SHEET_ID);
        let config = Config {
            sheet_id: Some(SHEET_ID.to_string()),
            ..Default::default()
        };

        // Saved config only
        assert_eq!(config.sheet_id(None).as_deref(), Some(SHEET_ID));

        // Environment wins over config
        std::env::set_var(SHEET_ENV_VAR, &url);
        assert_eq!(config.sheet_id(None).as_deref(), Some(OTHER_SHEET_ID));

        // Command line wins over everything
        assert_eq!(config.sheet_id(Some(SHEET_ID)).as_deref(), Some(SHEET_ID));

        // An unusable value falls through to the next source
        std::env::set_var(SHEET_ENV_VAR, "not a sheet");
        assert_eq!(config.sheet_id(Some("nope")).as_deref(), Some(SHEET_ID));

        std::env::remove_var(SHEET_ENV_VAR);
        assert_eq!(Config::default().sheet_id(None), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lives_in_app_directory(ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();

        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.parent().unwrap().ends_with(APP_NAME));
        assert!(!path.parent().unwrap().parent().unwrap().ends_with(APP_NAME));
        assert!(path.parent().unwrap().exists());

        #[cfg(target_os = "linux")]
        assert_eq!(path, ctx.temp_dir.path().join(".local/share/sheetclock/config.json"));
    }
}
