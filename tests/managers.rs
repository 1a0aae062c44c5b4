#[cfg(test)]
mod tests {
    use tabel::db::managers::Managers;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ManagerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ManagerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ManagerTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_insert_and_check(_ctx: &mut ManagerTestContext) {
        let mut managers = Managers::new().unwrap();
        assert!(!managers.is_manager("boss-1").unwrap());

        managers.insert("boss-1", "Sidorov S.S.").unwrap();
        assert!(managers.is_manager("boss-1").unwrap());
        assert!(!managers.is_manager("boss-2").unwrap());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_insert_same_contact_replaces(_ctx: &mut ManagerTestContext) {
        let mut managers = Managers::new().unwrap();
        managers.insert("boss-1", "Sidorov").unwrap();
        managers.insert("boss-1", "Sidorov S.S.").unwrap();

        let all = managers.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].full_name, "Sidorov S.S.");
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_remove(_ctx: &mut ManagerTestContext) {
        let mut managers = Managers::new().unwrap();
        managers.insert("boss-1", "Sidorov").unwrap();
        managers.remove("boss-1").unwrap();

        assert!(!managers.is_manager("boss-1").unwrap());
        assert!(managers.fetch_all().unwrap().is_empty());
    }
}
