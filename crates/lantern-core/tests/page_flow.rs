use lantern_core::theme::DEFAULT_THEME_STORAGE_KEY;
use lantern_core::{
    MemoryStore, PreferenceStore, SiteConfig, TaskRow, TaskWindow, Theme, ThemeController,
    ToastStack,
};

#[test]
fn checklist_completion_drives_toasts() {
    let cfg = SiteConfig::from_toml_str(
        r#"
[tasks]
seed = ["A", "B", "C", "D", "E"]
"#,
    )
    .expect("parse site config");

    let mut tasks = TaskWindow::with_tasks(cfg.tasks.window_size, &cfg.tasks.seed);
    let mut toasts = ToastStack::new(cfg.toasts);

    let initial = tasks.initialize();
    assert_eq!(initial.task_texts(), vec!["A", "B", "C"]);

    let done = tasks.complete_task(1).expect("complete slot 1");
    let first = toasts.push(done, 0);
    assert_eq!(tasks.render().task_texts(), vec!["A", "C", "D"]);

    let done = tasks.complete_task(0).expect("complete slot 0");
    toasts.push(done, 100);
    assert_eq!(tasks.render().task_texts(), vec!["C", "D", "E"]);
    assert_eq!(tasks.completed(), ["B", "A"]);

    assert!(tasks.complete_task(5).is_err());
    assert_eq!(tasks.pending().len(), 3);

    assert_eq!(toasts.toasts().len(), 2);
    toasts.advance(first.remove_at_ms);
    assert_eq!(toasts.toasts().len(), 1);
    assert_eq!(toasts.toasts()[0].text, "A");
    toasts.advance(3_100);
    assert!(toasts.is_empty());

    let rows = tasks.render().rows;
    assert!(matches!(rows[0], TaskRow::Task { slot: 0, .. }));
    assert_eq!(tasks.window_start(), 0);
}

#[test]
fn explicit_choice_outlives_a_reload() {
    let mut themes = ThemeController::new(MemoryStore::new(), DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(themes.initialize(Some(true)), Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);

    let store = themes.store().clone();
    assert_eq!(store.get(DEFAULT_THEME_STORAGE_KEY).as_deref(), Some("light"));

    let mut reloaded = ThemeController::new(store, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(reloaded.initialize(Some(true)), Theme::Light);
    assert_eq!(reloaded.system_changed(true), None);
    assert_eq!(reloaded.icon().name, "sun");
}
