//! End-to-end board lifecycle through the library API: mutate, persist,
//! reload, back up, and rebuild on a second store.

use pinboard::io::persist::{load_board, load_settings, save_board, save_settings};
use pinboard::io::store::MemStore;
use pinboard::model::settings::Settings;
use pinboard::ops::board_ops::{self, Direction};
use pinboard::ops::snapshot::{self, ImportMode};
use pretty_assertions::assert_eq;

#[test]
fn lifecycle_survives_reload_and_backup() {
    let mut store = MemStore::new();

    // First run: starter board, then some real use
    let mut board = load_board(&store, 1_000);
    let starter_count = board.tasks.len();
    let groceries = board_ops::add_task(&mut board, "Buy groceries", Some("#C1E1C1"), 2_000)
        .expect("non-blank text adds a task");
    let laundry = board_ops::add_task(&mut board, "Do laundry", Some("#BDE0FE"), 3_000)
        .expect("non-blank text adds a task");

    assert!(board_ops::edit_text(&mut board, groceries, "Buy groceries and eggs"));
    board_ops::move_task(&mut board, laundry, Direction::Top).unwrap();
    assert!(board_ops::complete_task(&mut board, groceries, 4_000));

    let mut settings = load_settings(&store);
    settings.title = "Chores".into();
    settings.sound_enabled = false;
    save_board(&mut store, &board);
    save_settings(&mut store, &settings);

    // Reload: everything comes back, including the undo slot
    let mut reloaded = load_board(&store, 9_000);
    assert_eq!(reloaded.tasks, board.tasks);
    assert_eq!(reloaded.tasks[0].text, "Do laundry");
    assert_eq!(reloaded.last_completed, Some(groceries));
    assert_eq!(load_settings(&store).title, "Chores");

    // Undo still works after the reload
    assert_eq!(board_ops::undo_last(&mut reloaded), Some(groceries));
    assert!(!reloaded.find(groceries).unwrap().is_completed);
    save_board(&mut store, &reloaded);

    // Back up and rebuild on a second store
    let snap = snapshot::export_snapshot(&reloaded, &settings, 10_000);
    let text = serde_json::to_string(&snap).unwrap();

    let mut other_store = MemStore::new();
    let mut other_board = load_board(&other_store, 11_000);
    let mut other_settings = Settings::default();
    let parsed = snapshot::parse_snapshot(&text).unwrap();
    let report =
        snapshot::apply_snapshot(&mut other_board, &mut other_settings, parsed, ImportMode::Overwrite);

    assert_eq!(report.added, starter_count + 2);
    assert_eq!(other_board.tasks, reloaded.tasks);
    assert_eq!(other_settings.title, "Chores");
    assert!(!other_settings.sound_enabled);

    save_board(&mut other_store, &other_board);
    assert_eq!(load_board(&other_store, 12_000).tasks, reloaded.tasks);
}
