// Integration test for the timing session to persisted history workflow

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use paceline::{Clock, JsonFileHistory, RaceStore, Stopwatch};
use tempfile::TempDir;

#[derive(Clone)]
struct ManualClock(Rc<Cell<u64>>);

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.0.get())
    }
}

#[test]
fn test_session_commit_persist_reload() {
    let temp_dir = TempDir::new().unwrap();

    // Run a session: two laps, stop at five seconds.
    let clock = ManualClock(Rc::new(Cell::new(0)));
    let mut stopwatch = Stopwatch::new(clock.clone());
    stopwatch.set_rider_name("Kirsten Wild");
    stopwatch.start();

    clock.0.set(1_500);
    stopwatch.tick();
    stopwatch.record_lap();

    clock.0.set(4_200);
    stopwatch.tick();
    stopwatch.record_lap();

    clock.0.set(5_000);
    let race = stopwatch.stop().expect("session should commit a race");
    assert_eq!(race.lap_times_ms, vec![1_500, 4_200, 5_000]);
    assert_eq!(race.total_time_ms, 5_000);

    // Hand the committed race to the store.
    let race_id = race.id.clone();
    {
        let persistence = JsonFileHistory::new(temp_dir.path().to_path_buf()).unwrap();
        let mut store = RaceStore::open(persistence).unwrap();
        store.add_race(race).unwrap();
        assert_eq!(store.races().len(), 1);
    }

    // A fresh process sees the identical collection.
    let persistence = JsonFileHistory::new(temp_dir.path().to_path_buf()).unwrap();
    let mut store = RaceStore::open(persistence).unwrap();
    assert_eq!(store.races().len(), 1);

    let reloaded = &store.races()[0];
    assert_eq!(reloaded.id, race_id);
    assert_eq!(reloaded.rider_name, "Kirsten Wild");
    assert_eq!(reloaded.total_time_ms, 5_000);
    assert_eq!(reloaded.lap_times_ms, vec![1_500, 4_200, 5_000]);
    assert_eq!(
        reloaded
            .end_time
            .duration_since(reloaded.start_time)
            .unwrap()
            .as_millis(),
        5_000
    );

    // Deleting the only race leaves a persisted empty history.
    assert!(store.delete_race(&race_id));
    drop(store);

    let persistence = JsonFileHistory::new(temp_dir.path().to_path_buf()).unwrap();
    let store = RaceStore::open(persistence).unwrap();
    assert!(store.races().is_empty());
}

#[test]
fn test_zero_elapsed_session_leaves_store_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let persistence = JsonFileHistory::new(temp_dir.path().to_path_buf()).unwrap();
    let mut store = RaceStore::open(persistence).unwrap();

    let clock = ManualClock(Rc::new(Cell::new(100)));
    let mut stopwatch = Stopwatch::new(clock);
    stopwatch.start();

    // Stop immediately: nothing to commit, store stays empty.
    assert!(stopwatch.stop().is_none());
    assert!(store.races().is_empty());

    store.clear_history();
    assert!(store.races().is_empty());
}
