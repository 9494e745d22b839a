use std::sync::Arc;

use profilecard_runtime::{
    Command, FetchError, OverlapPolicy, Phase, ProfileController, ProfileState, Settlement,
    ThemeMode,
};
use profilecard_testing::fixtures::{ada_lovelace, profile};
use profilecard_testing::{RecordingSink, ScriptedSource};
use tokio::sync::mpsc;

fn controller(
    source: ScriptedSource,
    policy: OverlapPolicy,
) -> (ProfileController, Arc<ScriptedSource>, Arc<RecordingSink>) {
    let source = Arc::new(source);
    let sink = Arc::new(RecordingSink::new());
    let controller = ProfileController::new(
        source.clone(),
        sink.clone(),
        ProfileState::new(ThemeMode::Light, policy),
    );
    (controller, source, sink)
}

#[tokio::test]
async fn scenario_a_mount_shows_profile() {
    let (mut controller, _, sink) = controller(
        ScriptedSource::new().then_ok(ada_lovelace()),
        OverlapPolicy::LatestWins,
    );

    controller.request_profile();
    assert!(controller.state().is_loading());

    let settlement = controller.settle_next().await;
    assert_eq!(settlement, Some(Settlement::Applied));
    assert!(!controller.state().is_loading());
    assert_eq!(
        controller.state().profile().unwrap().full_name(),
        "Ada Lovelace"
    );
    assert!(sink.is_empty());
}

#[tokio::test]
async fn scenario_b_network_error_leaves_blank_and_reports_once() {
    let (mut controller, _, sink) = controller(
        ScriptedSource::new().then_err(FetchError::Network("connection refused".into())),
        OverlapPolicy::LatestWins,
    );

    let settlement = controller.load_once().await;

    assert!(matches!(settlement, Settlement::Failed(FetchError::Network(_))));
    assert_eq!(controller.state().phase(), Phase::FailedIdle);
    assert!(controller.state().profile().is_none());
    assert!(!controller.state().is_loading());
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn scenario_c_failed_refresh_keeps_profile() {
    let (mut controller, _, sink) = controller(
        ScriptedSource::new()
            .then_ok(ada_lovelace())
            .then_err(FetchError::Status { status: 500 }),
        OverlapPolicy::LatestWins,
    );

    controller.load_once().await;
    let refresh = controller.load_once().await;

    assert_eq!(refresh, Settlement::Failed(FetchError::Status { status: 500 }));
    assert_eq!(
        controller.state().profile().unwrap().full_name(),
        "Ada Lovelace"
    );
    assert_eq!(sink.records().len(), 1);
    assert_eq!(sink.records()[0].1, FetchError::Status { status: 500 });
}

#[tokio::test]
async fn settle_next_without_fetch_returns_none() {
    let (mut controller, source, _) = controller(ScriptedSource::new(), OverlapPolicy::LatestWins);
    assert_eq!(controller.settle_next().await, None);
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn latest_wins_ignores_slow_stale_response() {
    let source = ScriptedSource::new();
    let slow = source.gated(Ok(profile("Ada", "Lovelace")));
    let fast = source.gated(Ok(profile("Grace", "Hopper")));
    let (mut controller, _, sink) = controller(source, OverlapPolicy::LatestWins);

    controller.request_profile();
    controller.request_profile();

    fast.open();
    assert_eq!(controller.settle_next().await, Some(Settlement::Applied));
    assert!(!controller.state().is_loading());

    slow.open();
    assert_eq!(
        controller.settle_next().await,
        Some(Settlement::Superseded(None))
    );
    assert_eq!(
        controller.state().profile().unwrap().full_name(),
        "Grace Hopper"
    );
    assert!(sink.is_empty());
}

#[tokio::test]
async fn last_settled_wins_lets_stale_response_through() {
    let source = ScriptedSource::new();
    let slow = source.gated(Ok(profile("Ada", "Lovelace")));
    let fast = source.gated(Ok(profile("Grace", "Hopper")));
    let (mut controller, _, _) = controller(source, OverlapPolicy::LastSettledWins);

    controller.request_profile();
    controller.request_profile();

    fast.open();
    controller.settle_next().await;
    slow.open();
    controller.settle_next().await;

    assert_eq!(
        controller.state().profile().unwrap().full_name(),
        "Ada Lovelace"
    );
}

#[tokio::test]
async fn stale_failure_is_still_reported() {
    let source = ScriptedSource::new();
    let slow = source.gated(Err(FetchError::Network("reset".into())));
    let fast = source.gated(Ok(ada_lovelace()));
    let (mut controller, _, sink) = controller(source, OverlapPolicy::LatestWins);

    controller.request_profile();
    controller.request_profile();
    slow.open();
    controller.settle_next().await;

    assert!(controller.state().is_loading());
    assert_eq!(sink.len(), 1);

    fast.open();
    controller.settle_next().await;
    assert!(!controller.state().is_loading());
}

// Paused clock: each sleep completes only once every other task is idle, so
// the driver always observes a fully settled state before its next step.
#[tokio::test(start_paused = true)]
async fn run_mounts_serves_commands_and_quits() {
    let source = ScriptedSource::new();
    let mount = source.gated(Ok(ada_lovelace()));
    let refresh = source.gated(Err(FetchError::EmptyResults));
    let (controller, source, sink) = controller(source, OverlapPolicy::LatestWins);

    let (tx, rx) = mpsc::unbounded_channel();
    let mut snapshots: Vec<(bool, Option<String>, ThemeMode)> = Vec::new();

    let driver = async {
        // Let the controller mount before scripting the session.
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        mount.open();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        tx.send(Command::ToggleTheme).unwrap();
        tx.send(Command::Refresh).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        refresh.open();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        tx.send(Command::Quit).unwrap();
    };

    let run = controller.run(rx, |state| {
        snapshots.push((
            state.is_loading(),
            state.profile().map(|p| p.full_name()),
            state.theme(),
        ));
    });

    let (final_state, ()) = tokio::join!(run, driver);

    assert_eq!(source.calls(), 2);
    assert_eq!(sink.len(), 1);
    assert_eq!(final_state.theme(), ThemeMode::Dark);
    assert_eq!(
        final_state.profile().map(|p| p.full_name()),
        Some("Ada Lovelace".to_string())
    );
    assert!(!final_state.is_loading());

    let ada = Some("Ada Lovelace".to_string());
    assert_eq!(
        snapshots,
        vec![
            (true, None, ThemeMode::Light),
            (false, ada.clone(), ThemeMode::Light),
            (false, ada.clone(), ThemeMode::Dark),
            (true, ada.clone(), ThemeMode::Dark),
            (false, ada, ThemeMode::Dark),
        ]
    );
}

#[tokio::test]
async fn run_stops_when_commands_close() {
    let (controller, _, _) = controller(
        ScriptedSource::new().then_ok(ada_lovelace()),
        OverlapPolicy::LatestWins,
    );
    let (tx, rx) = mpsc::unbounded_channel::<Command>();
    drop(tx);

    let state = controller.run(rx, |_| {}).await;
    assert_eq!(state.in_flight(), 1);
}
