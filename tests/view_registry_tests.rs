use std::sync::mpsc;
use std::sync::{Arc, Mutex, OnceLock, Weak};
use std::thread;
use std::time::Duration;

use archarts::api::{
    ChartConfig, ChartHost, ChartKind, ChartViewRegistry, PointConfig, SeriesConfig, ViewHandle,
    map_chart,
};
use archarts::error::ChartError;
use archarts::render::{ChartRenderer, NullRenderer};

fn config(y: f64) -> ChartConfig {
    ChartConfig::new(vec![SeriesConfig::new(vec![PointConfig::new(0.0, y)])])
}

#[test]
fn lookup_after_remove_observes_absence() {
    let registry = ChartViewRegistry::new();
    let handle = registry.insert(String::from("chart"));
    assert!(registry.contains(handle));
    assert_eq!(registry.len(), 1);

    assert_eq!(registry.remove(handle), Some(String::from("chart")));
    assert!(!registry.contains(handle));
    assert_eq!(registry.remove(handle), None);
    assert_eq!(registry.with_instance(handle, Clone::clone), None);
    assert!(registry.is_empty());
}

#[test]
fn stale_handle_never_reaches_slot_reuser() {
    let registry = ChartViewRegistry::new();
    let stale = registry.insert(1_u32);
    registry.remove(stale);
    let fresh = registry.insert(2_u32);

    assert_eq!(registry.with_instance_mut(stale, |value| *value += 10), None);
    assert_eq!(registry.with_instance(fresh, |value| *value), Some(2));
    assert_eq!(registry.remove(stale), None);
    assert!(registry.contains(fresh));
}

#[test]
fn unknown_raw_handle_is_rejected() {
    let registry: ChartViewRegistry<u8> = ChartViewRegistry::new();
    assert!(!registry.contains(ViewHandle::from_raw(0)));
    assert!(!registry.contains(ViewHandle::from_raw(u64::MAX)));
}

#[test]
fn concurrent_create_and_dispose_do_not_interfere() {
    let registry = Arc::new(ChartViewRegistry::new());
    let workers: Vec<_> = (0..8_u32)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut kept = Vec::new();
                for step in 0..200_u32 {
                    let handle = registry.insert((worker, step));
                    if step % 2 == 0 {
                        assert_eq!(registry.remove(handle), Some((worker, step)));
                        assert!(!registry.contains(handle));
                    } else {
                        kept.push((handle, step));
                    }
                }
                for (handle, step) in kept {
                    assert_eq!(registry.with_instance(handle, |value| *value), Some((worker, step)));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker thread");
    }
    assert_eq!(registry.len(), 8 * 100);
}

#[test]
fn host_create_update_dispose_flow() {
    let host = ChartHost::new();
    let handle = host
        .create(ChartKind::Line, config(1.0), NullRenderer::default())
        .expect("create");
    assert_eq!(host.len(), 1);

    assert!(host.update(handle, config(2.0)).expect("update"));
    let description = host.description(handle).expect("live chart");
    assert_eq!(description.data_sets[0].entries[0].y, 2.0);
    assert_eq!(host.with_renderer(handle, |renderer| renderer.apply_count), Some(2));

    assert!(host.dispose(handle));
    assert!(!host.dispose(handle));
    assert!(!host.update(handle, config(3.0)).expect("stale update"));
    assert!(host.is_empty());
}

#[test]
fn updating_with_same_config_is_idempotent() {
    let host = ChartHost::new();
    let handle = host
        .create(ChartKind::Bar, config(1.0), NullRenderer::default())
        .expect("create");

    host.update(handle, config(5.0)).expect("first update");
    let first = host.description(handle).expect("description");
    host.update(handle, config(5.0)).expect("second update");
    let second = host.description(handle).expect("description");

    assert_eq!(first, second);
    assert_eq!(first, map_chart(ChartKind::Bar, &config(5.0)));
}

#[test]
fn update_replaces_config_wholesale() {
    let host = ChartHost::new();
    let handle = host
        .create_from_json(
            ChartKind::Line,
            r#"{"legend": {"position": "bottom"}, "series": []}"#,
            NullRenderer::default(),
        )
        .expect("create");
    assert!(host.description(handle).expect("live").legend.is_some());

    assert!(host.update_from_json(handle, r#"{"series": []}"#).expect("update"));
    assert_eq!(host.description(handle).expect("live").legend, None);
}

#[test]
fn host_routes_marker_taps_to_the_right_chart() {
    let host = ChartHost::new();
    let plain = host
        .create(ChartKind::Line, config(1.0), NullRenderer::default())
        .expect("create");
    let marked = host
        .create_from_json(
            ChartKind::Line,
            r#"{"series": [{"label": "Load", "points": [{"x": 0, "y": 4.5}]}], "marker": {"enabled": true}}"#,
            NullRenderer::default(),
        )
        .expect("create");

    assert_eq!(host.marker_for(plain, 0.0), None);
    assert_eq!(
        host.marker_for(marked, 0.0).map(|content| content.to_plain_text()),
        Some("0.0\n\u{25CF} Load: 4.5".to_owned())
    );
}

#[derive(Debug, Default)]
struct RejectingRenderer {
    reject: bool,
}

impl ChartRenderer for RejectingRenderer {
    fn apply(&mut self, _description: &archarts::ChartDescription) -> archarts::ChartResult<()> {
        if self.reject {
            return Err(ChartError::Renderer("widget detached".to_owned()));
        }
        self.reject = true;
        Ok(())
    }
}

#[test]
fn renderer_failure_keeps_previous_state() {
    let host = ChartHost::new();
    let rejected = host.create(
        ChartKind::Line,
        config(1.0),
        RejectingRenderer { reject: true },
    );
    assert!(matches!(rejected, Err(ChartError::Renderer(_))));
    assert!(host.is_empty());

    let handle = host
        .create(ChartKind::Line, config(1.0), RejectingRenderer::default())
        .expect("create");
    assert!(matches!(
        host.update(handle, config(9.0)),
        Err(ChartError::Renderer(_))
    ));
    let description = host.description(handle).expect("still live");
    assert_eq!(description.data_sets[0].entries[0].y, 1.0);
}

/// Adapter that asks the host about its own chart while applying.
struct ReentrantRenderer {
    link: Arc<OnceLock<(Weak<ChartHost<ReentrantRenderer>>, ViewHandle)>>,
    seen_entries: Arc<Mutex<Vec<Option<usize>>>>,
}

impl ChartRenderer for ReentrantRenderer {
    fn apply(&mut self, _description: &archarts::ChartDescription) -> archarts::ChartResult<()> {
        let Some((host, handle)) = self.link.get() else {
            return Ok(());
        };
        let Some(host) = host.upgrade() else {
            return Ok(());
        };
        let entries = host.description(*handle).map(|live| live.entry_count());
        let _ = host.marker_for(*handle, 0.0);
        self.seen_entries
            .lock()
            .expect("seen entries lock")
            .push(entries);
        Ok(())
    }
}

#[test]
fn renderer_may_call_back_into_the_host_during_update() {
    let link = Arc::new(OnceLock::new());
    let seen_entries = Arc::new(Mutex::new(Vec::new()));
    let host = Arc::new(ChartHost::new());
    let handle = host
        .create(
            ChartKind::Line,
            config(1.0),
            ReentrantRenderer {
                link: Arc::clone(&link),
                seen_entries: Arc::clone(&seen_entries),
            },
        )
        .expect("create");
    assert!(link.set((Arc::downgrade(&host), handle)).is_ok());

    let (sender, receiver) = mpsc::channel();
    let worker_host = Arc::clone(&host);
    thread::spawn(move || {
        let updated = worker_host.update(handle, ChartConfig::default());
        let _ = sender.send(matches!(updated, Ok(true)));
    });

    let updated = receiver
        .recv_timeout(Duration::from_secs(5))
        .expect("update returns while the renderer re-enters the host");
    assert!(updated);
    assert_eq!(
        *seen_entries.lock().expect("seen entries lock"),
        vec![Some(1)]
    );
    assert_eq!(host.description(handle).map(|live| live.entry_count()), Some(0));
}

#[test]
fn invalid_json_is_rejected_at_the_boundary() {
    let host: ChartHost<NullRenderer> = ChartHost::new();
    let result = host.create_from_json(ChartKind::Bar, "[1, 2]", NullRenderer::default());
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
    assert!(host.is_empty());
}

#[test]
fn platform_version_names_the_os() {
    let host: ChartHost<NullRenderer> = ChartHost::new();
    assert!(host.platform_version().starts_with(std::env::consts::OS));
}
