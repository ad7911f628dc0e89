// File: crates/chart-core/tests/session.rs
// Purpose: Overlapping runs: only the most recently started run is displayed.

use std::sync::{mpsc, Arc};
use std::thread;

use fitchart_core::{default_metrics, render_activity, ChartFrame, ChartSession, Field, Record};

fn charts_with(n: usize) -> fitchart_core::ActivityCharts {
    let records: Vec<Record> = (0..n).map(|i| Record::new().with(Field::Speed, i as f64)).collect();
    render_activity(&records, &default_metrics(), &ChartFrame::default())
}

#[test]
fn stale_result_is_discarded() {
    let session = ChartSession::new();
    let first = session.begin();
    let second = session.begin();

    assert!(session.publish(second, charts_with(3)));
    assert!(!session.publish(first, charts_with(7)));

    let shown = session.current().unwrap();
    assert_eq!(shown.record_count, 3);
    assert_eq!(session.current_ticket(), Some(second));
}

#[test]
fn clear_invalidates_in_flight_runs() {
    let session = ChartSession::new();
    let t = session.begin();
    assert!(session.publish(t, charts_with(2)));
    let late = session.begin();
    session.clear();
    assert!(session.current().is_none());
    assert!(!session.is_current(late));
    assert!(!session.publish(late, charts_with(4)));
    assert!(session.current().is_none());
}

#[test]
fn slow_earlier_run_cannot_overwrite_newer_one() {
    let session = Arc::new(ChartSession::new());
    let (go_tx, go_rx) = mpsc::channel::<()>();

    let slow_ticket = session.begin();
    let slow = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            go_rx.recv().unwrap();
            session.publish(slow_ticket, charts_with(100))
        })
    };

    let fast_ticket = session.begin();
    assert!(session.publish(fast_ticket, charts_with(10)));
    go_tx.send(()).unwrap();

    assert!(!slow.join().unwrap());
    assert_eq!(session.current().unwrap().record_count, 10);
}
