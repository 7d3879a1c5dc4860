//! Benchmarks for the alert layout pass and a full present/dismiss cycle.
//!
//! Run with: cargo bench -p modalert-widgets --bench layout_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use modalert_core::{Rect, Size};
use modalert_widgets::alert::{AlertElements, AlertMetrics, AlertStyle, LayoutInput, compute};
use modalert_widgets::{AlertConfig, AlertView, HostView};
use std::hint::black_box;
use web_time::{Duration, Instant};

const MESSAGE: &str = "We could not reach the server. Check your connection and try again; \
    any changes you made while offline are kept and will sync automatically.";

fn bench_compute(c: &mut Criterion) {
    let metrics = AlertMetrics::default();
    let style = AlertStyle::default();
    let mut group = c.benchmark_group("alert_layout");
    for repeat in [1usize, 4, 32] {
        let message = vec![MESSAGE; repeat].join("\n");
        let input = LayoutInput {
            metrics: &metrics,
            style: &style,
            viewport: Rect::new(0.0, 0.0, 375.0, 667.0),
            elements: AlertElements::ICON
                | AlertElements::MESSAGE
                | AlertElements::TIMER
                | AlertElements::DISMISS_BUTTON
                | AlertElements::CANCEL_BUTTON,
            title: "Connection lost",
            message: Some(message.as_str()),
            timer: Some("10"),
            min_line_height: None,
        };
        group.bench_with_input(BenchmarkId::new("compute", repeat), &input, |b, input| {
            b.iter(|| black_box(compute(input)))
        });
    }
    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    c.bench_function("alert_lifecycle/show_render_close", |b| {
        b.iter(|| {
            let mut host = HostView::new(Size::new(375.0, 667.0));
            let t0 = Instant::now();
            let responder = AlertView::new().show(
                &mut host,
                AlertConfig::new("Saved").message(MESSAGE).countdown(3),
                t0,
            );
            host.tick(t0 + Duration::from_millis(300));
            black_box(host.render());
            responder.close();
            black_box(host.tick(t0 + Duration::from_secs(1)))
        })
    });
}

criterion_group!(benches, bench_compute, bench_lifecycle);
criterion_main!(benches);
