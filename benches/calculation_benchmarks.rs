//! Performance benchmarks for the work-schedule engine.
//!
//! Verifies the calculation path stays well inside interactive latency:
//! a single slot validation is a handful of decimal operations and a full
//! month of edits should stay far under a millisecond.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveTime;
use schedule_engine::calculation::compute_shift_hours;
use schedule_engine::config::{EngineConfig, ShiftLimits};
use schedule_engine::editor::ScheduleEditor;
use schedule_engine::models::{SLOT_COUNT, ShiftSlot};
use schedule_engine::storage::MemoryStore;

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn bench_single_slot(c: &mut Criterion) {
    let shifts = vec![ShiftSlot::default(); SLOT_COUNT];
    let limits = ShiftLimits::default();

    c.bench_function("compute_shift_hours/single_slot", |b| {
        b.iter(|| {
            compute_shift_hours(
                black_box(0),
                black_box(time(9, 0)),
                black_box(time(13, 0)),
                black_box(&shifts),
                &limits,
            )
            .unwrap()
        })
    });
}

fn bench_month_of_edits(c: &mut Criterion) {
    c.bench_function("editor/fill_month", |b| {
        b.iter(|| {
            let mut editor = ScheduleEditor::new(MemoryStore::new(), EngineConfig::default());
            // One 3-hour day per window slot keeps every cap satisfied.
            for week in 0..4 {
                for offset in 0..5 {
                    let day = week * 7 + offset;
                    editor
                        .set_shift_times(day, Some("09:00"), Some("12:00"))
                        .unwrap();
                    editor.calculate_day(day).unwrap();
                }
            }
            black_box(editor.state().total_hours)
        })
    });
}

criterion_group!(benches, bench_single_slot, bench_month_of_edits);
criterion_main!(benches);
