use proptest::prelude::*;
use rodcut_dp::batching::{optimize_printing, PrintJob, PrinterConstraints};

fn job() -> impl Strategy<Value = PrintJob> {
    (0u32..1000, 1.0f64..200.0, 1i64..4, 1u64..300)
        .prop_map(|(id, volume, priority, time)| PrintJob::new(format!("J{id}"), volume, priority, time))
}

#[test]
fn schedule_from_json_jobs() {
    let raw = r#"[
        {"id": "M1", "volume": 100, "priority": 2, "print_time": 120},
        {"id": "M2", "volume": 150, "priority": 1, "print_time": 90},
        {"id": "M3", "volume": 120, "priority": 3, "print_time": 150}
    ]"#;
    let jobs: Vec<PrintJob> = serde_json::from_str(raw).unwrap();
    let schedule = optimize_printing(
        &jobs,
        &PrinterConstraints {
            max_volume: 300.0,
            max_items: 2,
        },
    );
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"print_order": ["M2", "M1", "M3"], "total_time": 270})
    );
}

proptest! {
    #[test]
    fn every_job_is_printed_once_in_priority_order(
        jobs in proptest::collection::vec(job(), 0..20),
        max_items in 1usize..4,
    ) {
        let constraints = PrinterConstraints { max_volume: 250.0, max_items };
        let schedule = optimize_printing(&jobs, &constraints);
        prop_assert_eq!(schedule.print_order.len(), jobs.len());

        let mut expected = jobs.clone();
        expected.sort_by_key(|j| j.priority);
        let ids: Vec<_> = expected.iter().map(|j| j.id.clone()).collect();
        prop_assert_eq!(&schedule.print_order, &ids);
    }

    #[test]
    fn total_time_is_bounded_by_serial_and_slowest(jobs in proptest::collection::vec(job(), 1..20)) {
        let constraints = PrinterConstraints { max_volume: 250.0, max_items: 3 };
        let schedule = optimize_printing(&jobs, &constraints);
        let serial: u64 = jobs.iter().map(|j| j.print_time).sum();
        let slowest = jobs.iter().map(|j| j.print_time).max().unwrap();
        prop_assert!(schedule.total_time <= serial);
        prop_assert!(schedule.total_time >= slowest);
    }

    #[test]
    fn single_item_batches_run_serially(jobs in proptest::collection::vec(job(), 0..20)) {
        let constraints = PrinterConstraints { max_volume: 1e9, max_items: 1 };
        let schedule = optimize_printing(&jobs, &constraints);
        let serial: u64 = jobs.iter().map(|j| j.print_time).sum();
        prop_assert_eq!(schedule.total_time, serial);
    }
}
