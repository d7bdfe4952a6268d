//! The ward's four record types driven through their containers.
//!
//! Validation lives with the caller, so these tests do it too: a case with
//! a priority outside 1..=5 never reaches the heap.

use ward_collections::{
    BinaryMaxHeap, Compare, DefaultRingBuffer, LinkedQueue, LinkedStack, Overflow, RingBuffer,
    Underflow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Patient {
    id: String,
    name: String,
    condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Supply {
    kind: String,
    quantity: u32,
    batch: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EmergencyCase {
    name: String,
    kind: String,
    priority: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ambulance {
    code: String,
    driver: String,
}

fn patient(id: &str, name: &str, condition: &str) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        condition: condition.into(),
    }
}

fn supply(kind: &str, quantity: u32, batch: &str) -> Supply {
    Supply {
        kind: kind.into(),
        quantity,
        batch: batch.into(),
    }
}

fn emergency(name: &str, kind: &str, priority: u8) -> EmergencyCase {
    EmergencyCase {
        name: name.into(),
        kind: kind.into(),
        priority,
    }
}

fn ambulance(code: &str, driver: &str) -> Ambulance {
    Ambulance {
        code: code.into(),
        driver: driver.into(),
    }
}

/// Higher priority first, ties by ascending name.
#[derive(Debug, Default, Clone, Copy)]
struct EmergencyHigher;

impl Compare<EmergencyCase> for EmergencyHigher {
    fn outranks(&self, a: &EmergencyCase, b: &EmergencyCase) -> bool {
        if a.priority != b.priority {
            return a.priority > b.priority;
        }
        a.name < b.name
    }
}

/// Caller-side check; the heap itself never validates.
fn log_case(
    heap: &mut BinaryMaxHeap<EmergencyCase, EmergencyHigher>,
    case: EmergencyCase,
) -> bool {
    if !(1..=5).contains(&case.priority) {
        return false;
    }
    heap.push(case);
    true
}

#[test]
fn patients_discharged_in_admission_order() {
    let mut patients = LinkedQueue::new();
    patients.enqueue(patient("P001", "Ana", "Fracture"));
    patients.enqueue(patient("P002", "Ben", "Fever"));
    patients.enqueue(patient("P003", "Cho", "Burn"));

    let listed: Vec<_> = patients.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(listed, ["P001", "P002", "P003"]);
    assert_eq!(patients.len(), 3);

    let discharged = patients.dequeue().unwrap();
    assert_eq!(discharged.name, "Ana");
    assert_eq!(discharged.condition, "Fracture");
    assert_eq!(patients.peek_front().map(|p| p.id.as_str()), Some("P002"));

    patients.dequeue();
    patients.dequeue();
    assert_eq!(patients.dequeue(), None);
}

#[test]
fn latest_supply_batch_used_first() {
    let mut supplies = LinkedStack::new();
    supplies.push(supply("Gauze", 50, "B-100"));
    supplies.push(supply("Saline", 20, "B-101"));
    supplies.push(supply("Splint", 5, "B-102"));

    let mut total = 0;
    supplies.for_each(|s| total += s.quantity);
    assert_eq!(total, 75);

    let used = supplies.pop().unwrap();
    assert_eq!(used.batch, "B-102");
    assert_eq!(supplies.peek().map(|s| s.kind.as_str()), Some("Saline"));
}

#[test]
fn supply_snapshot_survives_usage() {
    let mut supplies = LinkedStack::new();
    supplies.push(supply("Gauze", 50, "B-100"));
    supplies.push(supply("Saline", 20, "B-101"));

    let snapshot = supplies.clone();
    supplies.pop();
    supplies.pop();
    assert!(supplies.is_empty());

    let batches: Vec<_> = snapshot.iter().map(|s| s.batch.as_str()).collect();
    assert_eq!(batches, ["B-101", "B-100"]);

    // Hand the whole store over to another ward
    let mut ward = snapshot;
    let handed_over = ward.take();
    assert!(ward.is_empty());
    assert_eq!(handed_over.len(), 2);
}

#[test]
fn triage_orders_by_priority_then_name() {
    let mut cases: BinaryMaxHeap<EmergencyCase, EmergencyHigher> = BinaryMaxHeap::new();
    assert!(log_case(&mut cases, emergency("Bob", "Trauma", 3)));
    assert!(log_case(&mut cases, emergency("Ann", "Cardiac", 3)));
    assert!(log_case(&mut cases, emergency("Cid", "Stroke", 5)));
    assert!(log_case(&mut cases, emergency("Dan", "Sprain", 1)));

    assert_eq!(cases.peek_max().map(|c| c.name.as_str()), Some("Cid"));
    assert_eq!(cases.peek_max().map(|c| c.kind.as_str()), Some("Stroke"));

    let processed: Vec<_> = std::iter::from_fn(|| cases.pop_max())
        .map(|c| (c.name, c.priority))
        .collect();
    assert_eq!(
        processed,
        vec![
            ("Cid".to_string(), 5),
            ("Ann".to_string(), 3),
            ("Bob".to_string(), 3),
            ("Dan".to_string(), 1),
        ]
    );
}

#[test]
fn invalid_priority_rejected_before_heap() {
    let mut cases: BinaryMaxHeap<EmergencyCase, EmergencyHigher> = BinaryMaxHeap::new();
    assert!(!log_case(&mut cases, emergency("Eve", "Unknown", 0)));
    assert!(!log_case(&mut cases, emergency("Fay", "Unknown", 6)));
    assert!(cases.is_empty());
}

#[test]
fn triage_statistics_leave_cases_pending() {
    let mut cases: BinaryMaxHeap<EmergencyCase, EmergencyHigher> = BinaryMaxHeap::new();
    for (name, priority) in [("Ann", 2), ("Bob", 5), ("Cid", 2), ("Dee", 4), ("Eli", 2)] {
        assert!(log_case(&mut cases, emergency(name, "General", priority)));
    }
    let before = cases.as_slice().to_vec();

    let mut per_priority = [0usize; 6];
    cases.for_each_by_priority(|c| per_priority[usize::from(c.priority)] += 1);

    assert_eq!(per_priority, [0, 0, 3, 0, 1, 1]);
    assert_eq!(cases.peek_max().map(|c| c.priority), Some(5));
    assert_eq!(cases.as_slice(), before.as_slice());

    let listed: Vec<_> = cases.iter_by_priority().map(|c| c.name.as_str()).collect();
    assert_eq!(listed, ["Bob", "Dee", "Ann", "Cid", "Eli"]);
}

#[test]
fn ambulance_fleet_rotation() {
    let mut fleet: RingBuffer<Ambulance, 3> = RingBuffer::new();
    fleet.enqueue(ambulance("AMB-1", "Ravi")).unwrap();
    fleet.enqueue(ambulance("AMB-2", "Mina")).unwrap();
    fleet.enqueue(ambulance("AMB-3", "Joao")).unwrap();

    let rejected = fleet.enqueue(ambulance("AMB-4", "Lee")).unwrap_err();
    assert_eq!(rejected.into_inner().code, "AMB-4");

    fleet.rotate_once();
    let rotation: Vec<_> = fleet.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(rotation, ["AMB-2", "AMB-3", "AMB-1"]);

    let on_duty = fleet.dequeue().unwrap();
    assert_eq!(on_duty.driver, "Mina");
    assert!(fleet.enqueue(ambulance("AMB-4", "Lee")).is_ok());
    assert!(fleet.is_full());
}

#[test]
fn empty_fleet_reports_underflow() {
    let mut fleet: DefaultRingBuffer<Ambulance> = DefaultRingBuffer::new();
    assert_eq!(fleet.capacity(), 10);
    assert_eq!(fleet.dequeue(), Err(Underflow));
    assert_eq!(fleet.peek_front(), Err(Underflow));

    // Rotating an empty fleet is allowed and does nothing
    fleet.rotate_once();
    assert!(fleet.is_empty());
}

#[test]
fn full_fleet_keeps_registration_order() {
    let mut fleet: DefaultRingBuffer<Ambulance> = DefaultRingBuffer::new();
    for i in 0..10 {
        fleet.enqueue(ambulance(&format!("AMB-{i}"), "Crew")).unwrap();
    }

    let extra = ambulance("AMB-X", "Crew");
    assert_eq!(fleet.enqueue(extra.clone()), Err(Overflow(extra)));
    assert_eq!(fleet.len(), 10);
    assert_eq!(fleet.peek_front().map(|a| a.code.as_str()), Ok("AMB-0"));
    assert_eq!(fleet.peek_back().map(|a| a.code.as_str()), Ok("AMB-9"));
}
