use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable slot owned by exactly one company.
///
/// `time` is the `HH:MM` start time produced at company creation.
/// `student` stays unset until a reservation claims the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub company_id: Uuid,
    pub time: String,
    pub student: Option<Uuid>,
}

impl Slot {
    /// Claims the slot for a student.
    ///
    /// A slot that already has a student is left untouched and the attempt
    /// reports [`ReservationOutcome::AlreadyReserved`]; reservation is an
    /// outcome, not an error. This is the in-memory form of the rule; the
    /// persistence layer enforces the same rule with a compare-and-set so
    /// concurrent attempts cannot both win.
    pub fn reserve(&mut self, student: Uuid) -> ReservationOutcome {
        if self.student.is_some() {
            return ReservationOutcome::AlreadyReserved;
        }
        self.student = Some(student);
        ReservationOutcome::Reserved
    }
}

/// Result of a reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationOutcome {
    Reserved,
    AlreadyReserved,
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveSlotRequest {
    pub student_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveSlotResponse {
    pub slot_id: Uuid,
    pub outcome: ReservationOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub time: String,
    pub student: Option<Uuid>,
}
