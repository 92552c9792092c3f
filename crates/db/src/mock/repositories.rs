use mockall::mock;
use slotbook_core::models::slot::ReservationOutcome;
use uuid::Uuid;

use crate::models::{DbCompany, DbSlot, DbTraining};

// Mock repositories for testing
mock! {
    pub CompanyRepo {
        pub async fn create_company(&self, name: &'static str) -> eyre::Result<DbCompany>;

        pub async fn list_companies(&self) -> eyre::Result<Vec<DbCompany>>;

        pub async fn get_company_by_id(&self, id: Uuid) -> eyre::Result<Option<DbCompany>>;

        pub async fn update_company(
            &self,
            id: Uuid,
            name: Option<&'static str>,
        ) -> eyre::Result<Option<DbCompany>>;

        pub async fn delete_company(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub SlotRepo {
        pub async fn create_slots(
            &self,
            company_id: Uuid,
            times: Vec<String>,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_slots_by_company_id(
            &self,
            company_id: Uuid,
        ) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_slot_by_id(&self, id: Uuid) -> eyre::Result<Option<DbSlot>>;

        pub async fn reserve_slot(
            &self,
            slot_id: Uuid,
            student_id: Uuid,
        ) -> eyre::Result<ReservationOutcome>;
    }
}

mock! {
    pub TrainingRepo {
        pub async fn create_training(&self, name: &'static str) -> eyre::Result<DbTraining>;

        pub async fn list_trainings(&self) -> eyre::Result<Vec<DbTraining>>;

        pub async fn get_trainings_by_company_id(
            &self,
            company_id: Uuid,
        ) -> eyre::Result<Vec<DbTraining>>;

        pub async fn set_company_trainings(
            &self,
            company_id: Uuid,
            training_ids: Vec<Uuid>,
        ) -> eyre::Result<()>;
    }
}
