//! In-memory claimant store
//!
//! Vec-backed implementation of the store port, preserving insertion order
//! as the store's natural order. Used by HTTP-level tests and suitable for
//! local development without PostgreSQL.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain_claimant::{
    Claimant, ClaimantQuery, ClaimantStore, ClaimantUpdate, NewClaimant, StoreError,
};

#[derive(Debug, Default)]
pub struct InMemoryClaimantStore {
    records: RwLock<Vec<Claimant>>,
}

impl InMemoryClaimantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, for mutation assertions in tests.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ClaimantStore for InMemoryClaimantStore {
    async fn find_all(&self) -> Result<Vec<Claimant>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn find_one(&self, query: ClaimantQuery) -> Result<Claimant, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|c| match &query {
                ClaimantQuery::RefNo(v) => &c.ref_no == v,
                ClaimantQuery::Nino(v) => c.nino.as_ref() == Some(v),
            })
            .cloned()
            .ok_or_else(|| StoreError::not_found(query.value()))
    }

    async fn create(&self, claimant: NewClaimant) -> Result<Claimant, StoreError> {
        let created = claimant.into_claimant(Uuid::new_v4());
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: ClaimantUpdate,
    ) -> Result<Claimant, StoreError> {
        let mut records = self.records.write().await;
        let claimant = records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        update.apply_to(claimant);
        Ok(claimant.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Claimant, StoreError> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        Ok(records.remove(position))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
