//! Resource-circle operations.
//!
//! Circles are private reference material; none of the visibility or
//! engagement machinery applies to them.

use crate::model::circle::{ResourceGroup, ResourceGroupId};
use crate::model::user::UserId;
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::{NexusStore, StoreError, StoreResult};

impl<R: SnapshotRepository> NexusStore<R> {
    /// Appends a resource group and returns its id.
    pub fn add_resource_group(&mut self, group: ResourceGroup) -> StoreResult<ResourceGroupId> {
        let id = group.id;
        self.state.resource_groups.push(group);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching group, members included.
    pub fn update_resource_group(
        &mut self,
        id: ResourceGroupId,
        mutate: impl FnOnce(&mut ResourceGroup),
    ) -> StoreResult<()> {
        let index = self.require_group_index(id)?;
        mutate(&mut self.state.resource_groups[index]);
        self.commit()
    }

    /// Removes the matching group together with its embedded members.
    pub fn delete_resource_group(&mut self, id: ResourceGroupId) -> StoreResult<()> {
        self.require_group_index(id)?;
        self.state.resource_groups.retain(|group| group.id != id);
        self.commit()
    }

    pub fn resource_group(&self, id: ResourceGroupId) -> Option<&ResourceGroup> {
        self.state.resource_groups.iter().find(|group| group.id == id)
    }

    /// All of a user's groups in insertion order.
    pub fn resource_groups_for(&self, user: UserId) -> Vec<&ResourceGroup> {
        self.state
            .resource_groups
            .iter()
            .filter(|group| group.user_id == user)
            .collect()
    }

    fn require_group_index(&self, id: ResourceGroupId) -> StoreResult<usize> {
        self.state
            .resource_groups
            .iter()
            .position(|group| group.id == id)
            .ok_or(StoreError::NotFound {
                entity: "resource group",
                id,
            })
    }
}
