use crate::{
    CoreError, CoreResult, FeedbackId, FeedbackItem, FeedbackStatus, StatusBucket,
    TransferRejection,
};

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

/// The client's complete working copy of the Kanban board.
///
/// Every item lives in exactly one bucket, the one keyed by its own status.
/// Construction validates this and every mutation preserves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    buckets: BTreeMap<FeedbackStatus, StatusBucket>,
}

impl BoardSnapshot {
    /// Build a snapshot from backend buckets, rejecting misplaced or duplicate items.
    #[track_caller]
    pub fn from_buckets(buckets: BTreeMap<FeedbackStatus, StatusBucket>) -> CoreResult<Self> {
        let snapshot = Self { buckets };
        snapshot.check_invariant()?;
        Ok(snapshot)
    }

    /// Verify that each item appears once, in the bucket matching its status.
    #[track_caller]
    pub fn check_invariant(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();

        for (status, bucket) in &self.buckets {
            for item in &bucket.feedbacks {
                if item.status != *status {
                    return Err(CoreError::inconsistent(format!(
                        "feedback {} has status '{}' but is in the '{}' bucket",
                        item.id, item.status, status
                    )));
                }
                if !seen.insert(item.id) {
                    return Err(CoreError::inconsistent(format!(
                        "feedback {} appears more than once",
                        item.id
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn bucket(&self, status: FeedbackStatus) -> Option<&StatusBucket> {
        self.buckets.get(&status)
    }

    /// Buckets in column order
    pub fn buckets(&self) -> impl Iterator<Item = (FeedbackStatus, &StatusBucket)> {
        self.buckets.iter().map(|(status, bucket)| (*status, bucket))
    }

    pub fn statuses(&self) -> impl Iterator<Item = FeedbackStatus> + '_ {
        self.buckets.keys().copied()
    }

    pub fn contains_status(&self, status: FeedbackStatus) -> bool {
        self.buckets.contains_key(&status)
    }

    pub fn find(&self, id: FeedbackId) -> Option<&FeedbackItem> {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.feedbacks.iter())
            .find(|item| item.id == id)
    }

    pub fn status_of(&self, id: FeedbackId) -> Option<FeedbackStatus> {
        self.find(id).map(|item| item.status)
    }

    /// Total number of items across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(StatusBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(StatusBucket::is_empty)
    }

    /// Move an item to the bucket named by a column key.
    ///
    /// Keys that are not status columns (e.g. another card's id) are rejected.
    pub fn transfer_to_key(
        &mut self,
        id: FeedbackId,
        key: &str,
    ) -> Result<FeedbackItem, TransferRejection> {
        let target = FeedbackStatus::from_str(key).map_err(|_| TransferRejection::UnknownTarget {
            key: key.to_string(),
        })?;
        self.transfer(id, target)
    }

    /// Optimistically move an item to `target`.
    ///
    /// The item is removed from its current bucket, its status is rewritten,
    /// and it is placed first in the target bucket. On rejection the snapshot
    /// is untouched. Returns the moved item as it now appears.
    pub fn transfer(
        &mut self,
        id: FeedbackId,
        target: FeedbackStatus,
    ) -> Result<FeedbackItem, TransferRejection> {
        let current = self
            .status_of(id)
            .ok_or(TransferRejection::UnknownItem { id })?;

        if !self.buckets.contains_key(&target) {
            return Err(TransferRejection::UnknownTarget {
                key: target.as_str().to_string(),
            });
        }

        if current == target {
            return Err(TransferRejection::SameStatus { id, status: current });
        }

        let mut item = {
            let source = self
                .buckets
                .get_mut(&current)
                .ok_or(TransferRejection::UnknownItem { id })?;
            let index = source
                .feedbacks
                .iter()
                .position(|item| item.id == id)
                .ok_or(TransferRejection::UnknownItem { id })?;
            let item = source.feedbacks.remove(index);
            source.touch();
            item
        };

        item.status = target;

        let destination = self
            .buckets
            .get_mut(&target)
            .ok_or(TransferRejection::UnknownTarget {
                key: target.as_str().to_string(),
            })?;
        destination.feedbacks.insert(0, item.clone());
        destination.touch();

        Ok(item)
    }

    /// Apply the viewer's upvote state to an item, adjusting its count.
    ///
    /// Returns the updated item, or `None` when the id is not on the board.
    pub fn apply_upvote(&mut self, id: FeedbackId, upvoted: bool) -> Option<&FeedbackItem> {
        let bucket = self
            .buckets
            .values_mut()
            .find(|bucket| bucket.feedbacks.iter().any(|item| item.id == id))?;

        let index = bucket.feedbacks.iter().position(|item| item.id == id)?;
        if bucket.feedbacks[index].set_upvoted(upvoted) {
            bucket.touch();
        }

        bucket.feedbacks.get(index)
    }
}
