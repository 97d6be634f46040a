//! In-memory StaffRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::entities::recipient::{StaffMember, UserId};
use crate::errors::DomainError;

use super::StaffRepository;

/// Mock staff directory with lookup counting and failure injection
#[derive(Default)]
pub struct MockStaffRepository {
    staff: Mutex<HashMap<UserId, StaffMember>>,
    lookups: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockStaffRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-filled with staff members
    pub fn with_staff(members: impl IntoIterator<Item = StaffMember>) -> Self {
        let repo = Self::new();
        for member in members {
            repo.insert(member);
        }
        repo
    }

    pub fn insert(&self, member: StaffMember) {
        self.staff
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member.user_id, member);
    }

    /// Number of `find_by_user_id` calls so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Set whether lookups should fail with a storage error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl StaffRepository for MockStaffRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<StaffMember>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "Mock staff repository error".to_string(),
            });
        }

        let staff = self.staff.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(staff.get(&user_id).cloned())
    }
}
