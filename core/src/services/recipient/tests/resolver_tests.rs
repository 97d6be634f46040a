//! Tests for RecipientResolver

use std::sync::Arc;

use crate::domain::entities::recipient::{AccountKind, Client, ContactNumber, StaffMember, UserId};
use crate::errors::ResolutionError;
use crate::repositories::{MockClientRepository, MockContactRepository, MockStaffRepository};
use crate::services::recipient::RecipientResolver;

type Resolver = RecipientResolver<MockStaffRepository, MockClientRepository, MockContactRepository>;

struct Fixture {
    staff: Arc<MockStaffRepository>,
    clients: Arc<MockClientRepository>,
    contacts: Arc<MockContactRepository>,
    resolver: Resolver,
}

fn fixture() -> Fixture {
    let staff = Arc::new(MockStaffRepository::new());
    let clients = Arc::new(MockClientRepository::new());
    let contacts = Arc::new(MockContactRepository::new());
    let resolver = RecipientResolver::new(
        Arc::clone(&staff),
        Arc::clone(&clients),
        Arc::clone(&contacts),
    );
    Fixture {
        staff,
        clients,
        contacts,
        resolver,
    }
}

fn staff_member(user_id: u64, mobile: Option<&str>) -> StaffMember {
    StaffMember {
        id: 1,
        user_id: UserId::new(user_id),
        first_name: "Asha".to_string(),
        last_name: "Mwinyi".to_string(),
        number_mobile: mobile.map(str::to_string),
    }
}

fn client(user_id: u64, contact_id: u64) -> Client {
    Client {
        id: 10,
        user_id: UserId::new(user_id),
        contact_id,
        first_name: "Juma".to_string(),
        last_name: "Said".to_string(),
    }
}

#[tokio::test]
async fn test_staff_resolved_without_contact_lookup() {
    let f = fixture();
    f.staff.insert(staff_member(3, Some("0754 000 111")));

    let recipient = f.resolver.resolve(UserId::new(3)).await.unwrap();

    assert_eq!(recipient.kind, AccountKind::Staff);
    assert_eq!(recipient.dialing_address(), Some("0754 000 111"));
    assert_eq!(recipient.display_name, "Asha Mwinyi");
    assert_eq!(f.clients.lookup_count(), 0);
    assert_eq!(f.contacts.lookup_count(), 0);
}

#[tokio::test]
async fn test_client_takes_first_number_in_store_order() {
    let f = fixture();
    f.clients.insert(client(7, 70));
    f.contacts.add_number(ContactNumber::mobile(1, 70, "0712111222"));
    f.contacts.add_number(ContactNumber::mobile(2, 70, "0713333444"));

    let recipient = f.resolver.resolve(UserId::new(7)).await.unwrap();

    assert_eq!(recipient.kind, AccountKind::Client);
    assert_eq!(recipient.dialing_address(), Some("0712111222"));
    assert_eq!(f.staff.lookup_count(), 1);
    assert_eq!(f.contacts.lookup_count(), 1);
}

#[tokio::test]
async fn test_client_without_numbers_has_no_address() {
    let f = fixture();
    f.clients.insert(client(8, 80));

    let recipient = f.resolver.resolve(UserId::new(8)).await.unwrap();

    assert_eq!(recipient.kind, AccountKind::Client);
    assert!(recipient.dialing_address().is_none());
}

#[tokio::test]
async fn test_unknown_user() {
    let f = fixture();

    let err = f.resolver.resolve(UserId::new(99)).await.unwrap_err();

    assert_eq!(err, ResolutionError::UserNotFound { user_id: UserId::new(99) });
    assert_eq!(f.contacts.lookup_count(), 0);
}

#[tokio::test]
async fn test_staff_lookup_fault_is_backend_error() {
    let f = fixture();
    f.staff.set_should_fail(true);
    f.clients.insert(client(7, 70));

    let err = f.resolver.resolve(UserId::new(7)).await.unwrap_err();

    assert!(matches!(err, ResolutionError::Backend { .. }));
    assert_eq!(f.clients.lookup_count(), 0);
}

#[tokio::test]
async fn test_contact_lookup_fault_is_backend_error() {
    let f = fixture();
    f.clients.insert(client(7, 70));
    f.contacts.set_should_fail(true);

    let err = f.resolver.resolve(UserId::new(7)).await.unwrap_err();

    match err {
        ResolutionError::Backend { message } => assert!(message.starts_with("contact lookup")),
        other => panic!("unexpected error: {:?}", other),
    }
}
