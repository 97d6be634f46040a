//! Shared test harness: the messenger over in-memory repositories

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use wl_api::AppState;
use wl_core::{
    Client, ContactNumber, DeliveryLogger, MessengerConfig, MessengerService,
    MockClientRepository, MockContactRepository, MockDeliveryLogRepository, MockStaffRepository,
    ProviderCredentials, RecipientResolver, StaffMember, UserId,
};
use wl_infra::sms::MockSmsClient;

pub type TestState = AppState<
    MockStaffRepository,
    MockClientRepository,
    MockContactRepository,
    MockSmsClient,
    MockDeliveryLogRepository,
>;

pub const MAX_PAYLOAD: usize = 64 * 1024;

pub struct Harness {
    pub staff: Arc<MockStaffRepository>,
    pub clients: Arc<MockClientRepository>,
    pub contacts: Arc<MockContactRepository>,
    pub gateway: MockSmsClient,
    pub log: Arc<MockDeliveryLogRepository>,
    pub state: web::Data<TestState>,
}

pub fn harness(gateway: MockSmsClient) -> Harness {
    let staff = Arc::new(MockStaffRepository::new());
    let clients = Arc::new(MockClientRepository::new());
    let contacts = Arc::new(MockContactRepository::new());
    let log = Arc::new(MockDeliveryLogRepository::new());

    let messenger = MessengerService::new(
        RecipientResolver::new(Arc::clone(&staff), Arc::clone(&clients), Arc::clone(&contacts)),
        Arc::new(gateway.clone()),
        DeliveryLogger::new(Arc::clone(&log)),
        ProviderCredentials::new("WEBLINE", "test-key"),
        MessengerConfig::default(),
    );

    Harness {
        staff,
        clients,
        contacts,
        gateway,
        log,
        state: web::Data::new(AppState::new(messenger)),
    }
}

impl Harness {
    pub fn with_staff(self, user_id: u64, mobile: Option<&str>) -> Self {
        self.staff.insert(StaffMember {
            id: user_id,
            user_id: UserId::new(user_id),
            first_name: "Neema".to_string(),
            last_name: "Kato".to_string(),
            number_mobile: mobile.map(str::to_string),
        });
        self
    }

    pub fn with_client(self, user_id: u64, numbers: &[&str]) -> Self {
        let contact_id = user_id * 10;
        self.clients.insert(Client {
            id: user_id,
            user_id: UserId::new(user_id),
            contact_id,
            first_name: "Baraka".to_string(),
            last_name: "Mushi".to_string(),
        });
        for (i, number) in numbers.iter().enumerate() {
            self.contacts
                .add_number(ContactNumber::mobile(i as u64 + 1, contact_id, *number));
        }
        self
    }
}
