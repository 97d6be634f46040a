//! Recipient entities: the host platform's user accounts and the resolved
//! identity a message is addressed to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host platform user identifier
///
/// Staff members and clients share one user id space; the account kind is
/// only known after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw user id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Kind of account a user id resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Back-office staff member, addressed through their own mobile field
    Staff,
    /// Customer account, addressed through its primary contact's numbers
    Client,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Client => "client",
        }
    }
}

/// Staff account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Staff record id
    pub id: u64,
    /// Login user id
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Mobile number as entered by the staff member
    pub number_mobile: Option<String>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Client account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client record id
    pub id: u64,
    /// Login user id
    pub user_id: UserId,
    /// Primary contact holding the client's phone numbers
    pub contact_id: u64,
    pub first_name: String,
    pub last_name: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Kind of contact number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactNumberType {
    Phone,
    Fax,
}

impl ContactNumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Fax => "fax",
        }
    }

    /// Parse the stored column value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "phone" => Some(Self::Phone),
            "fax" => Some(Self::Fax),
            _ => None,
        }
    }
}

/// Where a contact number rings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocation {
    Home,
    Work,
    Mobile,
}

impl NumberLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Mobile => "mobile",
        }
    }

    /// Parse the stored column value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "work" => Some(Self::Work),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// A phone number attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber {
    pub id: u64,
    pub contact_id: u64,
    pub number: String,
    pub number_type: ContactNumberType,
    pub location: NumberLocation,
}

impl ContactNumber {
    /// Mobile phone number for a contact
    pub fn mobile(id: u64, contact_id: u64, number: impl Into<String>) -> Self {
        Self {
            id,
            contact_id,
            number: number.into(),
            number_type: ContactNumberType::Phone,
            location: NumberLocation::Mobile,
        }
    }
}

/// The resolved identity and contact address a message is sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub kind: AccountKind,
    pub user_id: UserId,
    pub display_name: String,
    /// Contact address; `None` when the account has nothing usable on file
    pub dialing_address: Option<String>,
}

impl Recipient {
    /// Recipient for a staff account, addressed through its mobile field
    pub fn staff(member: &StaffMember) -> Self {
        Self {
            kind: AccountKind::Staff,
            user_id: member.user_id,
            display_name: member.full_name(),
            dialing_address: non_blank(member.number_mobile.as_deref()),
        }
    }

    /// Recipient for a client account, addressed through the given contact number
    pub fn client(client: &Client, number: Option<&ContactNumber>) -> Self {
        Self {
            kind: AccountKind::Client,
            user_id: client.user_id,
            display_name: client.full_name(),
            dialing_address: non_blank(number.map(|n| n.number.as_str())),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.kind, AccountKind::Staff)
    }

    pub fn dialing_address(&self) -> Option<&str> {
        self.dialing_address.as_deref()
    }

    /// Replace the contact address, dropping it when blank
    pub fn with_dialing_address(mut self, address: Option<String>) -> Self {
        self.dialing_address = non_blank(address.as_deref());
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}
