//! The seven notification kinds and their per-kind policies

use std::{fmt, str::FromStr};

use crate::models::notification::NotificationRecord;

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The student named in the record (`email` field)
    Student,
    /// The configured studio administrator
    Administrator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    ReservationConfirmation,
    ReservationApproved,
    ReservationRejected,
    BorrowConfirmation,
    BorrowApproved,
    BorrowRejected,
    AdminNotification,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 7] = [
        NotificationKind::ReservationConfirmation,
        NotificationKind::ReservationApproved,
        NotificationKind::ReservationRejected,
        NotificationKind::BorrowConfirmation,
        NotificationKind::BorrowApproved,
        NotificationKind::BorrowRejected,
        NotificationKind::AdminNotification,
    ];

    /// Path segment under `/api/email/`
    pub fn slug(self) -> &'static str {
        match self {
            NotificationKind::ReservationConfirmation => "reservation-confirmation",
            NotificationKind::ReservationApproved => "reservation-approved",
            NotificationKind::ReservationRejected => "reservation-rejected",
            NotificationKind::BorrowConfirmation => "borrow-confirmation",
            NotificationKind::BorrowApproved => "borrow-approved",
            NotificationKind::BorrowRejected => "borrow-rejected",
            NotificationKind::AdminNotification => "admin-notification",
        }
    }

    pub fn audience(self) -> Audience {
        match self {
            NotificationKind::AdminNotification => Audience::Administrator,
            _ => Audience::Student,
        }
    }

    pub fn subject(self, record: &NotificationRecord) -> String {
        match self {
            NotificationKind::ReservationConfirmation => {
                "Studio Reservation Confirmation - UAEU".to_string()
            }
            NotificationKind::ReservationApproved => {
                "✅ Reservation Approved - UAEU Media Studio".to_string()
            }
            NotificationKind::ReservationRejected => {
                "Reservation Status Update - UAEU Media Studio".to_string()
            }
            NotificationKind::BorrowConfirmation => "Equipment Borrow Confirmation - UAEU".to_string(),
            NotificationKind::BorrowApproved => "✅ Equipment Borrow Approved - UAEU".to_string(),
            NotificationKind::BorrowRejected => "Borrow Request Status Update - UAEU".to_string(),
            NotificationKind::AdminNotification => {
                format!("🔔 New {} Request - UAEU Media Studio", record.request_noun())
            }
        }
    }

    /// Heading shown in the branded email header
    pub fn title(self, record: &NotificationRecord) -> String {
        match self {
            NotificationKind::ReservationConfirmation => "Reservation Confirmation".to_string(),
            NotificationKind::ReservationApproved => "Reservation Approved ✅".to_string(),
            NotificationKind::ReservationRejected => "Reservation Update".to_string(),
            NotificationKind::BorrowConfirmation => "Borrow Request Confirmation".to_string(),
            NotificationKind::BorrowApproved => "Borrow Request Approved ✅".to_string(),
            NotificationKind::BorrowRejected => "Borrow Request Update".to_string(),
            NotificationKind::AdminNotification => format!("New {} Request", record.request_noun()),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::ReservationConfirmation => "📧",
            NotificationKind::ReservationApproved | NotificationKind::BorrowApproved => "🎉",
            NotificationKind::ReservationRejected | NotificationKind::BorrowRejected => "📋",
            NotificationKind::BorrowConfirmation => "📦",
            NotificationKind::AdminNotification => "🔔",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for NotificationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
