//! HTML email rendering
//!
//! Every notification is one kind-specific content fragment wrapped in the
//! shared studio shell: a brand header with icon and title, and a footer with
//! the university logo and contact address.
//!
//! Field values are interpolated as given. Nothing is escaped.

mod fragments;

use chrono::{DateTime, Local};

use crate::{models::notification::NotificationRecord, notifications::NotificationKind};

/// Studio brand colour used by the shell and the status page
pub const BRAND_RED: &str = "#C8102E";

pub const LOGO_URL: &str = "https://www.uaeu.ac.ae/en/dvcc/public_relations/_images/uaeu_logo.png";

/// Inputs to rendering that do not come from the record
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Contact address shown in the footer and closing lines
    pub contact_email: &'a str,
    /// Shown as the submission time in admin notifications
    pub submitted_at: DateTime<Local>,
}

impl<'a> RenderContext<'a> {
    pub fn now(contact_email: &'a str) -> Self {
        Self {
            contact_email,
            submitted_at: Local::now(),
        }
    }
}

/// Render the complete HTML document for one notification
pub fn render(kind: NotificationKind, record: &NotificationRecord, ctx: &RenderContext) -> String {
    let content = match kind {
        NotificationKind::ReservationConfirmation => fragments::reservation_confirmation(record, ctx),
        NotificationKind::ReservationApproved => fragments::reservation_approved(record),
        NotificationKind::ReservationRejected => fragments::reservation_rejected(record, ctx),
        NotificationKind::BorrowConfirmation => fragments::borrow_confirmation(record, ctx),
        NotificationKind::BorrowApproved => fragments::borrow_approved(record),
        NotificationKind::BorrowRejected => fragments::borrow_rejected(record, ctx),
        NotificationKind::AdminNotification => fragments::admin_notification(record, ctx),
    };

    layout(&kind.title(record), kind.icon(), &content, ctx.contact_email)
}

fn layout(title: &str, icon: &str, content: &str, contact_email: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>{STYLESHEET}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="icon">{icon}</div>
            <h1>{title}</h1>
        </div>
        <div class="content">
{content}
        </div>
        <div class="footer">
            <img src="{LOGO_URL}" alt="UAEU Logo">
            <p><strong>UAEU Media Studio</strong></p>
            <p>United Arab Emirates University</p>
            <p>📧 {contact_email}</p>
        </div>
    </div>
</body>
</html>
"#
    )
}

const STYLESHEET: &str = r#"
        body { margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f5f5f5; }
        .container { max-width: 600px; margin: 0 auto; background: white; }
        .header { background: linear-gradient(135deg, #C8102E 0%, #A00D26 100%); padding: 40px; text-align: center; }
        .header h1 { color: white; margin: 0; font-size: 28px; }
        .icon { font-size: 48px; margin-bottom: 10px; }
        .content { padding: 40px; color: #333; line-height: 1.6; }
        .info-box { background: #f8f9fa; border-left: 4px solid #C8102E; padding: 20px; margin: 20px 0; }
        .info-box p { margin: 8px 0; }
        .button { display: inline-block; padding: 12px 30px; background: #C8102E; color: white; text-decoration: none; border-radius: 5px; margin: 20px 0; }
        .footer { background: #f8f9fa; padding: 30px; text-align: center; border-top: 3px solid #C8102E; }
        .footer img { max-width: 150px; margin-bottom: 10px; }
        .footer p { color: #666; font-size: 14px; margin: 5px 0; }
    "#;
