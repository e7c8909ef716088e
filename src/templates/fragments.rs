//! Content blocks for each notification kind

use super::RenderContext;
use crate::models::notification::{Field, NotificationRecord};

const PENDING: &str = r#"<span style="color: #f59e0b;">⏳ Pending Approval</span>"#;
const APPROVED: &str = r#"<span style="color: #10b981;">✅ Approved</span>"#;
const NOT_APPROVED: &str = r#"<span style="color: #ef4444;">❌ Not Approved</span>"#;

const SIGN_OFF: &str = "<p>Best regards,<br><strong>UAEU Media Studio Team</strong></p>";

/// Unconditional field: absent values show up as `undefined`
fn show(field: &Option<Field>) -> &str {
    field.as_ref().map_or("undefined", Field::as_str)
}

/// Conditional field: present only when supplied with a truthy value
fn given(field: &Option<Field>) -> Option<&str> {
    field
        .as_ref()
        .filter(|value| value.is_truthy())
        .map(Field::as_str)
}

fn line(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {value}</p>")
}

fn optional_line(label: &str, field: &Option<Field>) -> String {
    given(field).map(|value| line(label, value)).unwrap_or_default()
}

fn time_range(record: &NotificationRecord) -> String {
    format!("{} - {}", show(&record.from_time), show(&record.to_time))
}

fn bullets(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("\n                <li>{item}</li>"))
        .collect();
    format!("<ul>{items}\n            </ul>")
}

fn contact_line(ctx: &RenderContext) -> String {
    format!(
        "<p>If you have any questions, please contact us at <strong>{}</strong></p>",
        ctx.contact_email
    )
}

pub(super) fn reservation_confirmation(record: &NotificationRecord, ctx: &RenderContext) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>Your studio reservation request has been received and is pending approval.</p>

            <div class="info-box">
                <p><strong>📝 Reservation Details:</strong></p>
                {student_id}
                {email}
                {date}
                {time}
                {purpose}
                {status}
            </div>

            <p>You will receive another email once the admin reviews your request.</p>
            {contact}

            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        email = line("Email", show(&record.email)),
        date = line("Date", show(&record.date)),
        time = line("Time", &time_range(record)),
        purpose = line("Purpose", show(&record.purpose)),
        status = line("Status", PENDING),
        contact = contact_line(ctx),
    )
}

pub(super) fn reservation_approved(record: &NotificationRecord) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>🎉 <strong>Great news!</strong> Your studio reservation has been <strong style="color: #10b981;">APPROVED</strong>!</p>

            <div class="info-box">
                <p><strong>✅ Approved Reservation:</strong></p>
                {student_id}
                {date}
                {time}
                {purpose}
                {status}
            </div>

            <p><strong>📍 Important Reminders:</strong></p>
            {reminders}

            <p>We look forward to seeing you!</p>
            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        date = line("Date", show(&record.date)),
        time = line("Time", &time_range(record)),
        purpose = line("Purpose", show(&record.purpose)),
        status = line("Status", APPROVED),
        reminders = bullets(&[
            "Please arrive on time",
            "Bring your student ID card",
            "Follow studio guidelines",
            "Contact us if you need to cancel",
        ]),
    )
}

pub(super) fn reservation_rejected(record: &NotificationRecord, ctx: &RenderContext) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>Thank you for your interest in using the UAEU Media Studio.</p>
            <p>Unfortunately, we cannot approve your reservation request at this time.</p>

            <div class="info-box">
                <p><strong>❌ Reservation Details:</strong></p>
                {student_id}
                {date}
                {time}
                {status}
                {reason}
            </div>

            <p><strong>📋 Next Steps:</strong></p>
            {next_steps}

            {contact}
            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        date = line("Date", show(&record.date)),
        time = line("Time", &time_range(record)),
        status = line("Status", NOT_APPROVED),
        reason = optional_line("Reason", &record.reason),
        next_steps = bullets(&[
            "You can submit a new request for a different time slot",
            "Contact us for more information about availability",
            "Check our guidelines for reservation requirements",
        ]),
        contact = contact_line(ctx),
    )
}

pub(super) fn borrow_confirmation(record: &NotificationRecord, ctx: &RenderContext) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>Your equipment borrow request has been received and is pending approval.</p>

            <div class="info-box">
                <p><strong>📦 Borrow Request Details:</strong></p>
                {student_id}
                {email}
                {equipment}
                {borrow_date}
                {return_date}
                {purpose}
                {status}
            </div>

            <p>You will receive another email once the admin reviews your request.</p>
            {contact}

            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        email = line("Email", show(&record.email)),
        equipment = line("Equipment", show(&record.equipment)),
        borrow_date = line("Borrow Date", show(&record.borrow_date)),
        return_date = line("Return Date", show(&record.return_date)),
        purpose = line("Purpose", show(&record.purpose)),
        status = line("Status", PENDING),
        contact = contact_line(ctx),
    )
}

pub(super) fn borrow_approved(record: &NotificationRecord) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>🎉 <strong>Great news!</strong> Your equipment borrow request has been <strong style="color: #10b981;">APPROVED</strong>!</p>

            <div class="info-box">
                <p><strong>✅ Approved Borrow Request:</strong></p>
                {student_id}
                {equipment}
                {borrow_date}
                {return_date}
                {purpose}
                {status}
            </div>

            <p><strong>📍 Important Instructions:</strong></p>
            {instructions}

            <p>Thank you for using UAEU Media Studio!</p>
            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        equipment = line("Equipment", show(&record.equipment)),
        borrow_date = line("Borrow Date", show(&record.borrow_date)),
        return_date = line("Return Date", show(&record.return_date)),
        purpose = line("Purpose", show(&record.purpose)),
        status = line("Status", APPROVED),
        instructions = bullets(&[
            "Come to the studio to pick up the equipment",
            "Bring your student ID card",
            "Return the equipment by the specified date",
            "Handle equipment with care",
            "Report any issues immediately",
        ]),
    )
}

pub(super) fn borrow_rejected(record: &NotificationRecord, ctx: &RenderContext) -> String {
    format!(
        r#"
            <p><strong>Dear {name},</strong></p>
            <p>Thank you for your interest in borrowing equipment from UAEU Media Studio.</p>
            <p>Unfortunately, we cannot approve your borrow request at this time.</p>

            <div class="info-box">
                <p><strong>❌ Borrow Request Details:</strong></p>
                {student_id}
                {equipment}
                {borrow_date}
                {return_date}
                {status}
                {reason}
            </div>

            <p><strong>📋 Next Steps:</strong></p>
            {next_steps}

            {contact}
            {SIGN_OFF}
"#,
        name = show(&record.student_name),
        student_id = line("Student ID", show(&record.student_id)),
        equipment = line("Equipment", show(&record.equipment)),
        borrow_date = line("Borrow Date", show(&record.borrow_date)),
        return_date = line("Return Date", show(&record.return_date)),
        status = line("Status", NOT_APPROVED),
        reason = optional_line("Reason", &record.reason),
        next_steps = bullets(&[
            "Check equipment availability for other dates",
            "Contact us for alternative equipment options",
            "Review borrowing guidelines and requirements",
        ]),
        contact = contact_line(ctx),
    )
}

/// Review request sent to the studio administrator.
///
/// The noun comes from the record's `type`; date, time and equipment lines
/// appear only for the fields the submitting form actually sent.
pub(super) fn admin_notification(record: &NotificationRecord, ctx: &RenderContext) -> String {
    let noun = record.request_noun();
    // The time line is keyed on fromTime alone; toTime may still be missing
    let time = given(&record.from_time)
        .map(|_| line("Time", &time_range(record)))
        .unwrap_or_default();

    format!(
        r#"
            <p><strong>New {noun} Request Received!</strong></p>
            <p>A student has submitted a new {lower} request that requires your review.</p>

            <div class="info-box">
                <p><strong>📋 Request Details:</strong></p>
                {student_name}
                {student_id}
                {email}
                {date}
                {time}
                {equipment}
                {borrow_date}
                {return_date}
                {purpose}
                {submitted}
            </div>

            <p><strong>⚡ Action Required:</strong></p>
            {actions}

            <p><em>This is an automated notification from the UAEU Media Studio system.</em></p>
"#,
        lower = noun.to_lowercase(),
        student_name = line("Student Name", show(&record.student_name)),
        student_id = line("Student ID", show(&record.student_id)),
        email = line("Email", show(&record.email)),
        date = optional_line("Date", &record.date),
        equipment = optional_line("Equipment", &record.equipment),
        borrow_date = optional_line("Borrow Date", &record.borrow_date),
        return_date = optional_line("Return Date", &record.return_date),
        purpose = line("Purpose", show(&record.purpose)),
        submitted = line(
            "Submitted",
            &ctx.submitted_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
        ),
        actions = bullets(&[
            "Log in to the admin dashboard",
            "Review the request details",
            "Approve or reject the request",
            "Student will be notified automatically",
        ]),
    )
}
