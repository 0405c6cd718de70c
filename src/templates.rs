//! src/templates.rs
//!
//! Bodies of every message the site sends. Visitor-provided text is always
//! HTML-escaped before it lands in an HTML body.
use crate::domain::ContactSubmission;

pub struct Rendered {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Escapes `s` for HTML and turns its line breaks into `<br>`.
pub fn html_paragraph(s: &str) -> String {
    htmlescape::encode_minimal(s)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

/// Sent to the site owner.
pub fn contact_notification(submission: &ContactSubmission) -> Rendered {
    let name = submission.name.as_ref();
    let email = submission.email.as_ref();
    let message = submission.message.as_ref();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">New Contact Form Submission</h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 5px; margin: 20px 0;">
    <p style="margin: 0 0 10px 0;"><strong>Name:</strong> {name}</p>
    <p style="margin: 0 0 10px 0;"><strong>Email:</strong> {email}</p>
    <p style="margin: 0 0 10px 0;"><strong>Message:</strong></p>
    <div style="background-color: white; padding: 15px; border-radius: 3px; border-left: 4px solid #007bff;">{message}</div>
  </div>
  <p style="color: #666; font-size: 14px; margin-top: 30px;">This email was sent from your portfolio's contact form.</p>
</div>"#,
        name = htmlescape::encode_minimal(name),
        email = htmlescape::encode_minimal(email),
        message = html_paragraph(message),
    );

    let text = format!("Name: {}\nEmail: {}\nMessage: {}", name, email, message);

    Rendered {
        subject: format!("Contact Form Submission from {}", name),
        html,
        text,
    }
}

/// Sent back to the visitor.
pub fn contact_acknowledgment(submission: &ContactSubmission, owner_name: &str) -> Rendered {
    let name = submission.name.as_ref();
    let message = submission.message.as_ref();

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">Thank you for reaching out!</h2>
  <p>Hi {name},</p>
  <p>Thank you for contacting me through my portfolio. I've received your message and will get back to you shortly.</p>
  <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <p style="margin: 0 0 10px 0;"><strong>Your message:</strong></p>
    <div style="background-color: white; padding: 15px; border-radius: 3px; border-left: 4px solid #28a745;">{message}</div>
  </div>
  <p>Best regards,<br><strong>{owner}</strong></p>
  <p style="color: #666; font-size: 14px; margin-top: 30px;">This is an automated response. Please don't reply to this email.</p>
</div>"#,
        name = htmlescape::encode_minimal(name),
        message = html_paragraph(message),
        owner = htmlescape::encode_minimal(owner_name),
    );

    let text = format!(
        "Hi {},\n\nThank you for contacting me. I've received your message and will get back to you shortly.\n\nYour message:\n{}\n\nBest regards,\n{}",
        name, message, owner_name
    );

    Rendered {
        subject: "Thank you for reaching out!".into(),
        html,
        text,
    }
}

pub fn newsletter_welcome(owner_name: &str) -> Rendered {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">Welcome to My Portfolio!</h2>
  <p>Hi there,</p>
  <p>Thank you for subscribing to my Portfolio! I'm excited to keep you updated with my latest projects, blog posts, and insights.</p>
  <p>You can expect to hear from me with:</p>
  <ul style="color: #555;">
    <li>New project updates and case studies</li>
    <li>Technical articles and tutorials</li>
    <li>Industry insights and trends</li>
    <li>Behind-the-scenes content</li>
  </ul>
  <p>Best regards,<br><strong>{owner}</strong></p>
  <p style="color: #666; font-size: 14px; margin-top: 30px;">If you didn't sign up for this newsletter, you can safely ignore this email.</p>
</div>"#,
        owner = htmlescape::encode_minimal(owner_name),
    );

    let text = format!(
        "Hi there,\n\nThank you for subscribing to my newsletter. I'm excited to keep you updated with my latest projects, blog posts, and insights.\n\nBest regards,\n{}\n\nIf you didn't sign up for this newsletter, you can safely ignore this email.",
        owner_name
    );

    Rendered {
        subject: "Welcome to My Portfolio!".into(),
        html,
        text,
    }
}
